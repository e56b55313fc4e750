// src/render/mod.rs
//
// Presentation helpers. Nothing here feeds back into extraction.

pub mod classify;
pub mod text;

pub use classify::classify;
