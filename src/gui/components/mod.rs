// src/gui/components/mod.rs
pub mod export_bar;
pub mod panels;
pub mod sections;
pub mod url_bar;
