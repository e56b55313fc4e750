// src/core/dom.rs
//
// Typed, read-only view over a parsed HTML document.
//
// Queries mirror what the page parsers need and nothing more:
//   find_all(tag, class)          every matching descendant, document order
//   find(tag, class)              first matching descendant
//   find_all_tag(tag)             every descendant with the tag
//   first_descendant(tag)         first descendant with the tag
//   nearest_ancestor(tag, class)  closest enclosing match
//   text()                        concatenated descendant text, trimmed
//
// "Descendant" never includes the node itself. Class matching is membership
// in the element's class list, so `class="bold big"` matches "bold".

use scraper::{ElementRef, Html};

/// An owned, parsed page.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self { html: Html::parse_document(markup) }
    }

    /// The `<html>` element; html5ever always synthesizes one.
    pub fn root(&self) -> Node<'_> {
        Node { el: self.html.root_element() }
    }
}

/// Borrowed handle to one element of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl<'a> Node<'a> {
    pub fn tag(&self) -> &'a str {
        self.el.value().name()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.el.value().classes().any(|c| c == class)
    }

    fn is(&self, tag: &str, class: Option<&str>) -> bool {
        self.tag().eq_ignore_ascii_case(tag) && class.is_none_or(|c| self.has_class(c))
    }

    fn descendants(self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.el
            .descendants()
            .skip(1) // self
            .filter_map(ElementRef::wrap)
            .map(|el| Node { el })
    }

    pub fn find_all(self, tag: &'a str, class: &'a str) -> impl Iterator<Item = Node<'a>> + 'a {
        self.descendants().filter(move |n| n.is(tag, Some(class)))
    }

    pub fn find(&self, tag: &str, class: &str) -> Option<Node<'a>> {
        self.descendants().find(|n| n.is(tag, Some(class)))
    }

    pub fn find_all_tag(self, tag: &'a str) -> impl Iterator<Item = Node<'a>> + 'a {
        self.descendants().filter(move |n| n.is(tag, None))
    }

    pub fn first_descendant(&self, tag: &str) -> Option<Node<'a>> {
        self.descendants().find(|n| n.is(tag, None))
    }

    pub fn nearest_ancestor(&self, tag: &str, class: &str) -> Option<Node<'a>> {
        self.el
            .ancestors()
            .filter_map(ElementRef::wrap)
            .map(|el| Node { el })
            .find(|n| n.is(tag, Some(class)))
    }

    /// All text below this element, trimmed at both ends.
    pub fn text(&self) -> String {
        let raw: String = self.el.text().collect();
        raw.trim().to_string()
    }
}
