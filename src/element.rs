use std::fmt;
use tracing::trace;

use crate::{builder::HtmlBuilder, render::Render};

/// A named node in a markup tree.
///
/// An element owns its children; dropping it drops the whole subtree. Text and
/// children may coexist, in which case the text renders before the children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Creates a childless element without text
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }

    /// Entry point for building an element tree fluently from the type itself
    pub fn builder(root_name: impl Into<String>) -> HtmlBuilder {
        HtmlBuilder::new(root_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Appends a new `name`/`text` child after any existing children
    pub fn add_child(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.push_child(Self::new(name, text))
    }

    /// Appends an already built subtree after any existing children
    pub fn push_child(&mut self, child: Self) -> &mut Self {
        trace!(parent = %self.name, child = %child.name, "appending child");
        self.children.push(child);
        self
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
