//! Accretive construction of element trees
//!
//! [`HtmlBuilder`] owns a root [`Element`] and appends children to it. The
//! same append is reachable three ways:
//!
//! ```
//! use tagtree::{Element, HtmlBuilder};
//!
//! // Sequential calls on a builder variable
//! let mut builder = HtmlBuilder::new("ul");
//! builder.add_child("li", "Hello");
//! builder.add_child("li", "World");
//!
//! // Chained calls on a builder variable
//! let mut chained = HtmlBuilder::new("ul");
//! chained.add_child("li", "Hello").add_child("li", "World");
//!
//! // One expression from the factory entry point
//! let list = Element::builder("ul")
//!     .with_child("li", "Hello")
//!     .with_child("li", "World")
//!     .build();
//!
//! assert_eq!(builder.render(), chained.render());
//! assert_eq!(chained.build(), list);
//! ```

use tracing::debug;

use crate::{element::Element, render::Render};

/// Builds an [`Element`] whose root name is fixed at construction
#[derive(Debug, Clone)]
pub struct HtmlBuilder {
    root: Element,
}

impl HtmlBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root: Element::named(root_name),
        }
    }

    /// Appends a child to the root and returns the builder for chaining
    pub fn add_child(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.root.add_child(name, text);
        self
    }

    /// Consuming form of [`add_child`](Self::add_child)
    pub fn with_child(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.add_child(name, text);
        self
    }

    /// The tree built so far
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn render(&self) -> String {
        self.root.render()
    }

    /// Finishes construction and hands over the root element.
    ///
    /// The builder is consumed, so it cannot be appended to afterwards:
    ///
    /// ```compile_fail
    /// use tagtree::HtmlBuilder;
    ///
    /// let mut builder = HtmlBuilder::new("ul");
    /// let list = builder.build();
    /// builder.add_child("li", "late");
    /// ```
    pub fn build(self) -> Element {
        debug!(
            root = %self.root.name(),
            children = self.root.children().len(),
            "element tree built"
        );
        self.root
    }
}
