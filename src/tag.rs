//! Attributed tags with a closed vocabulary
//!
//! Unlike [`Element`](crate::Element), a [`Tag`] cannot be assembled freely.
//! Each kind has its own constructor type that only admits the shapes that
//! kind supports, so an image with children or a paragraph with attributes
//! does not compile.
//!
//! ```
//! use tagtree::{Image, Paragraph, Render, Tag};
//!
//! let tag: Tag = Paragraph::with_children([
//!     Image::new("http://pokemon.com/pikachu.png").into(),
//! ])
//! .into();
//!
//! assert_eq!(
//!     tag.render(),
//!     "<p>\n  <img src=\"http://pokemon.com/pikachu.png\"/>\n</p>\n"
//! );
//! ```

mod kinds;

use std::fmt;

pub use self::kinds::{Image, Paragraph};
use crate::render::Render;

/// The kinds of tag the DSL can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Paragraph,
    Image,
}

impl TagKind {
    /// The markup name every tag of this kind renders with
    pub const fn name(self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Image => "img",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the attributed tree, obtained from one of the kind types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    kind: TagKind,
    text: String,
    children: Vec<Tag>,
    attributes: Vec<(String, String)>,
}

impl Tag {
    fn new(kind: TagKind) -> Self {
        Self {
            kind,
            text: String::new(),
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    /// Attributes in insertion order, duplicates included
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Whether the tag renders as a single `<name .../>` line
    pub fn is_self_closing(&self) -> bool {
        self.children.is_empty() && self.text.is_empty()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
