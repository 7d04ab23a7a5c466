//! tagtree: a small markup tree and the builders around it
//!
//! This crate provides:
//! - [`Element`], an ordered tree of named nodes with optional text
//! - [`HtmlBuilder`], an accretive builder over an element tree
//! - [`Tag`], an attributed tree built from a closed set of typed kinds
//! - [`Person`], a record filled in through separate facet builders
//! - [`Journal`] and [`PersistenceManager`], which keep recording and saving apart
//!
//! Rendering is indentation aware and never escapes anything.
//!
//! # Examples
//! ```
//! use tagtree::{Element, Render};
//!
//! let list = Element::builder("ul")
//!     .with_child("li", "Hello")
//!     .with_child("li", "World")
//!     .build();
//!
//! assert_eq!(
//!     list.render(),
//!     "<ul>\n  <li>\n    Hello\n  </li>\n  <li>\n    World\n  </li>\n</ul>\n"
//! );
//! ```

pub mod builder;
pub mod element;
pub mod error;
pub mod journal;
pub mod person;
pub mod render;
pub mod tag;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use builder::HtmlBuilder;
pub use element::Element;
pub use error::{BuildError, ErrorKind, IOError, InputError, Result};
pub use journal::{Journal, PersistenceManager};
pub use person::{Person, PersonAddressBuilder, PersonBuilder, PersonJobBuilder};
pub use render::{Render, INDENT_SIZE};
pub use tag::{Image, Paragraph, Tag, TagKind};
