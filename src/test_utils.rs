mod fixtures;
mod helpers;

pub use fixtures::{greeting_list, nested_tree};
pub use helpers::{indentation_of, tmp_file_path};

// Re-export common test types/traits
pub use crate::{
    builder::HtmlBuilder,
    element::Element,
    error::{BuildError, ErrorKind, IOError, InputError, Result},
    journal::{Journal, PersistenceManager},
    person::Person,
    render::{Render, INDENT_SIZE},
    tag::{Image, Paragraph, Tag, TagKind},
    utils::{parse_child_spec, render_to_file},
};
