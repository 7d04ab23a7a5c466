use crate::{
    element::Element,
    error::{BuildError, IOError, InputError, Result},
    journal::PersistenceManager,
    render::Render,
};
use std::{io, path::Path};

/// Splits a `NAME` or `NAME=TEXT` child spec at its first `=`.
/// Whitespace around both parts is dropped.
pub fn parse_child_spec(spec: &str) -> Result<(String, String)> {
    let (name, text) = spec.split_once('=').unwrap_or((spec, ""));
    let (name, text) = (name.trim(), text.trim());

    if name.is_empty() {
        return Err(if spec.contains('=') {
            InputError::InvalidChildSpec(spec.to_string()).into()
        } else {
            InputError::EmptyTagName.into()
        });
    }

    Ok((name.to_string(), text.to_string()))
}

/// Renders `element` and saves the output unchanged
pub fn render_to_file(element: &Element, path: impl AsRef<Path>) -> Result<()> {
    PersistenceManager::save_str(&element.render(), path)
}

pub(crate) fn map_write_error(path: &str, e: io::Error) -> BuildError {
    let kind = match e.kind() {
        io::ErrorKind::NotFound => IOError::FileNotFound(path.to_string()),
        io::ErrorKind::PermissionDenied => IOError::PermissionDenied(path.to_string()),
        _ => IOError::WriteError(e.to_string()),
    };
    BuildError::from(kind).with_source(e)
}
