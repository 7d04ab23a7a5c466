//! Error handling types for tagtree
//!
//! Building and rendering trees never fails. Errors only come from the edges
//! of the crate: reading construction input from the command line and writing
//! rendered output to disk.

use std::{error::Error as StdError, fmt};
use thiserror::Error;

/// Main error type for tagtree operations
#[derive(Debug)]
pub struct BuildError {
    /// The specific kind of error
    kind: ErrorKind,
    /// Source error that caused this error
    source: Option<Box<dyn StdError + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    IO(IOError),
    Input(InputError),
}

/// Malformed construction input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A child spec named no tag
    #[error("Tag name must not be empty")]
    EmptyTagName,
    /// A child spec that could not be split into name and text
    #[error("Invalid child spec: '{0}' (expected NAME or NAME=TEXT)")]
    InvalidChildSpec(String),
}

/// IO operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Write error: {0}")]
    WriteError(String),
}

impl BuildError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            source: None,
            context: None,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<InputError> for BuildError {
    fn from(err: InputError) -> Self {
        Self::new(ErrorKind::Input(err))
    }
}

impl From<IOError> for BuildError {
    fn from(err: IOError) -> Self {
        Self::new(ErrorKind::IO(err))
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            ErrorKind::IO(err) => err.to_string(),
            ErrorKind::Input(err) => err.to_string(),
        };
        write!(f, "Error: {}", base_error)?;

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl StdError for BuildError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let source: &(dyn StdError + 'static) = self.source.as_deref()?;
        Some(source)
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
