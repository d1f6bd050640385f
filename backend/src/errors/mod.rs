//! Global application error types and handlers.
//!
//! This module defines the error type shared by the viewer bootstrap code and
//! the HTTP handlers that expose it, together with helper constructors for the
//! common failure shapes.

use thiserror::Error;

/// Errors raised while assembling or rendering the documentation viewer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// The page origin could not be parsed or carried more than scheme/host/port.
    #[error("Invalid origin '{input}': {reason}")]
    InvalidOrigin { input: String, reason: String },

    /// A document source list was assembled without any entries.
    #[error("Document source list must not be empty")]
    EmptySources,

    /// Two document sources share the same display name.
    #[error("Duplicate document source name: {name}")]
    DuplicateSourceName { name: String },

    /// A document source failed field validation.
    #[error("Invalid document source '{name}': {message}")]
    InvalidSource { name: String, message: String },

    /// The renderer could not produce its output.
    #[error("Render error: {message}")]
    Render { message: String },
}

pub type ViewerResult<T> = Result<T, ViewerError>;

impl ViewerError {
    pub fn invalid_origin(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOrigin {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn duplicate_source_name(name: impl Into<String>) -> Self {
        Self::DuplicateSourceName { name: name.into() }
    }

    pub fn invalid_source(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSource {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Machine-readable identifier used in API error bodies.
    pub fn error_type(&self) -> &'static str {
        match self {
            ViewerError::InvalidOrigin { .. } => "invalid_origin",
            ViewerError::EmptySources => "empty_sources",
            ViewerError::DuplicateSourceName { .. } => "duplicate_source_name",
            ViewerError::InvalidSource { .. } => "invalid_source",
            ViewerError::Render { .. } => "render_error",
        }
    }
}
