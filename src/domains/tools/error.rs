//! Tool-specific error types.

use thiserror::Error;

use crate::domains::framework::InvalidFocusValue;

/// Errors that can occur during tool dispatch.
///
/// The only domain validation across the tool surface is the `focus`
/// selector; the other variants cover dispatch plumbing.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The focus selector was outside the four allowed values.
    #[error(transparent)]
    InvalidFocus(#[from] InvalidFocusValue),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
