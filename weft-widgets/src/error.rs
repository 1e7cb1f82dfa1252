//! Error types for the widget layer.
//!
//! Interaction never fails: out-of-range navigation wraps or clamps and
//! refused selections are no-ops. These errors only surface from the
//! explicit lookup APIs (theme lookups, directory listing).

use thiserror::Error;

/// Errors from theme lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("no theme registered for component `{0}`")]
    UnknownComponent(String),

    #[error("component `{component}` has no style named `{style}`")]
    UnknownStyle { component: String, style: String },

    #[error("config value at `{path}` is not {expected}")]
    ConfigType {
        path: String,
        expected: &'static str,
    },
}

/// Errors returned by a [`DirectoryProvider`](crate::file_browser::DirectoryProvider).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("directory not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("listing failed for {path}: {reason}")]
    Other { path: String, reason: String },
}
