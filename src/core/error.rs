//! Error types for browser-side operations.
//!
//! - [`LocaleStorageError`] - persisting the language choice to localStorage
//!
//! Content errors come from [`raccourcis_core::ContentError`].

use std::fmt;

/// localStorage errors for the persisted language choice.
#[derive(Debug, Clone)]
pub enum LocaleStorageError {
    /// localStorage not available (private mode, disabled storage).
    StorageUnavailable,
    /// Failed to save to localStorage.
    SaveFailed,
}

impl fmt::Display for LocaleStorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable => write!(f, "localStorage not available"),
            Self::SaveFailed => write!(f, "failed to save language to localStorage"),
        }
    }
}

impl std::error::Error for LocaleStorageError {}
