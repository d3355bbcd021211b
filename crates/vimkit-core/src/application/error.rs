//! Application layer errors.
//!
//! These errors represent failures in orchestration, not generation rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The operator prompt could not be shown or read.
    #[error("Confirmation prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// A catalog overlay could not be loaded.
    #[error("Failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Adapter lock poisoned: {name}")]
    LockPoisoned { name: &'static str },

    /// An earlier configuration already exists at the target location.
    #[error("Configuration already exists at {path}")]
    ConfigExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure are left in place".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Standard input is not interactive".into(),
                "Re-run with --yes to accept every confirmation".into(),
            ],
            Self::CatalogLoad { path, .. } => vec![
                format!("Check the overlay directory: {}", path.display()),
                "Set paths.catalog_dir to a readable directory".into(),
            ],
            Self::ConfigExists { path } => vec![
                format!("Found existing configuration: {}", path.display()),
                "Use --force to regenerate over it".into(),
                "Or point paths.config_root somewhere else".into(),
            ],
            Self::LockPoisoned { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned { .. } => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Validation,
            Self::CatalogLoad { .. } => ErrorCategory::Configuration,
            Self::ConfigExists { .. } => ErrorCategory::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_config_suggests_force() {
        let err = ApplicationError::ConfigExists {
            path: PathBuf::from("nvim/init.vim"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn catalog_load_is_configuration() {
        let err = ApplicationError::CatalogLoad {
            path: PathBuf::from("overlays"),
            reason: "not a directory".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
