// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid choices: {0}")]
    InvalidChoices(String),

    #[error("Invalid output layout: {0}")]
    InvalidLayout(String),

    #[error("Unknown snippet id '{0}'")]
    UnknownSnippet(String),

    #[error("Unknown option table '{0}'")]
    UnknownTable(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Catalog has no snippet '{id}'")]
    MissingSnippet { id: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Extension list already rendered; cannot add '{extension}'")]
    AccumulatorSealed { extension: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidChoices(msg) => vec![
                "Check your choices file".into(),
                format!("Details: {}", msg),
                "Regenerate a default one with: vimkit init --force".into(),
            ],
            Self::InvalidLayout(msg) => vec![
                format!("Details: {}", msg),
                "Set paths.config_root and paths.cache_root in your config".into(),
            ],
            Self::MissingSnippet { id } => vec![
                format!("The template catalog has no entry for '{}'", id),
                "Check the [snippets] section of your catalog overlays".into(),
            ],
            Self::UnknownSnippet(id) => vec![
                format!("'{}' is not a known snippet id", id),
                "Try: vimkit list snippets".into(),
            ],
            Self::UnknownTable(name) => vec![
                format!("'{}' is not a known option table", name),
                "Try: vimkit list".into(),
            ],
            _ => vec!["This appears to be a bug in Vimkit, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidChoices(_)
            | Self::InvalidLayout(_)
            | Self::UnknownSnippet(_)
            | Self::UnknownTable(_) => ErrorCategory::Validation,
            Self::MissingSnippet { .. } => ErrorCategory::NotFound,
            Self::AccumulatorSealed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
