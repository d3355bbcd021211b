//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `vimkit-adapters` crate provides implementations.

use std::fmt;
use std::path::Path;

use crate::domain::{ExtensionSet, OptionTable, SnippetId, TargetFile, TemplateSource};
use crate::error::VimkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `vimkit_adapters::filesystem::LocalFilesystem` (production)
/// - `vimkit_adapters::filesystem::MemoryFilesystem` (dry runs and tests)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> VimkitResult<()>;

    /// Write content to a file, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> VimkitResult<()>;

    /// Append content to a file, creating it when missing.
    fn append_file(&self, path: &Path, content: &str) -> VimkitResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> VimkitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> VimkitResult<String>;
}

/// Port for the snippet catalog.
///
/// Implemented by:
/// - `vimkit_adapters::catalog::BuiltinCatalog` (compiled-in snippets)
/// - `vimkit_adapters::catalog::OverlayCatalog` (user overlays on top)
pub trait TemplateCatalog: Send + Sync {
    /// Fixed snippet by id. Missing ids are a `DomainError::MissingSnippet`.
    fn snippet(&self, id: SnippetId) -> VimkitResult<TemplateSource>;

    /// Table-driven snippet. `None` means the option value is unknown.
    fn lookup(&self, table: OptionTable, key: &str) -> Option<TemplateSource>;

    /// coc.nvim extensions contributed by a language key.
    fn extensions(&self, language: &str) -> Option<ExtensionSet>;

    /// Keys of a table, sorted.
    fn keys(&self, table: OptionTable) -> Vec<String>;
}

/// Progress event reported to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Written { target: TargetFile, name: String },
    Skipped { name: String },
    Declined { name: String },
    Completed { message: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written { target, name } => write!(f, "Generate {name} into {target}"),
            Self::Skipped { name } => write!(f, "Skip {name}"),
            Self::Declined { name } => write!(f, "Declined {name}"),
            Self::Completed { message } => f.write_str(message),
        }
    }
}

/// Port for operator interaction.
///
/// Implemented by:
/// - `vimkit_adapters::console::AutoConsole` (answers every prompt itself)
/// - `vimkit_adapters::console::ScriptedConsole` (records notices, canned answers)
/// - the CLI's terminal console (dialoguer prompts, colored lines)
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    /// Ask a yes/no question.
    fn confirm(&self, question: &str) -> VimkitResult<bool>;

    fn notify(&self, notice: Notice);
}
