//! Infrastructure adapters for Vimkit.
//!
//! This crate implements the ports defined in `vimkit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod console;
pub mod filesystem;

// Re-export commonly used adapters
pub use catalog::{BuiltinCatalog, CatalogOverlay, CatalogOverlayLoader, OverlayCatalog};
pub use console::{AutoConsole, ScriptedConsole};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
