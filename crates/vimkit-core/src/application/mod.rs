//! Application layer for Vimkit.
//!
//! This layer contains:
//! - **Services**: one generation pass (`GenerationService`), the per-concern
//!   generator (`DeinGenerator`) and the write primitives (`RenderService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! Generation rules that do not touch a port live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ConfirmPolicy, DeinGenerator, GenerationReport, GenerationService, RenderService, Write,
};

pub use ports::{Console, Filesystem, Notice, TemplateCatalog};

pub use error::ApplicationError;
