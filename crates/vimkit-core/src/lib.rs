//! Vimkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Vimkit
//! Neovim configuration generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           vimkit-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GenerationService, DeinGenerator,      │
//! │  RenderService)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Catalog, Filesystem, Console)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     vimkit-adapters (Infrastructure)    │
//! │ (BuiltinCatalog, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TargetFile, SnippetId, Accumulator,    │
//! │  GenerationContext, UserChoices)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vimkit_core::{
//!     application::{ConfirmPolicy, GenerationService},
//!     domain::{OutputLayout, UserChoices},
//! };
//!
//! let service = GenerationService::new(
//!     catalog,    // impl TemplateCatalog
//!     filesystem, // impl Filesystem
//!     console,    // impl Console
//!     OutputLayout::new("~/.config/nvim", "~/.cache/vim"),
//!     ConfirmPolicy::AssumeYes,
//! );
//! let report = service.generate(&UserChoices::default())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfirmPolicy, DeinGenerator, GenerationReport, GenerationService, RenderService,
        ports::{Console, Filesystem, Notice, TemplateCatalog},
    };
    pub use crate::domain::{
        ExtensionAccumulator, ExtensionSet, GenerationContext, OptionTable, OutputLayout,
        RenderContext, SnippetId, TargetFile, TemplateSource, UserChoices,
    };
    pub use crate::error::{VimkitError, VimkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
