pub mod accumulator;
pub mod choices;
pub mod context;
pub mod snippet;
pub mod target_file;

pub use crate::domain::DomainError;
pub use accumulator::ExtensionAccumulator;
pub use choices::UserChoices;
pub use context::GenerationContext;
pub use snippet::{ExtensionSet, RenderContext, SnippetId, TemplateSource};
pub use target_file::{OutputLayout, PluginScript, TargetFile};
