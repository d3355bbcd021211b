//! Core domain layer for Vimkit.
//!
//! This module contains pure generation rules with no I/O. Filesystem,
//! catalog and prompt concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! - **No I/O**: no filesystem, network, or terminal access
//! - **Closed vocabularies**: target files and snippet ids are enums
//! - **Per-run state**: everything mutable lives in [`GenerationContext`]

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    ExtensionAccumulator, ExtensionSet, GenerationContext, OutputLayout, PluginScript,
    RenderContext, SnippetId, TargetFile, TemplateSource, UserChoices,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{EMMET_LANGUAGES, Explorer, IndentPlugin, OneShot, OptionTable, Root};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_plugin_script_has_snippet_and_target() {
        for script in PluginScript::ALL {
            let id = SnippetId::Plugin(script);
            let target = TargetFile::Plugin(script);
            assert!(id.as_str().ends_with(script.file_name().trim_end_matches(".vim")));
            assert!(target.as_str().ends_with(script.file_name()));
        }
    }

    #[test]
    fn emmet_languages_are_language_keys() {
        assert!(EMMET_LANGUAGES.contains(&"React"));
        assert!(!EMMET_LANGUAGES.contains(&"Javascript"));
    }

    #[test]
    fn context_and_accumulator_cooperate() {
        let mut ctx = GenerationContext::new();
        ctx.accumulator_mut()
            .add_set(&ExtensionSet::many(["coc-tsserver", "coc-eslint"]))
            .unwrap();
        ctx.accumulator_mut()
            .add_set(&ExtensionSet::many(["coc-tsserver", "coc-eslint"]))
            .unwrap();
        assert_eq!(ctx.accumulator().len(), 2);
    }

    #[test]
    fn domain_error_categories() {
        assert_eq!(
            DomainError::MissingSnippet { id: "coc".into() }.category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            DomainError::AccumulatorSealed {
                extension: "coc-go".into()
            }
            .category(),
            ErrorCategory::Internal
        );
    }
}
