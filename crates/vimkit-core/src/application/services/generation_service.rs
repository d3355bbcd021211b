//! Generation Service - one end-to-end pass.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate the output layout
//! 2. Create a fresh per-run context
//! 3. Run every generator method in a fixed order (collectors first)
//! 4. Report what was touched

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Console, Filesystem, TemplateCatalog},
        services::{
            dein_generator::DeinGenerator,
            render_service::{ConfirmPolicy, RenderService},
        },
    },
    domain::{DomainValidator as validator, GenerationContext, OutputLayout, TargetFile, UserChoices},
    error::VimkitResult,
};

/// Outcome of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Targets written, in first-write order.
    pub targets: Vec<TargetFile>,
    /// The coc.nvim extension list as rendered.
    pub extensions: Vec<String>,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.targets.len()
    }
}

pub struct GenerationService {
    generator: DeinGenerator,
}

impl GenerationService {
    pub fn new(
        catalog: Box<dyn TemplateCatalog>,
        filesystem: Box<dyn Filesystem>,
        console: Box<dyn Console>,
        layout: OutputLayout,
        policy: ConfirmPolicy,
    ) -> Self {
        let renderer = RenderService::new(filesystem, console, layout, policy);
        Self {
            generator: DeinGenerator::new(renderer, catalog),
        }
    }

    pub fn generator(&self) -> &DeinGenerator {
        &self.generator
    }

    pub fn catalog(&self) -> &dyn TemplateCatalog {
        self.generator.catalog()
    }

    /// Refuse to run over an existing `init.vim`.
    pub fn ensure_fresh(&self) -> VimkitResult<()> {
        let renderer = self.generator.renderer();
        let init = renderer.layout().resolve(TargetFile::InitVim);
        if renderer.filesystem().exists(&init) {
            return Err(ApplicationError::ConfigExists { path: init }.into());
        }
        Ok(())
    }

    /// Run one full pass.
    #[instrument(
        skip_all,
        fields(
            config_root = %self.generator.renderer().layout().config_root().display(),
            languages = choices.languages.len()
        )
    )]
    pub fn generate(&self, choices: &UserChoices) -> VimkitResult<GenerationReport> {
        validator::validate_layout(self.generator.renderer().layout())?;

        let g = &self.generator;
        let mut ctx = GenerationContext::new();
        let ctx = &mut ctx;

        g.generate_init(ctx)?;
        g.generate_core(ctx, &choices.leader_key, &choices.local_leader_key)?;
        g.generate_plugin_manager(ctx)?;
        g.generate_general(ctx)?;
        g.generate_autoload_func(ctx)?;
        g.generate_theme(ctx)?;
        g.generate_cache_theme(ctx, &choices.colorschemes)?;
        g.generate_colorscheme(ctx, &choices.colorschemes)?;
        g.generate_devicons(ctx)?;
        g.generate_dashboard(ctx, choices.dashboard)?;
        g.generate_bufferline(ctx, choices.bufferline)?;
        g.generate_statusline(ctx, choices.statusline)?;
        g.generate_explorer(ctx, &choices.explorer)?;
        g.generate_database(ctx, choices.database)?;
        g.generate_fuzzyfind(ctx, choices.fuzzyfind)?;
        g.generate_editorconfig(ctx, choices.editorconfig)?;
        g.generate_indent_line(ctx, &choices.indent_plugin)?;
        g.generate_comment(ctx, choices.comment)?;
        g.generate_outline(ctx, choices.outline)?;
        g.generate_tags(ctx, choices.tags)?;
        g.generate_quickrun(ctx, choices.quickrun)?;
        g.generate_data_type_files(ctx, &choices.data_files)?;
        g.generate_enhance_plugins(ctx, &choices.enhance_plugins)?;
        g.generate_sandwich(ctx, choices.sandwich)?;
        g.generate_text_objects(ctx)?;
        g.generate_version_control(ctx, &choices.version_control)?;
        g.generate_plugin_folder(ctx)?;
        g.generate_language_plugins(ctx, &choices.languages)?;
        g.generate_completion(ctx)?;
        g.generate_coc_settings(ctx)?;
        g.generate_vim_map(ctx)?;
        g.generate_install_scripts(ctx)?;

        let report = GenerationReport {
            targets: ctx.touched().collect(),
            extensions: ctx.accumulator().names().map(str::to_string).collect(),
        };
        info!(
            files = report.file_count(),
            extensions = report.extensions.len(),
            "Generation completed"
        );
        Ok(report)
    }
}
