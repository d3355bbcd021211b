//! DeinGenerator - one method per configuration concern.
//!
//! Each method picks snippets from the catalog and hands them to one of the
//! [`RenderService`] primitives. Methods take the per-run
//! [`GenerationContext`] explicitly; the generator itself holds no state
//! that outlives a pass.

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ports::{Notice, TemplateCatalog},
        services::render_service::{RenderService, Write},
    },
    domain::{
        DomainError, EMMET_LANGUAGES, Explorer, GenerationContext, IndentPlugin, OneShot,
        OptionTable, PluginScript, RenderContext, SnippetId, TargetFile, TemplateSource,
    },
    error::VimkitResult,
};

/// Leader label used when the chosen one is not in the table.
///
/// An unknown label never renders as an empty `g:mapleader`; that would
/// leave Vim with its builtin backslash leader while the keymaps assume
/// the configured one.
const FALLBACK_LEADER: &str = "Space";

pub struct DeinGenerator {
    renderer: RenderService,
    catalog: Box<dyn TemplateCatalog>,
}

impl DeinGenerator {
    pub fn new(renderer: RenderService, catalog: Box<dyn TemplateCatalog>) -> Self {
        Self { renderer, catalog }
    }

    pub fn renderer(&self) -> &RenderService {
        &self.renderer
    }

    pub fn catalog(&self) -> &dyn TemplateCatalog {
        self.catalog.as_ref()
    }

    // -------------------------------------------------------------------------
    // Core files
    // -------------------------------------------------------------------------

    pub fn generate_init(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        let writes = [self.entry(TargetFile::InitVim, "init.vim", SnippetId::InitVim)?];
        self.renderer.confirmed(ctx, true, "init.vim", &writes)?;
        Ok(())
    }

    /// `core/core.vim` with the two leader keys substituted.
    #[instrument(skip(self, ctx))]
    pub fn generate_core(
        &self,
        ctx: &mut GenerationContext,
        leader: &str,
        local_leader: &str,
    ) -> VimkitResult<()> {
        let vars = RenderContext::new()
            .with_variable("LEADER", self.leader_notation(leader)?.as_str())
            .with_variable("LOCAL_LEADER", self.leader_notation(local_leader)?.as_str());
        let template = self.catalog.snippet(SnippetId::Core)?;
        self.renderer
            .write_parameterized(ctx, TargetFile::CoreVim, "core/core.vim", &template, &vars)
    }

    pub fn generate_plugin_manager(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        let writes = [self.entry(TargetFile::DeinVim, "dein.vim", SnippetId::Dein)?];
        self.renderer.confirmed(ctx, true, "dein.vim", &writes)?;
        Ok(())
    }

    pub fn generate_general(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        let general = [self.entry(TargetFile::GeneralVim, "core/general.vim", SnippetId::General)?];
        self.renderer
            .confirmed(ctx, true, "core/general.vim", &general)?;
        let event = [self.entry(TargetFile::EventVim, "core/event.vim", SnippetId::Event)?];
        self.renderer.confirmed(ctx, true, "core/event.vim", &event)?;
        Ok(())
    }

    pub fn generate_autoload_func(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        let writes = [
            self.entry(
                TargetFile::AutoloadInitself,
                "autoload/initself.vim",
                SnippetId::AutoloadSourceFile,
            )?,
            self.entry(
                TargetFile::AutoloadInitself,
                "autoload/initself.vim",
                SnippetId::AutoloadMkdir,
            )?,
        ];
        self.renderer
            .confirmed(ctx, true, "autoload/initself.vim", &writes)?;
        Ok(())
    }

    /// `autoload/theme.vim` reads and writes the cached theme name.
    pub fn generate_theme(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        let writes = [self.entry(TargetFile::AutoloadTheme, "autoload/theme.vim", SnippetId::Theme)?];
        self.renderer
            .confirmed(ctx, true, "autoload/theme.vim", &writes)?;
        Ok(())
    }

    /// Persist the first selected colorscheme's name to the cache root.
    pub fn generate_cache_theme(
        &self,
        ctx: &mut GenerationContext,
        colors: &[String],
    ) -> VimkitResult<()> {
        let Some(first) = colors.first() else {
            debug!("no colorscheme selected, theme cache left alone");
            return Ok(());
        };
        let Some(name) = self.catalog.lookup(OptionTable::Colorschemes, first) else {
            debug!(repo = %first, "unknown colorscheme, theme cache left alone");
            return Ok(());
        };
        self.renderer
            .overwrite(ctx, TargetFile::ThemeCache, "theme.txt", name.as_str(), false)
    }

    // -------------------------------------------------------------------------
    // Appearance
    // -------------------------------------------------------------------------

    pub fn generate_colorscheme(
        &self,
        ctx: &mut GenerationContext,
        colors: &[String],
    ) -> VimkitResult<()> {
        let template = self.catalog.snippet(SnippetId::Colorscheme)?;
        for repo in colors.iter().filter(|repo| !repo.trim().is_empty()) {
            if !fits_literal_string(repo) {
                warn!(repo = %repo, "colorscheme repo cannot be quoted in TOML, skipping");
                continue;
            }
            let vars = RenderContext::new().with_variable("REPO", repo.as_str());
            self.renderer
                .write_parameterized(ctx, TargetFile::Appearance, repo, &template, &vars)?;
        }
        Ok(())
    }

    pub fn generate_devicons(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        self.put(ctx, TargetFile::Appearance, "vim-devicons", SnippetId::Devicons)
    }

    pub fn generate_dashboard(&self, ctx: &mut GenerationContext, enabled: bool) -> VimkitResult<()> {
        let writes = [self.entry(TargetFile::Appearance, "dashboard-nvim", SnippetId::Dashboard)?];
        self.renderer
            .confirmed(ctx, enabled, "dashboard-nvim", &writes)?;
        Ok(())
    }

    pub fn generate_bufferline(&self, ctx: &mut GenerationContext, enabled: bool) -> VimkitResult<()> {
        let writes = [
            self.entry(TargetFile::Appearance, "vim-buffet", SnippetId::BufferLine)?,
            self.entry(TargetFile::PluginMap, "vim-buffet keymap", SnippetId::BufferLineKeymap)?,
        ];
        self.renderer.confirmed(ctx, enabled, "vim-buffet", &writes)?;
        Ok(())
    }

    pub fn generate_statusline(&self, ctx: &mut GenerationContext, enabled: bool) -> VimkitResult<()> {
        let writes = [self.entry(TargetFile::Appearance, "statusline", SnippetId::Statusline)?];
        self.renderer.confirmed(ctx, enabled, "statusline", &writes)?;
        Ok(())
    }

    /// Exactly one explorer is configured. Unrecognised choices get NERDTree.
    #[instrument(skip(self, ctx))]
    pub fn generate_explorer(&self, ctx: &mut GenerationContext, choice: &str) -> VimkitResult<()> {
        match Explorer::from_choice(choice) {
            Explorer::CocExplorer => {
                ctx.accumulator_mut().add("coc-explorer")?;
                self.put(
                    ctx,
                    TargetFile::PluginMap,
                    "coc-explorer keymap",
                    SnippetId::CocExplorerKeymap,
                )
            }
            Explorer::Defx => {
                self.put(ctx, TargetFile::Appearance, "defx.nvim", SnippetId::Defx)?;
                self.put(ctx, TargetFile::PluginMap, "defx keymap", SnippetId::DefxKeymap)?;
                self.put(ctx, TargetFile::PluginMap, "defx keymap", SnippetId::DefxFindKeymap)
            }
            Explorer::NerdTree => {
                self.put(ctx, TargetFile::Appearance, "nerdtree", SnippetId::NerdTree)?;
                self.put(
                    ctx,
                    TargetFile::PluginMap,
                    "nerdtree keymap",
                    SnippetId::NerdTreeKeymap,
                )
            }
        }
    }

    // -------------------------------------------------------------------------
    // Program and tooling modules
    // -------------------------------------------------------------------------

    pub fn generate_database(&self, ctx: &mut GenerationContext, enabled: bool) -> VimkitResult<()> {
        let writes = [
            self.entry(
                TargetFile::AutoloadInitself,
                "LoadEnv function",
                SnippetId::AutoloadLoadEnv,
            )?,
            self.entry(TargetFile::Database, "vim-dadbod", SnippetId::Database)?,
            self.entry(TargetFile::PluginMap, "database keymap", SnippetId::DatabaseKeymap)?,
        ];
        self.renderer.gated(ctx, enabled, "database", &writes)?;
        Ok(())
    }

    pub fn generate_fuzzyfind(&self, ctx: &mut GenerationContext, enabled: bool) -> VimkitResult<()> {
        let writes = [
            self.entry(TargetFile::Fuzzyfind, "vim-clap", SnippetId::Clap)?,
            self.entry(TargetFile::PluginMap, "vim-clap keymap", SnippetId::ClapKeymap)?,
            self.entry(TargetFile::PluginMap, "coc-clap keymap", SnippetId::CocClapKeymap)?,
        ];
        self.renderer.confirmed(ctx, enabled, "vim-clap", &writes)?;
        Ok(())
    }

    pub fn generate_editorconfig(
        &self,
        ctx: &mut GenerationContext,
        enabled: bool,
    ) -> VimkitResult<()> {
        let writes = [self.entry(TargetFile::Program, "editorconfig", SnippetId::EditorConfig)?];
        self.renderer.confirmed(ctx, enabled, "editorconfig", &writes)?;
        Ok(())
    }

    /// The logical name is the raw choice, whichever block is written.
    pub fn generate_indent_line(&self, ctx: &mut GenerationContext, choice: &str) -> VimkitResult<()> {
        let id = match IndentPlugin::from_choice(choice) {
            IndentPlugin::IndentLine => SnippetId::IndentLine,
            IndentPlugin::IndentGuides => SnippetId::IndentGuides,
        };
        self.put(ctx, TargetFile::Program, choice, id)
    }

    pub fn generate_comment(&self, ctx: &mut GenerationContext, enabled: bool) -> VimkitResult<()> {
        let writes = [
            self.entry(
                TargetFile::Filetype,
                "context_filetype.vim",
                SnippetId::ContextFiletype,
            )?,
            self.entry(TargetFile::Program, "caw.vim", SnippetId::Caw)?,
            self.entry(TargetFile::PluginMap, "caw.vim keymap", SnippetId::CawKeymap)?,
        ];
        self.renderer.gated(ctx, enabled, "caw.vim", &writes)?;
        Ok(())
    }

    pub fn generate_outline(&self, ctx: &mut GenerationContext, enabled: bool) -> VimkitResult<()> {
        let writes = [
            self.entry(TargetFile::Program, "vista.vim", SnippetId::Vista)?,
            self.entry(TargetFile::PluginMap, "vista.vim keymap", SnippetId::VistaKeymap)?,
        ];
        self.renderer.confirmed(ctx, enabled, "vista.vim", &writes)?;
        Ok(())
    }

    pub fn generate_tags(&self, ctx: &mut GenerationContext, enabled: bool) -> VimkitResult<()> {
        let writes = [self.entry(TargetFile::Program, "vim-gutentags", SnippetId::Gutentags)?];
        self.renderer.confirmed(ctx, enabled, "vim-gutentags", &writes)?;
        Ok(())
    }

    pub fn generate_quickrun(&self, ctx: &mut GenerationContext, enabled: bool) -> VimkitResult<()> {
        let writes = [
            self.entry(TargetFile::Program, "vim-quickrun", SnippetId::QuickRun)?,
            self.entry(TargetFile::PluginMap, "quickrun keymap", SnippetId::QuickRunKeymap)?,
        ];
        self.renderer.confirmed(ctx, enabled, "vim-quickrun", &writes)?;
        Ok(())
    }

    pub fn generate_data_type_files(
        &self,
        ctx: &mut GenerationContext,
        keys: &[String],
    ) -> VimkitResult<usize> {
        self.renderer.each_known(
            ctx,
            self.catalog.as_ref(),
            TargetFile::Filetype,
            keys,
            OptionTable::DataFiles,
        )
    }

    /// Labels look like `vim-mundo (undo tree)`; the first word names the
    /// plugin and keys the keymap table.
    pub fn generate_enhance_plugins(
        &self,
        ctx: &mut GenerationContext,
        labels: &[String],
    ) -> VimkitResult<()> {
        self.put(ctx, TargetFile::Enhance, "dein.vim", SnippetId::DeinSelf)?;

        for label in labels {
            let name = label.split_whitespace().next().unwrap_or(label.as_str());
            if let Some(block) = self.catalog.lookup(OptionTable::EnhancePlugins, label) {
                self.renderer
                    .write(ctx, TargetFile::Enhance, name, block.as_str())?;
            }
            if let Some(keymap) = self.catalog.lookup(OptionTable::EnhanceKeymaps, name) {
                self.renderer.write(
                    ctx,
                    TargetFile::PluginMap,
                    &format!("{name} keymap"),
                    keymap.as_str(),
                )?;
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Text objects and version control
    // -------------------------------------------------------------------------

    pub fn generate_sandwich(&self, ctx: &mut GenerationContext, enabled: bool) -> VimkitResult<()> {
        let writes = [
            self.entry(TargetFile::TextObj, "vim-sandwich", SnippetId::Sandwich)?,
            self.entry(TargetFile::PluginMap, "vim-sandwich keymap", SnippetId::SandwichKeymap)?,
        ];
        self.renderer.confirmed(ctx, enabled, "vim-sandwich", &writes)?;
        Ok(())
    }

    pub fn generate_text_objects(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        let mut writes = vec![self.entry(TargetFile::TextObj, "textobj plugins", SnippetId::TextObj)?];
        for id in [
            SnippetId::NiceBlockKeymap,
            SnippetId::ExpandRegionKeymap,
            SnippetId::DsfKeymap,
            SnippetId::SplitJoinKeymap,
            SnippetId::OperatorReplaceKeymap,
            SnippetId::MultiBlockKeymap,
            SnippetId::TextObjFunctionKeymap,
        ] {
            writes.push(self.entry(TargetFile::PluginMap, "textobj keymap", id)?);
        }
        self.renderer
            .confirmed(ctx, true, "textobj plugins", &writes)?;
        Ok(())
    }

    pub fn generate_version_control(
        &self,
        ctx: &mut GenerationContext,
        repos: &[String],
    ) -> VimkitResult<()> {
        for repo in repos {
            if let Some(block) = self.catalog.lookup(OptionTable::VersionControl, repo) {
                self.renderer
                    .write(ctx, TargetFile::Version, repo, block.as_str())?;
            }
            if let Some(keymap) = self.catalog.lookup(OptionTable::VersionKeymaps, repo) {
                self.renderer.write(
                    ctx,
                    TargetFile::PluginMap,
                    &format!("{repo} keymap"),
                    keymap.as_str(),
                )?;
            }
        }
        self.put(ctx, TargetFile::Version, "committia.vim", SnippetId::Committia)
    }

    pub fn generate_plugin_folder(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        for script in PluginScript::ALL {
            let content = self.catalog.snippet(SnippetId::Plugin(script))?;
            self.renderer.overwrite(
                ctx,
                TargetFile::Plugin(script),
                script.file_name(),
                content.as_str(),
                false,
            )?;
        }
        self.renderer.notify(Notice::Completed {
            message: "Generate plugin folder success".into(),
        });
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Languages and completion
    // -------------------------------------------------------------------------

    /// Collector: writes language blocks and feeds the extension accumulator.
    ///
    /// Shared extension sets land once because the accumulator is a set.
    /// The emmet block has its own one-shot guard.
    #[instrument(skip(self, ctx), fields(count = keys.len()))]
    pub fn generate_language_plugins(
        &self,
        ctx: &mut GenerationContext,
        keys: &[String],
    ) -> VimkitResult<usize> {
        let mut written = 0;
        for key in keys {
            if let Some(block) = self.catalog.lookup(OptionTable::Languages, key) {
                self.renderer
                    .write(ctx, TargetFile::Languages, key, block.as_str())?;
                written += 1;

                if let Some(set) = self.catalog.extensions(key) {
                    let added = ctx.accumulator_mut().add_set(&set)?;
                    debug!(language = %key, added, "extensions contributed");
                }
            }

            if EMMET_LANGUAGES.contains(&key.as_str()) && ctx.claim(OneShot::Emmet) {
                self.put(ctx, TargetFile::Program, "emmet plugins", SnippetId::Emmet)?;
            }
        }
        Ok(written)
    }

    /// Renderer: serializes the accumulator into the coc.nvim block and
    /// seals it.
    pub fn generate_completion(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        self.put(
            ctx,
            TargetFile::AutoloadInitself,
            "autoload coc function",
            SnippetId::AutoloadCoc,
        )?;

        let extensions = ctx.accumulator_mut().render_and_seal();
        let template = self.catalog.snippet(SnippetId::Coc)?;
        let vars = RenderContext::new().with_variable("EXTENSIONS", extensions);
        self.renderer
            .write_parameterized(ctx, TargetFile::Completion, "coc.nvim", &template, &vars)?;

        self.put(ctx, TargetFile::PluginMap, "coc.nvim keymap", SnippetId::CocKeymap)
    }

    pub fn generate_coc_settings(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        self.put(
            ctx,
            TargetFile::CocSettings,
            "coc-settings.json",
            SnippetId::CocSettings,
        )
    }

    pub fn generate_vim_map(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        self.put(ctx, TargetFile::VimMap, "vim map", SnippetId::VimKeymap)
    }

    pub fn generate_install_scripts(&self, ctx: &mut GenerationContext) -> VimkitResult<()> {
        self.put(ctx, TargetFile::Makefile, "Makefile", SnippetId::Makefile)?;
        let script = self.catalog.snippet(SnippetId::InstallScript)?;
        self.renderer
            .overwrite(ctx, TargetFile::InstallScript, "install.sh", script.as_str(), true)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn entry(&self, target: TargetFile, name: &str, id: SnippetId) -> VimkitResult<Write> {
        Ok(Write::new(target, name, self.catalog.snippet(id)?))
    }

    fn put(
        &self,
        ctx: &mut GenerationContext,
        target: TargetFile,
        name: &str,
        id: SnippetId,
    ) -> VimkitResult<()> {
        let content = self.catalog.snippet(id)?;
        self.renderer.write(ctx, target, name, content.as_str())
    }

    fn leader_notation(&self, label: &str) -> VimkitResult<TemplateSource> {
        if let Some(found) = self.catalog.lookup(OptionTable::LeaderKeys, label) {
            return Ok(found);
        }
        debug!(label, "unknown leader key, using {FALLBACK_LEADER}");
        self.catalog
            .lookup(OptionTable::LeaderKeys, FALLBACK_LEADER)
            .ok_or_else(|| {
                DomainError::MissingSnippet {
                    id: format!("{}/{FALLBACK_LEADER}", OptionTable::LeaderKeys),
                }
                .into()
            })
    }
}

/// Whether `value` can sit between single quotes in a TOML literal string.
fn fits_literal_string(value: &str) -> bool {
    !value.chars().any(|c| c == '\'' || (c.is_control() && c != '\t'))
}
