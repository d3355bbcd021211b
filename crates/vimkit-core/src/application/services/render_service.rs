//! Render Service - the write primitives every generator method uses.
//!
//! Four ways to put snippet text on disk:
//! 1. `write`: unconditional, first write per target truncates, later ones append
//! 2. `gated`: a boolean decides, no prompt
//! 3. `confirmed`: a boolean decides, then the operator is asked once per group
//! 4. `each_known`: one write per key the catalog table knows
//!
//! Write failures propagate immediately. Nothing is retried and files
//! written earlier in the pass are left as they are.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Console, Filesystem, Notice, TemplateCatalog},
    domain::{
        GenerationContext, OptionTable, OutputLayout, RenderContext, TargetFile, TemplateSource,
    },
    error::VimkitResult,
};

/// How confirmed writes are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmPolicy {
    /// Ask the console.
    #[default]
    Prompt,
    /// Treat every confirmation as accepted.
    AssumeYes,
}

/// One pending write: target, logical name, content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Write {
    pub target: TargetFile,
    pub name: String,
    pub content: TemplateSource,
}

impl Write {
    pub fn new(target: TargetFile, name: impl Into<String>, content: TemplateSource) -> Self {
        Self {
            target,
            name: name.into(),
            content,
        }
    }
}

pub struct RenderService {
    filesystem: Box<dyn Filesystem>,
    console: Box<dyn Console>,
    layout: OutputLayout,
    policy: ConfirmPolicy,
}

impl RenderService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        console: Box<dyn Console>,
        layout: OutputLayout,
        policy: ConfirmPolicy,
    ) -> Self {
        Self {
            filesystem,
            console,
            layout,
            policy,
        }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    pub fn notify(&self, notice: Notice) {
        self.console.notify(notice);
    }

    /// Unconditional render.
    pub fn write(
        &self,
        ctx: &mut GenerationContext,
        target: TargetFile,
        name: &str,
        content: &str,
    ) -> VimkitResult<()> {
        let path = self.layout.resolve(target);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        if ctx.was_touched(target) {
            debug!(target = %target, name, "appending");
            self.filesystem.append_file(&path, content)?;
        } else {
            debug!(target = %target, name, "truncating on first write");
            self.filesystem.write_file(&path, content)?;
            ctx.touch(target);
        }

        self.console.notify(Notice::Written {
            target,
            name: name.to_string(),
        });
        Ok(())
    }

    /// Substitute `{{KEY}}` slots, then [`write`](Self::write).
    pub fn write_parameterized(
        &self,
        ctx: &mut GenerationContext,
        target: TargetFile,
        name: &str,
        template: &TemplateSource,
        vars: &RenderContext,
    ) -> VimkitResult<()> {
        let content = vars.render(template.as_str());
        self.write(ctx, target, name, &content)
    }

    /// Whole-file write that ignores first-touch bookkeeping.
    pub fn overwrite(
        &self,
        ctx: &mut GenerationContext,
        target: TargetFile,
        name: &str,
        content: &str,
        executable: bool,
    ) -> VimkitResult<()> {
        let path = self.layout.resolve(target);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        self.filesystem.write_file(&path, content)?;
        ctx.touch(target);
        if executable {
            self.filesystem.set_permissions(&path, true)?;
        }

        self.console.notify(Notice::Written {
            target,
            name: name.to_string(),
        });
        Ok(())
    }

    /// Gated render. Returns whether anything was written.
    #[instrument(skip(self, ctx, writes), fields(count = writes.len()))]
    pub fn gated(
        &self,
        ctx: &mut GenerationContext,
        flag: bool,
        name: &str,
        writes: &[Write],
    ) -> VimkitResult<bool> {
        if !flag {
            self.skip(name);
            return Ok(false);
        }
        self.write_all(ctx, writes)?;
        Ok(true)
    }

    /// Interactive-confirmed render. One question covers the whole group.
    #[instrument(skip(self, ctx, writes), fields(count = writes.len()))]
    pub fn confirmed(
        &self,
        ctx: &mut GenerationContext,
        flag: bool,
        name: &str,
        writes: &[Write],
    ) -> VimkitResult<bool> {
        if !flag {
            self.skip(name);
            return Ok(false);
        }

        let accepted = match self.policy {
            ConfirmPolicy::AssumeYes => true,
            ConfirmPolicy::Prompt => self.console.confirm(&format!("Generate {name}?"))?,
        };

        if !accepted {
            info!(name, "declined by operator");
            self.console.notify(Notice::Declined {
                name: name.to_string(),
            });
            return Ok(false);
        }

        self.write_all(ctx, writes)?;
        Ok(true)
    }

    /// Map-driven render. Unknown keys are ignored; each write is named by
    /// its key.
    pub fn each_known(
        &self,
        ctx: &mut GenerationContext,
        catalog: &dyn TemplateCatalog,
        target: TargetFile,
        keys: &[String],
        table: OptionTable,
    ) -> VimkitResult<usize> {
        let mut written = 0;
        for key in keys {
            match catalog.lookup(table, key) {
                Some(snippet) => {
                    self.write(ctx, target, key, snippet.as_str())?;
                    written += 1;
                }
                None => debug!(table = %table, key = %key, "unknown option value, skipping"),
            }
        }
        Ok(written)
    }

    fn write_all(&self, ctx: &mut GenerationContext, writes: &[Write]) -> VimkitResult<()> {
        for w in writes {
            self.write(ctx, w.target, &w.name, w.content.as_str())?;
        }
        Ok(())
    }

    fn skip(&self, name: &str) {
        debug!(name, "gate is off");
        self.console.notify(Notice::Skipped {
            name: name.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ports::output::MockConsole,
        services::test_support::{RecordingFilesystem, StubCatalog},
    };
    use mockall::predicate::*;

    fn service(fs: &RecordingFilesystem, console: MockConsole, policy: ConfirmPolicy) -> RenderService {
        RenderService::new(
            Box::new(fs.clone()),
            Box::new(console),
            OutputLayout::new("cfg", "cache"),
            policy,
        )
    }

    fn quiet_console() -> MockConsole {
        let mut console = MockConsole::new();
        console.expect_notify().return_const(());
        console
    }

    fn group() -> Vec<Write> {
        vec![
            Write::new(TargetFile::Program, "vista", "[[plugins]]\n".into()),
            Write::new(TargetFile::PluginMap, "vista keymap", "nnoremap V\n".into()),
        ]
    }

    #[test]
    fn first_write_truncates_and_later_writes_append() {
        let fs = RecordingFilesystem::default();
        fs.seed("cfg/core/pmap.vim", "stale\n");
        let svc = service(&fs, quiet_console(), ConfirmPolicy::Prompt);
        let mut ctx = GenerationContext::new();

        svc.write(&mut ctx, TargetFile::PluginMap, "a", "one\n").unwrap();
        svc.write(&mut ctx, TargetFile::PluginMap, "b", "two\n").unwrap();

        assert_eq!(fs.content("cfg/core/pmap.vim").unwrap(), "one\ntwo\n");
        assert!(fs.has_dir("cfg/core"));
    }

    #[test]
    fn failed_first_write_leaves_target_untouched() {
        let fs = RecordingFilesystem::default();
        fs.fail_on("cfg/core/pmap.vim");
        let svc = service(&fs, quiet_console(), ConfirmPolicy::Prompt);
        let mut ctx = GenerationContext::new();

        assert!(svc.write(&mut ctx, TargetFile::PluginMap, "a", "one\n").is_err());
        assert!(
            svc.overwrite(&mut ctx, TargetFile::PluginMap, "b", "two\n", false)
                .is_err()
        );

        assert!(!ctx.was_touched(TargetFile::PluginMap));
        assert_eq!(ctx.touched().count(), 0);
    }

    #[test]
    fn write_parameterized_substitutes_slots() {
        let fs = RecordingFilesystem::default();
        let svc = service(&fs, quiet_console(), ConfirmPolicy::Prompt);
        let mut ctx = GenerationContext::new();

        let vars = RenderContext::new().with_variable("REPO", "rakr/vim-one");
        svc.write_parameterized(
            &mut ctx,
            TargetFile::Appearance,
            "colorscheme",
            &"repo = '{{REPO}}'\n".into(),
            &vars,
        )
        .unwrap();

        assert_eq!(
            fs.content("cfg/modules/appearance.toml").unwrap(),
            "repo = 'rakr/vim-one'\n"
        );
    }

    #[test]
    fn gated_false_skips_without_writing() {
        let fs = RecordingFilesystem::default();
        let mut console = MockConsole::new();
        console
            .expect_notify()
            .with(eq(Notice::Skipped {
                name: "database".into(),
            }))
            .times(1)
            .return_const(());
        console.expect_confirm().never();
        let svc = service(&fs, console, ConfirmPolicy::Prompt);
        let mut ctx = GenerationContext::new();

        assert!(!svc.gated(&mut ctx, false, "database", &group()).unwrap());
        assert!(fs.files().is_empty());
    }

    #[test]
    fn gated_true_writes_without_prompt() {
        let fs = RecordingFilesystem::default();
        let mut console = quiet_console();
        console.expect_confirm().never();
        let svc = service(&fs, console, ConfirmPolicy::Prompt);
        let mut ctx = GenerationContext::new();

        assert!(svc.gated(&mut ctx, true, "comment", &group()).unwrap());
        assert_eq!(fs.files().len(), 2);
    }

    #[test]
    fn confirmed_asks_once_per_group() {
        let fs = RecordingFilesystem::default();
        let mut console = quiet_console();
        console
            .expect_confirm()
            .withf(|question| question == "Generate Vista.vim?")
            .times(1)
            .returning(|_| Ok(true));
        let svc = service(&fs, console, ConfirmPolicy::Prompt);
        let mut ctx = GenerationContext::new();

        assert!(svc.confirmed(&mut ctx, true, "Vista.vim", &group()).unwrap());
        assert_eq!(fs.files().len(), 2);
    }

    #[test]
    fn declined_confirmation_writes_nothing() {
        let fs = RecordingFilesystem::default();
        let mut console = MockConsole::new();
        console.expect_confirm().times(1).returning(|_| Ok(false));
        console
            .expect_notify()
            .with(eq(Notice::Declined {
                name: "Vista.vim".into(),
            }))
            .times(1)
            .return_const(());
        let svc = service(&fs, console, ConfirmPolicy::Prompt);
        let mut ctx = GenerationContext::new();

        assert!(!svc.confirmed(&mut ctx, true, "Vista.vim", &group()).unwrap());
        assert!(fs.files().is_empty());
    }

    #[test]
    fn assume_yes_never_prompts() {
        let fs = RecordingFilesystem::default();
        let mut console = quiet_console();
        console.expect_confirm().never();
        let svc = service(&fs, console, ConfirmPolicy::AssumeYes);
        let mut ctx = GenerationContext::new();

        assert!(svc.confirmed(&mut ctx, true, "Vista.vim", &group()).unwrap());
    }

    #[test]
    fn each_known_skips_unknown_keys() {
        let fs = RecordingFilesystem::default();
        let svc = service(&fs, quiet_console(), ConfirmPolicy::Prompt);
        let catalog = StubCatalog::default();
        let mut ctx = GenerationContext::new();

        let keys = vec!["Toml".to_string(), "Cobol".to_string(), "Json".to_string()];
        let written = svc
            .each_known(&mut ctx, &catalog, TargetFile::Filetype, &keys, OptionTable::DataFiles)
            .unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            fs.content("cfg/modules/filetype.toml").unwrap(),
            "data-files:Toml\ndata-files:Json\n"
        );
    }

    #[test]
    fn overwrite_sets_executable_bit() {
        let fs = RecordingFilesystem::default();
        let svc = service(&fs, quiet_console(), ConfirmPolicy::Prompt);
        let mut ctx = GenerationContext::new();

        svc.overwrite(&mut ctx, TargetFile::InstallScript, "install.sh", "#!/bin/sh\n", true)
            .unwrap();

        assert!(fs.is_executable("cfg/install.sh"));
        assert!(ctx.was_touched(TargetFile::InstallScript));
    }

    #[test]
    fn write_failure_propagates() {
        let fs = RecordingFilesystem::default();
        fs.fail_on("cfg/core/vmap.vim");
        let svc = service(&fs, quiet_console(), ConfirmPolicy::Prompt);
        let mut ctx = GenerationContext::new();

        assert!(
            svc.write(&mut ctx, TargetFile::VimMap, "vim map", "x\n")
                .is_err()
        );
    }
}
