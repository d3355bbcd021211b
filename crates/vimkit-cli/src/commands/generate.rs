//! Implementation of the `vimkit generate` command.
//!
//! Responsibility: turn flags, the choices file and the app config into
//! `UserChoices` plus an `OutputLayout`, wire the adapters into a
//! `GenerationService`, and display the report. No generation logic lives
//! here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use vimkit_adapters::{LocalFilesystem, MemoryFilesystem};
use vimkit_core::{
    application::{ConfirmPolicy, Filesystem, GenerationReport, GenerationService},
    domain::{OutputLayout, UserChoices},
};

use crate::{
    cli::{ChoiceOverrides, GenerateArgs},
    config::AppConfig,
    console::TerminalConsole,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `vimkit generate` command.
///
/// Dispatch sequence:
/// 1. Load choices (file, defaults or minimal) and apply flag overrides
/// 2. Resolve the output layout (flags, then config, then XDG dirs)
/// 3. Load the catalog, with overlays when configured
/// 4. Refuse to clobber an existing `init.vim` unless `--force`/`--dry-run`
/// 5. Run the pass and print the report
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let choices = load_choices(&args)?;
    let layout = resolve_layout(&args, &config)?;
    let policy = confirm_policy(&args, &config);

    if policy == ConfirmPolicy::Prompt && !cfg!(feature = "interactive") {
        return Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        });
    }

    debug!(
        config_root = %layout.config_root().display(),
        cache_root = %layout.cache_root().display(),
        ?policy,
        "Generation configured"
    );

    let catalog = super::load_catalog(&config)?;
    let scratch = args.dry_run.then(MemoryFilesystem::new);
    let filesystem: Box<dyn Filesystem> = match &scratch {
        Some(memory) => Box::new(memory.clone()),
        None => Box::new(LocalFilesystem::new()),
    };
    let console = Box::new(TerminalConsole::new(output.clone()));

    let service = GenerationService::new(catalog, filesystem, console, layout.clone(), policy);

    if !args.force && !args.dry_run {
        service.ensure_fresh()?;
    }

    if !output.is_json() {
        output.header(&format!(
            "Generating into {}...",
            layout.config_root().display()
        ))?;
    }

    let report = service.generate(&choices)?;
    info!(files = report.file_count(), "Generate completed");

    let files = match &scratch {
        Some(memory) => memory.list_files(),
        None => written_files(&report, &layout),
    };
    show_report(&report, &layout, files, args.dry_run, &output)
}

// ── Choices ───────────────────────────────────────────────────────────────────

fn load_choices(args: &GenerateArgs) -> CliResult<UserChoices> {
    let mut choices = match &args.choices {
        Some(path) => read_choices(path)?,
        None if args.minimal => UserChoices::minimal(),
        None => UserChoices::default(),
    };
    apply_overrides(&mut choices, &args.overrides);
    Ok(choices)
}

fn read_choices(path: &Path) -> CliResult<UserChoices> {
    if !path.is_file() {
        return Err(CliError::ChoicesNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
    toml::from_str(&text).map_err(|source| CliError::InvalidChoices {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_overrides(choices: &mut UserChoices, overrides: &ChoiceOverrides) {
    fn replace_list(target: &mut Vec<String>, given: &[String]) {
        if !given.is_empty() {
            *target = given.to_vec();
        }
    }
    fn replace_value(target: &mut String, given: &Option<String>) {
        if let Some(value) = given {
            target.clone_from(value);
        }
    }

    replace_list(&mut choices.colorschemes, &overrides.colorschemes);
    replace_value(&mut choices.leader_key, &overrides.leader_key);
    replace_value(&mut choices.local_leader_key, &overrides.local_leader_key);
    replace_value(&mut choices.explorer, &overrides.explorer);
    replace_value(&mut choices.indent_plugin, &overrides.indent_plugin);
    replace_list(&mut choices.languages, &overrides.languages);
    replace_list(&mut choices.data_files, &overrides.data_files);
    replace_list(&mut choices.enhance_plugins, &overrides.enhance_plugins);
    replace_list(&mut choices.version_control, &overrides.version_control);
}

// ── Layout and policy ─────────────────────────────────────────────────────────

fn resolve_layout(args: &GenerateArgs, config: &AppConfig) -> CliResult<OutputLayout> {
    let config_root = args
        .config_root
        .clone()
        .or_else(|| config.config_root())
        .ok_or(CliError::NoOutputRoot { which: "config" })?;
    let cache_root = args
        .cache_root
        .clone()
        .or_else(|| config.cache_root())
        .ok_or(CliError::NoOutputRoot { which: "cache" })?;
    Ok(OutputLayout::new(config_root, cache_root))
}

/// Dry runs never prompt: they show everything that could be written.
fn confirm_policy(args: &GenerateArgs, config: &AppConfig) -> ConfirmPolicy {
    if args.yes || args.dry_run || config.generation.assume_yes {
        ConfirmPolicy::AssumeYes
    } else {
        ConfirmPolicy::Prompt
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    dry_run: bool,
    config_root: &'a Path,
    cache_root: &'a Path,
    files: Vec<PathBuf>,
    extensions: &'a [String],
}

/// Targets in first-write order, resolved against the layout.
fn written_files(report: &GenerationReport, layout: &OutputLayout) -> Vec<PathBuf> {
    report
        .targets
        .iter()
        .map(|target| layout.resolve(*target))
        .collect()
}

/// `files` is what ended up on disk, or in the scratch filesystem for a dry
/// run.
fn show_report(
    report: &GenerationReport,
    layout: &OutputLayout,
    files: Vec<PathBuf>,
    dry_run: bool,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        output.json(&ReportView {
            dry_run,
            config_root: layout.config_root(),
            cache_root: layout.cache_root(),
            files,
            extensions: &report.extensions,
        })?;
        return Ok(());
    }

    if dry_run {
        output.info("Dry run: nothing was written. Files that would be generated:")?;
        for file in &files {
            output.print(&format!("  {}", file.display()))?;
        }
        return Ok(());
    }

    output.success(&format!(
        "Generated {} files into {}",
        report.file_count(),
        layout.config_root().display()
    ))?;
    if !report.extensions.is_empty() {
        output.print(&format!(
            "  coc.nvim extensions: {}",
            report.extensions.join(", ")
        ))?;
    }
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!(
        "  cd {} && make install",
        layout.config_root().display()
    ))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    use crate::cli::{Cli, Commands};

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["vimkit", "generate"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Generate(args) => args,
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn overrides_replace_only_given_options() {
        let args = parse(&["--language", "Go", "--explorer", "defx.nvim"]);
        let choices = load_choices(&args).unwrap();

        assert_eq!(choices.languages, vec!["Go"]);
        assert_eq!(choices.explorer, "defx.nvim");
        assert_eq!(choices.colorschemes, UserChoices::default().colorschemes);
    }

    #[test]
    fn minimal_starts_empty() {
        let choices = load_choices(&parse(&["--minimal"])).unwrap();
        assert!(choices.languages.is_empty());
        assert!(!choices.dashboard);
    }

    #[test]
    fn choices_file_is_read_and_overridden() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("c.toml");
        std::fs::write(&path, "languages = [\"Ruby\"]\ndashboard = false\n").unwrap();

        let choices = load_choices(&parse(&[
            "--choices",
            path.to_str().unwrap(),
            "--leader",
            "Comma(,)",
        ]))
        .unwrap();

        assert_eq!(choices.languages, vec!["Ruby"]);
        assert!(!choices.dashboard);
        assert_eq!(choices.leader_key, "Comma(,)");
        assert!(choices.bufferline);
    }

    #[test]
    fn missing_choices_file_is_not_found() {
        let err = load_choices(&parse(&["--choices", "/no/such/choices.toml"])).unwrap_err();
        assert!(matches!(err, CliError::ChoicesNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn unknown_choice_key_is_a_user_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("c.toml");
        std::fs::write(&path, "languagez = [\"Rust\"]\n").unwrap();

        let err = load_choices(&parse(&["--choices", path.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, CliError::InvalidChoices { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn flags_win_over_config_roots() {
        let mut config = AppConfig::default();
        config.paths.config_root = Some(PathBuf::from("/cfg/from/config"));
        config.paths.cache_root = Some(PathBuf::from("/cache/from/config"));

        let layout = resolve_layout(&parse(&["--config-root", "/flag/nvim"]), &config).unwrap();

        assert_eq!(layout.config_root(), Path::new("/flag/nvim"));
        assert_eq!(layout.cache_root(), Path::new("/cache/from/config"));
    }

    #[test]
    fn policy_follows_yes_dry_run_and_config() {
        let config = AppConfig::default();
        assert_eq!(confirm_policy(&parse(&[]), &config), ConfirmPolicy::Prompt);
        assert_eq!(confirm_policy(&parse(&["-y"]), &config), ConfirmPolicy::AssumeYes);
        assert_eq!(
            confirm_policy(&parse(&["--dry-run"]), &config),
            ConfirmPolicy::AssumeYes
        );

        let mut yes = AppConfig::default();
        yes.generation.assume_yes = true;
        assert_eq!(confirm_policy(&parse(&[]), &yes), ConfirmPolicy::AssumeYes);
    }
}
