//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use vimkit_core::domain::OptionTable;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "vimkit",
    bin_name = "vimkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Neovim + dein.vim configuration generator",
    long_about = "Vimkit writes a complete, modular Neovim configuration built \
                  around the dein.vim plugin manager from a handful of choices.",
    after_help = "EXAMPLES:\n\
        \x20 vimkit init\n\
        \x20 vimkit generate --choices vimkit.toml\n\
        \x20 vimkit generate --yes --language Rust --language Go --explorer defx.nvim\n\
        \x20 vimkit list languages\n\
        \x20 vimkit completions bash > /usr/share/bash-completion/completions/vimkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a configuration.
    #[command(
        visible_alias = "g",
        about = "Generate a Neovim configuration",
        after_help = "EXAMPLES:\n\
            \x20 vimkit generate\n\
            \x20 vimkit generate --choices vimkit.toml --yes\n\
            \x20 vimkit generate --minimal --language Python --dry-run\n\
            \x20 vimkit generate --config-root ./nvim --cache-root ./cache --force"
    )]
    Generate(GenerateArgs),

    /// List catalog entries.
    #[command(
        visible_alias = "ls",
        about = "List available option values",
        after_help = "EXAMPLES:\n\
            \x20 vimkit list\n\
            \x20 vimkit list languages\n\
            \x20 vimkit list colorschemes --format json"
    )]
    List(ListArgs),

    /// Write a choices file.
    #[command(
        about = "Write a default choices file",
        after_help = "EXAMPLES:\n\
            \x20 vimkit init                  # ./vimkit.toml\n\
            \x20 vimkit init my-choices.toml  # custom path\n\
            \x20 vimkit init --minimal --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 vimkit completions bash > ~/.local/share/bash-completion/completions/vimkit\n\
            \x20 vimkit completions zsh  > ~/.zfunc/_vimkit\n\
            \x20 vimkit completions fish > ~/.config/fish/completions/vimkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Vimkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 vimkit config get paths.config_root\n\
            \x20 vimkit config list\n\
            \x20 vimkit config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `vimkit generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Choices file written by `vimkit init`.
    #[arg(
        short = 'f',
        long = "choices",
        value_name = "FILE",
        help = "Read choices from a TOML file"
    )]
    pub choices: Option<PathBuf>,

    /// Start from an empty selection instead of the defaults.
    #[arg(
        long = "minimal",
        conflicts_with = "choices",
        help = "Start from minimal choices (everything off)"
    )]
    pub minimal: bool,

    #[command(flatten)]
    pub overrides: ChoiceOverrides,

    /// Neovim configuration directory.
    #[arg(
        long = "config-root",
        value_name = "DIR",
        help = "Output directory (default: $XDG_CONFIG_HOME/nvim)"
    )]
    pub config_root: Option<PathBuf>,

    /// Cache directory holding the persisted colorscheme.
    #[arg(
        long = "cache-root",
        value_name = "DIR",
        help = "Cache directory (default: $XDG_CACHE_HOME/vim)"
    )]
    pub cache_root: Option<PathBuf>,

    /// Answer yes to every confirmation.
    #[arg(short = 'y', long = "yes", help = "Assume yes for every prompt")]
    pub yes: bool,

    /// Render into memory and list what would be written.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Regenerate over an existing `init.vim`.
    #[arg(long = "force", help = "Overwrite an existing configuration")]
    pub force: bool,
}

/// Per-option overrides applied on top of the loaded choices.
///
/// List options replace the loaded list when given at least once.
#[derive(Debug, Default, Args)]
pub struct ChoiceOverrides {
    #[arg(long = "colorscheme", value_name = "REPO", help = "Colorscheme repo (repeatable)")]
    pub colorschemes: Vec<String>,

    #[arg(long = "leader", value_name = "KEY", help = "Leader key label, e.g. Space")]
    pub leader_key: Option<String>,

    #[arg(long = "local-leader", value_name = "KEY", help = "Local leader key label")]
    pub local_leader_key: Option<String>,

    #[arg(long = "explorer", value_name = "NAME", help = "coc-explorer, defx.nvim or nerdtree")]
    pub explorer: Option<String>,

    #[arg(long = "indent", value_name = "REPO", help = "Indent guide plugin repo")]
    pub indent_plugin: Option<String>,

    #[arg(
        short = 'l',
        long = "language",
        value_name = "LANGUAGE",
        help = "Language key (repeatable)"
    )]
    pub languages: Vec<String>,

    #[arg(long = "data-file", value_name = "TYPE", help = "Data file type (repeatable)")]
    pub data_files: Vec<String>,

    #[arg(long = "enhance", value_name = "LABEL", help = "Enhance plugin label (repeatable)")]
    pub enhance_plugins: Vec<String>,

    #[arg(long = "vcs", value_name = "REPO", help = "Version control plugin repo (repeatable)")]
    pub version_control: Vec<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `vimkit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Table to list; all user-facing tables when omitted.
    #[arg(value_enum, value_name = "TABLE", help = "Table to list")]
    pub table: Option<ListTable>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Listable catalog sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTable {
    Colorschemes,
    LeaderKeys,
    Languages,
    DataFiles,
    EnhancePlugins,
    VersionControl,
    /// Fixed snippet ids (overlay keys).
    Snippets,
}

impl ListTable {
    /// The option table behind this section, `None` for snippets.
    pub fn option_table(self) -> Option<OptionTable> {
        match self {
            Self::Colorschemes => Some(OptionTable::Colorschemes),
            Self::LeaderKeys => Some(OptionTable::LeaderKeys),
            Self::Languages => Some(OptionTable::Languages),
            Self::DataFiles => Some(OptionTable::DataFiles),
            Self::EnhancePlugins => Some(OptionTable::EnhancePlugins),
            Self::VersionControl => Some(OptionTable::VersionControl),
            Self::Snippets => None,
        }
    }
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON object keyed by table.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `vimkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the choices file.
    #[arg(value_name = "PATH", default_value = "vimkit.toml")]
    pub path: PathBuf,

    /// Write minimal choices instead of the defaults.
    #[arg(long = "minimal", help = "Write minimal choices (everything off)")]
    pub minimal: bool,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing choices file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `vimkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `vimkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.config_root`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_with_overrides() {
        let cli = Cli::parse_from([
            "vimkit",
            "generate",
            "--yes",
            "-l",
            "Rust",
            "--language",
            "Go",
            "--explorer",
            "defx.nvim",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.yes);
        assert_eq!(args.overrides.languages, vec!["Rust", "Go"]);
        assert_eq!(args.overrides.explorer.as_deref(), Some("defx.nvim"));
        assert!(args.overrides.colorschemes.is_empty());
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["vimkit", "g", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Generate(ref a) if a.dry_run));
    }

    #[test]
    fn minimal_conflicts_with_choices() {
        let result =
            Cli::try_parse_from(["vimkit", "generate", "--minimal", "--choices", "x.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_table_is_kebab_case() {
        let cli = Cli::parse_from(["vimkit", "list", "data-files", "--format", "csv"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.table, Some(ListTable::DataFiles));
        assert_eq!(
            args.table.and_then(ListTable::option_table),
            Some(OptionTable::DataFiles)
        );
    }

    #[test]
    fn init_defaults_to_vimkit_toml() {
        let cli = Cli::parse_from(["vimkit", "init"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.path, PathBuf::from("vimkit.toml"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["vimkit", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_color_flag_takes_no_value() {
        let cli = Cli::try_parse_from(["vimkit", "--no-color", "list"]).unwrap();
        assert!(cli.global.no_color);
    }
}
