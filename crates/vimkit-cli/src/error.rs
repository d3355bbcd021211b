//! CLI error type, exit codes and the stderr report.

use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use vimkit_core::application::ApplicationError;
use vimkit_core::error::{ErrorCategory, VimkitError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The file passed with `--choices` does not exist.
    #[error("Choices file not found: {}", path.display())]
    ChoicesNotFound { path: PathBuf },

    /// Not valid TOML, or keys that `UserChoices` does not have.
    #[error("Invalid choices file {}: {source}", path.display())]
    InvalidChoices {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Choices file already exists at {}", path.display())]
    ChoicesExist { path: PathBuf },

    /// Neither a flag, the config file nor the platform gave us a root.
    #[error("Cannot determine the {which} directory")]
    NoOutputRoot { which: &'static str },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    #[error("Generation failed: {0}")]
    Core(#[from] VimkitError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Prompting was requested from a build without the `interactive` feature.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<ApplicationError> for CliError {
    fn from(err: ApplicationError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ChoicesNotFound { path } => vec![
                format!("Create one with: vimkit init {}", path.display()),
                "Or drop --choices to use the defaults".into(),
            ],
            Self::InvalidChoices { .. } => vec![
                "Keys must match the names written by 'vimkit init'".into(),
                "List valid values with: vimkit list".into(),
            ],
            Self::ChoicesExist { .. } => vec![
                "Use --force to overwrite it".into(),
                "Or pass a different path: vimkit init other.toml".into(),
            ],
            Self::NoOutputRoot { which } => vec![
                format!("Pass --{which}-root explicitly"),
                format!("Or set paths.{which}_root in the config file"),
            ],
            Self::ConfigError { .. } => vec![
                "Check the file printed by: vimkit config path".into(),
                "Environment overrides use VIMKIT_<SECTION>__<KEY>".into(),
            ],
            Self::Core(core_err) => core_err.suggestions(),
            Self::IoError { .. } => vec!["Check file permissions and free disk space".into()],
            Self::FeatureNotAvailable { feature } => vec![
                "Pass --yes to skip confirmation prompts".into(),
                format!("Or install with: cargo install vimkit-cli --features {feature}"),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ChoicesNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidChoices { .. } | Self::ChoicesExist { .. } => ErrorCategory::Validation,
            Self::NoOutputRoot { .. }
            | Self::ConfigError { .. }
            | Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
            Self::Core(core) => core.category(),
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// 2 for bad input, 3 for missing resources, 4 for configuration and
    /// 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, styled: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if styled { style(text) } else { text.to_string() }
        };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "\n{} {self}",
            paint("Error:", |s| s.red().bold().to_string())
        );

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = writeln!(
                    out,
                    "  {} {err}",
                    paint("Caused by:", |s| s.dimmed().to_string())
                );
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Suggestions:", |s| s.yellow().bold().to_string())
            );
            for suggestion in &suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Use -v / --verbose for more details.", |s| s
                    .dimmed()
                    .to_string())
            );
        }
        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::NotFound => tracing::warn!(error = %self),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self)
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source);
        }
    }
}

/// Attach a message to an I/O failure at the call-site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
