//! `vimkit init`: write a choices file to edit before generating.

use std::path::Path;

use tracing::instrument;
use vimkit_core::domain::UserChoices;

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "\
# vimkit choices. Edit, then run: vimkit generate --choices <this file>
# Valid values for each list: vimkit list
";

/// Write the default (or minimal) choices as TOML.
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    if args.path.exists() && !args.force {
        return Err(CliError::ChoicesExist { path: args.path });
    }

    let choices = if args.minimal {
        UserChoices::minimal()
    } else {
        UserChoices::default()
    };

    write_choices(&args.path, &choices)?;

    output.success(&format!("Choices written to {}", args.path.display()))?;
    output.print(&format!(
        "  Next: vimkit generate --choices {}",
        args.path.display()
    ))?;
    Ok(())
}

fn write_choices(path: &Path, choices: &UserChoices) -> CliResult<()> {
    let body = toml::to_string_pretty(choices).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise choices: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }

    std::fs::write(path, format!("{HEADER}\n{body}"))
        .with_cli_context(|| format!("Failed to write choices to '{}'", path.display()))
}
