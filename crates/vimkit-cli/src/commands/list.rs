//! Implementation of the `vimkit list` command.

use indexmap::IndexMap;
use vimkit_adapters::catalog::verify as verify_catalog;
use vimkit_core::{
    application::TemplateCatalog,
    domain::{OptionTable, SnippetId},
    error::VimkitError,
};

use crate::{
    cli::{ListArgs, ListFormat, ListTable},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = super::load_catalog(&config)?;
    let sections = collect(catalog.as_ref(), args.table)?;

    if output.is_json() {
        output.json(&sections)?;
        return Ok(());
    }

    match args.format {
        ListFormat::Table => {
            for (name, keys) in &sections {
                output.header(&format!("{name}:"))?;
                for key in keys {
                    output.print(&format!("  {key}"))?;
                }
            }
        }
        ListFormat::Json => output.json(&sections)?,
        ListFormat::List => {
            for key in sections.values().flatten() {
                output.print(key)?;
            }
        }
        ListFormat::Csv => {
            output.print("table,value")?;
            for (name, keys) in &sections {
                for key in keys {
                    output.print(&format!("{name},{}", csv_field(key)))?;
                }
            }
        }
    }

    Ok(())
}

/// Section name → keys, in display order.
fn collect(
    catalog: &dyn TemplateCatalog,
    table: Option<ListTable>,
) -> CliResult<IndexMap<&'static str, Vec<String>>> {
    let mut sections = IndexMap::new();

    let tables: Vec<OptionTable> = match table {
        Some(ListTable::Snippets) => Vec::new(),
        Some(other) => other.option_table().into_iter().collect(),
        None => OptionTable::ALL
            .into_iter()
            .filter(OptionTable::is_user_facing)
            .collect(),
    };
    for t in tables {
        sections.insert(t.as_str(), catalog.keys(t));
    }

    if table == Some(ListTable::Snippets) {
        verify_catalog(catalog).map_err(VimkitError::from)?;
        let ids = SnippetId::all().into_iter().map(|id| id.to_string()).collect();
        sections.insert("snippets", ids);
    }

    Ok(sections)
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vimkit_adapters::BuiltinCatalog;

    #[test]
    fn all_user_facing_tables_are_listed() {
        let sections = collect(&BuiltinCatalog::new(), None).unwrap();

        assert!(sections.contains_key("languages"));
        assert!(sections.contains_key("colorschemes"));
        assert!(!sections.contains_key("enhance-keymaps"));
        assert!(!sections.contains_key("snippets"));
        assert!(sections["languages"].contains(&"Rust".to_string()));
    }

    #[test]
    fn snippets_section_lists_overlay_keys() {
        let sections = collect(&BuiltinCatalog::new(), Some(ListTable::Snippets)).unwrap();

        assert_eq!(sections.len(), 1);
        assert!(sections["snippets"].contains(&"vim-keymap".to_string()));
    }

    #[test]
    fn csv_quotes_commas() {
        assert_eq!(csv_field("Comma(,)"), "\"Comma(,)\"");
        assert_eq!(csv_field("Space"), "Space");
    }
}
