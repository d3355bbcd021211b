//! Snippet catalogs.
//!
//! [`BuiltinCatalog`] serves the text compiled into the binary.
//! [`OverlayCatalog`] layers entries loaded by [`CatalogOverlayLoader`] on
//! top of it; an overlay entry always wins over the built-in one.

mod loader;
pub mod snippets;
pub mod tables;

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use vimkit_core::{
    application::ports::TemplateCatalog,
    domain::{DomainError, ExtensionSet, OptionTable, SnippetId, TemplateSource},
    error::VimkitResult,
};

pub use loader::{CatalogOverlay, CatalogOverlayLoader};

/// Catalog of the snippets shipped with vimkit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn snippet(&self, id: SnippetId) -> VimkitResult<TemplateSource> {
        Ok(TemplateSource::Static(snippets::fixed(id)))
    }

    fn lookup(&self, table: OptionTable, key: &str) -> Option<TemplateSource> {
        tables::table(table)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| TemplateSource::Static(*text))
    }

    fn extensions(&self, language: &str) -> Option<ExtensionSet> {
        match language {
            "Javascript" | "Typescript" => {
                Some(ExtensionSet::many(tables::JS_TS_EXTENSIONS.iter().copied()))
            }
            "React" => Some(ExtensionSet::many(tables::REACT_EXTENSIONS.iter().copied())),
            _ => tables::SINGLE_EXTENSIONS
                .iter()
                .find(|(k, _)| *k == language)
                .map(|(_, name)| ExtensionSet::single(*name)),
        }
    }

    fn keys(&self, table: OptionTable) -> Vec<String> {
        let mut keys: Vec<String> = tables::table(table)
            .iter()
            .map(|(k, _)| k.to_string())
            .collect();
        keys.sort();
        keys
    }
}

/// Built-in catalog with user overlays on top.
#[derive(Debug, Clone, Default)]
pub struct OverlayCatalog {
    base: BuiltinCatalog,
    snippets: HashMap<SnippetId, String>,
    tables: HashMap<OptionTable, IndexMap<String, String>>,
    extensions: IndexMap<String, ExtensionSet>,
}

impl OverlayCatalog {
    pub fn new(overlay: CatalogOverlay) -> Self {
        Self {
            base: BuiltinCatalog,
            snippets: overlay.snippets,
            tables: overlay.tables,
            extensions: overlay.extensions,
        }
    }

    /// Number of overridden or added entries.
    pub fn overlay_len(&self) -> usize {
        self.snippets.len()
            + self.tables.values().map(IndexMap::len).sum::<usize>()
            + self.extensions.len()
    }
}

impl TemplateCatalog for OverlayCatalog {
    fn snippet(&self, id: SnippetId) -> VimkitResult<TemplateSource> {
        match self.snippets.get(&id) {
            Some(text) => Ok(TemplateSource::Owned(text.clone())),
            None => self.base.snippet(id),
        }
    }

    fn lookup(&self, table: OptionTable, key: &str) -> Option<TemplateSource> {
        self.tables
            .get(&table)
            .and_then(|entries| entries.get(key))
            .map(|text| TemplateSource::Owned(text.clone()))
            .or_else(|| self.base.lookup(table, key))
    }

    fn extensions(&self, language: &str) -> Option<ExtensionSet> {
        self.extensions
            .get(language)
            .cloned()
            .or_else(|| self.base.extensions(language))
    }

    fn keys(&self, table: OptionTable) -> Vec<String> {
        let mut keys: BTreeSet<String> = self.base.keys(table).into_iter().collect();
        if let Some(entries) = self.tables.get(&table) {
            keys.extend(entries.keys().cloned());
        }
        keys.into_iter().collect()
    }
}

/// Ensure every fixed snippet id resolves. Used by `vimkit list snippets`.
pub fn verify(catalog: &dyn TemplateCatalog) -> Result<usize, DomainError> {
    let mut count = 0;
    for id in SnippetId::all() {
        catalog.snippet(id).map_err(|_| DomainError::MissingSnippet {
            id: id.to_string(),
        })?;
        count += 1;
    }
    Ok(count)
}
