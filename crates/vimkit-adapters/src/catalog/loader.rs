//! Filesystem-based catalog overlay loader.
//!
//! Discovers `*.toml` overlay files under a directory tree and merges them
//! into one [`CatalogOverlay`] that [`super::OverlayCatalog`] layers over the
//! built-in catalog.
//!
//! # Overlay format
//!
//! ```toml
//! # Replace a fixed snippet (keys are snippet ids, see `vimkit list snippets`)
//! [snippets]
//! vim-keymap = """
//! nnoremap <C-s> :<C-u>write<CR>
//! """
//!
//! # Add or replace option-table entries
//! [tables.languages]
//! Zig = """
//! [[plugins]]
//! repo = 'ziglang/zig.vim'
//! on_ft = 'zig'
//! """
//!
//! # coc.nvim extensions per language: a string or a list
//! [extensions]
//! Zig = "coc-zls"
//! ```
//!
//! Files are applied in path order, so a later file overrides an earlier
//! one. A file that fails to read or parse emits a `WARN` log and is skipped;
//! it does not prevent the other files from loading.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use vimkit_core::{
    application::ApplicationError,
    domain::{DomainError, ExtensionSet, OptionTable, SnippetId},
};

/// Deserialised representation of one overlay file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OverlayFile {
    #[serde(default)]
    snippets: IndexMap<String, String>,
    #[serde(default)]
    tables: IndexMap<String, IndexMap<String, String>>,
    #[serde(default)]
    extensions: IndexMap<String, ExtensionSet>,
}

/// Merged, typed overlay entries.
#[derive(Debug, Clone, Default)]
pub struct CatalogOverlay {
    pub snippets: HashMap<SnippetId, String>,
    pub tables: HashMap<OptionTable, IndexMap<String, String>>,
    pub extensions: IndexMap<String, ExtensionSet>,
    /// Files that contributed entries, in application order.
    pub sources: Vec<PathBuf>,
}

impl CatalogOverlay {
    fn merge(&mut self, path: &Path, file: TypedOverlay) {
        self.snippets.extend(file.snippets);
        for (table, entries) in file.tables {
            self.tables.entry(table).or_default().extend(entries);
        }
        self.extensions.extend(file.extensions);
        self.sources.push(path.to_path_buf());
    }
}

struct TypedOverlay {
    snippets: Vec<(SnippetId, String)>,
    tables: Vec<(OptionTable, IndexMap<String, String>)>,
    extensions: IndexMap<String, ExtensionSet>,
}

/// Loads overlay files from a directory tree.
pub struct CatalogOverlayLoader {
    catalog_dir: PathBuf,
}

impl CatalogOverlayLoader {
    /// Create a loader pointed at `catalog_dir`.
    pub fn new(catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
        }
    }

    /// Load and merge every valid overlay file.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::CatalogLoad`] if `catalog_dir` does not
    /// exist or is not a directory. Individual files are never fatal.
    #[instrument(skip(self), fields(dir = %self.catalog_dir.display()))]
    pub fn load_all(&self) -> Result<CatalogOverlay, ApplicationError> {
        if !self.catalog_dir.is_dir() {
            return Err(ApplicationError::CatalogLoad {
                path: self.catalog_dir.clone(),
                reason: "directory not found".into(),
            });
        }

        let mut overlay = CatalogOverlay::default();

        let walker = WalkDir::new(&self.catalog_dir)
            .min_depth(1)
            .sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable catalog entry");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "toml") {
                continue;
            }

            match load_file(path) {
                Ok(typed) => {
                    debug!(file = %path.display(), "loaded catalog overlay");
                    overlay.merge(path, typed);
                }
                Err(e) => {
                    warn!(
                        file  = %path.display(),
                        error = %e,
                        "skipping catalog overlay due to load error"
                    );
                }
            }
        }

        debug!(files = overlay.sources.len(), "finished loading overlays");
        Ok(overlay)
    }
}

fn load_file(path: &Path) -> Result<TypedOverlay, DomainError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| DomainError::InvalidChoices(format!("failed to read '{}': {e}", path.display())))?;

    let file: OverlayFile = toml::from_str(&raw)
        .map_err(|e| DomainError::InvalidChoices(format!("failed to parse '{}': {e}", path.display())))?;

    let snippets = file
        .snippets
        .into_iter()
        .map(|(id, text)| Ok((id.parse::<SnippetId>()?, text)))
        .collect::<Result<Vec<_>, DomainError>>()?;

    let tables = file
        .tables
        .into_iter()
        .map(|(name, entries)| Ok((name.parse::<OptionTable>()?, entries)))
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(TypedOverlay {
        snippets,
        tables,
        extensions: file.extensions,
    })
}
