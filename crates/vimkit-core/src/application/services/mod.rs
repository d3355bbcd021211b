//! Application services - orchestrate use cases.
//!
//! `GenerationService` runs one pass over `DeinGenerator`, which expresses
//! every concern through the primitives of `RenderService`.

pub mod dein_generator;
pub mod generation_service;
pub mod render_service;

pub use dein_generator::DeinGenerator;
pub use generation_service::{GenerationReport, GenerationService};
pub use render_service::{ConfirmPolicy, RenderService, Write};

#[cfg(test)]
pub(crate) mod test_support {
    //! In-crate fakes for the driven ports.

    use std::collections::{BTreeMap, BTreeSet, HashSet};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use crate::{
        application::{
            ApplicationError,
            ports::{Filesystem, TemplateCatalog},
        },
        domain::{DomainError, ExtensionSet, OptionTable, SnippetId, TemplateSource},
        error::VimkitResult,
    };

    #[derive(Default)]
    struct State {
        files: BTreeMap<PathBuf, String>,
        dirs: BTreeSet<PathBuf>,
        executable: HashSet<PathBuf>,
        failing: HashSet<PathBuf>,
    }

    /// Filesystem fake whose clones share state.
    #[derive(Clone, Default)]
    pub struct RecordingFilesystem {
        state: Arc<Mutex<State>>,
    }

    impl RecordingFilesystem {
        pub fn seed(&self, path: &str, content: &str) {
            self.state
                .lock()
                .unwrap()
                .files
                .insert(PathBuf::from(path), content.to_string());
        }

        pub fn fail_on(&self, path: &str) {
            self.state
                .lock()
                .unwrap()
                .failing
                .insert(PathBuf::from(path));
        }

        pub fn content(&self, path: &str) -> Option<String> {
            self.state.lock().unwrap().files.get(Path::new(path)).cloned()
        }

        pub fn has_dir(&self, path: &str) -> bool {
            self.state.lock().unwrap().dirs.contains(Path::new(path))
        }

        pub fn is_executable(&self, path: &str) -> bool {
            self.state
                .lock()
                .unwrap()
                .executable
                .contains(Path::new(path))
        }

        pub fn files(&self) -> BTreeMap<PathBuf, String> {
            self.state.lock().unwrap().files.clone()
        }

        fn check(&self, state: &State, path: &Path) -> VimkitResult<()> {
            if state.failing.contains(path) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "injected failure".into(),
                }
                .into());
            }
            Ok(())
        }
    }

    impl Filesystem for RecordingFilesystem {
        fn create_dir_all(&self, path: &Path) -> VimkitResult<()> {
            self.state.lock().unwrap().dirs.insert(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> VimkitResult<()> {
            let mut state = self.state.lock().unwrap();
            self.check(&state, path)?;
            state.files.insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn append_file(&self, path: &Path, content: &str) -> VimkitResult<()> {
            let mut state = self.state.lock().unwrap();
            self.check(&state, path)?;
            state
                .files
                .entry(path.to_path_buf())
                .or_default()
                .push_str(content);
            Ok(())
        }

        fn set_permissions(&self, path: &Path, executable: bool) -> VimkitResult<()> {
            let mut state = self.state.lock().unwrap();
            if executable {
                state.executable.insert(path.to_path_buf());
            } else {
                state.executable.remove(path);
            }
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            let state = self.state.lock().unwrap();
            state.files.contains_key(path) || state.dirs.contains(path)
        }

        fn read_to_string(&self, path: &Path) -> VimkitResult<String> {
            self.content(&path.to_string_lossy()).ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        }
    }

    /// Catalog fake: every fixed snippet renders as its id, table entries as
    /// `table:key`.
    #[derive(Default)]
    pub struct StubCatalog {
        pub missing: Option<SnippetId>,
    }

    impl StubCatalog {
        fn table_keys(table: OptionTable) -> &'static [&'static str] {
            match table {
                OptionTable::Colorschemes => &["glepnir/oceanic-material", "rakr/vim-one"],
                OptionTable::LeaderKeys => &["Space", "Comma(,)", "Semicolon(;)"],
                OptionTable::Languages => &[
                    "Rust",
                    "Go",
                    "Javascript",
                    "Typescript",
                    "React",
                    "Vue",
                    "Html",
                ],
                OptionTable::DataFiles => &["Toml", "Json", "MarkDown"],
                OptionTable::EnhancePlugins => {
                    &["vim-mundo (undo tree)", "accelerated-jk (faster j/k movement)"]
                }
                OptionTable::EnhanceKeymaps => &["vim-mundo"],
                OptionTable::VersionControl => &["tpope/vim-fugitive", "lambdalisue/gina.vim"],
                OptionTable::VersionKeymaps => &["tpope/vim-fugitive"],
            }
        }
    }

    impl TemplateCatalog for StubCatalog {
        fn snippet(&self, id: SnippetId) -> VimkitResult<TemplateSource> {
            if self.missing == Some(id) {
                return Err(DomainError::MissingSnippet {
                    id: id.to_string(),
                }
                .into());
            }
            Ok(match id {
                SnippetId::Core => "leader={{LEADER}} local={{LOCAL_LEADER}}\n".into(),
                SnippetId::Colorscheme => "repo={{REPO}}\n".into(),
                SnippetId::Coc => "extensions=[{{EXTENSIONS}}]\n".into(),
                other => TemplateSource::Owned(format!("{other}\n")),
            })
        }

        fn lookup(&self, table: OptionTable, key: &str) -> Option<TemplateSource> {
            if !Self::table_keys(table).contains(&key) {
                return None;
            }
            Some(match (table, key) {
                (OptionTable::Colorschemes, "glepnir/oceanic-material") => "oceanic_material".into(),
                (OptionTable::Colorschemes, _) => "one".into(),
                (OptionTable::LeaderKeys, "Space") => "\\<Space>".into(),
                (OptionTable::LeaderKeys, "Comma(,)") => ",".into(),
                (OptionTable::LeaderKeys, _) => ";".into(),
                _ => TemplateSource::Owned(format!("{table}:{key}\n")),
            })
        }

        fn extensions(&self, language: &str) -> Option<ExtensionSet> {
            match language {
                "Rust" => Some(ExtensionSet::single("coc-rust-analyzer")),
                "Html" => Some(ExtensionSet::single("coc-html")),
                "Javascript" | "Typescript" => Some(ExtensionSet::many([
                    "coc-tsserver",
                    "coc-eslint",
                    "coc-prettier",
                ])),
                "React" => Some(ExtensionSet::many(["coc-tsserver", "coc-emmet"])),
                _ => None,
            }
        }

        fn keys(&self, table: OptionTable) -> Vec<String> {
            let mut keys: Vec<String> = Self::table_keys(table)
                .iter()
                .map(|k| k.to_string())
                .collect();
            keys.sort();
            keys
        }
    }
}
