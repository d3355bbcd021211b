//! Fixed output files and the layout that roots them.
//!
//! Every file the generator can touch is a [`TargetFile`] variant. Paths are
//! compile-time constants; nothing user-supplied ever reaches a path.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, value_objects::Root};

/// Scripts dropped verbatim into `plugin/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluginScript {
    Bufkill,
    Difftools,
    Hlsearch,
    Nicefold,
    Whitespace,
}

impl PluginScript {
    pub const ALL: [PluginScript; 5] = [
        Self::Bufkill,
        Self::Difftools,
        Self::Hlsearch,
        Self::Nicefold,
        Self::Whitespace,
    ];

    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Bufkill => "bufkill.vim",
            Self::Difftools => "difftools.vim",
            Self::Hlsearch => "hlsearch.vim",
            Self::Nicefold => "nicefold.vim",
            Self::Whitespace => "whitespace.vim",
        }
    }
}

/// A predetermined output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetFile {
    InitVim,
    CocSettings,
    Makefile,
    InstallScript,
    CoreVim,
    DeinVim,
    GeneralVim,
    EventVim,
    /// Plugin keymaps.
    PluginMap,
    /// Plain vim keymaps.
    VimMap,
    AutoloadInitself,
    AutoloadTheme,
    Appearance,
    Completion,
    Database,
    Enhance,
    Filetype,
    Fuzzyfind,
    Languages,
    Program,
    TextObj,
    Version,
    Plugin(PluginScript),
    /// Persisted colorscheme name, read back by `autoload/theme.vim`.
    ThemeCache,
}

impl TargetFile {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InitVim => "init.vim",
            Self::CocSettings => "coc-settings.json",
            Self::Makefile => "Makefile",
            Self::InstallScript => "install.sh",
            Self::CoreVim => "core/core.vim",
            Self::DeinVim => "core/dein.vim",
            Self::GeneralVim => "core/general.vim",
            Self::EventVim => "core/event.vim",
            Self::PluginMap => "core/pmap.vim",
            Self::VimMap => "core/vmap.vim",
            Self::AutoloadInitself => "autoload/initself.vim",
            Self::AutoloadTheme => "autoload/theme.vim",
            Self::Appearance => "modules/appearance.toml",
            Self::Completion => "modules/completion.toml",
            Self::Database => "modules/database.toml",
            Self::Enhance => "modules/enhance.toml",
            Self::Filetype => "modules/filetype.toml",
            Self::Fuzzyfind => "modules/fuzzyfind.toml",
            Self::Languages => "modules/languages.toml",
            Self::Program => "modules/program.toml",
            Self::TextObj => "modules/textobj.toml",
            Self::Version => "modules/version.toml",
            Self::Plugin(PluginScript::Bufkill) => "plugin/bufkill.vim",
            Self::Plugin(PluginScript::Difftools) => "plugin/difftools.vim",
            Self::Plugin(PluginScript::Hlsearch) => "plugin/hlsearch.vim",
            Self::Plugin(PluginScript::Nicefold) => "plugin/nicefold.vim",
            Self::Plugin(PluginScript::Whitespace) => "plugin/whitespace.vim",
            Self::ThemeCache => "theme.txt",
        }
    }

    pub const fn root(&self) -> Root {
        match self {
            Self::ThemeCache => Root::Cache,
            _ => Root::Config,
        }
    }
}

impl fmt::Display for TargetFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the two output roots live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    config_root: PathBuf,
    cache_root: PathBuf,
}

impl OutputLayout {
    pub fn new(config_root: impl Into<PathBuf>, cache_root: impl Into<PathBuf>) -> Self {
        Self {
            config_root: config_root.into(),
            cache_root: cache_root.into(),
        }
    }

    pub fn config_root(&self) -> &Path {
        &self.config_root
    }

    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Absolute (or caller-relative) location of a target file.
    pub fn resolve(&self, target: TargetFile) -> PathBuf {
        let root = match target.root() {
            Root::Config => &self.config_root,
            Root::Cache => &self.cache_root,
        };
        root.join(target.as_str())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.config_root.as_os_str().is_empty() {
            return Err(DomainError::InvalidLayout("config root is empty".into()));
        }
        if self.cache_root.as_os_str().is_empty() {
            return Err(DomainError::InvalidLayout("cache root is empty".into()));
        }
        Ok(())
    }
}
