//! Domain value objects: Explorer, IndentPlugin, OptionTable, OneShot, Root.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Option values arrive as free-form strings; the enums here only exist for
//! choices the generator branches on. Everything else stays a string and is
//! resolved by catalog lookup.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages whose selection pulls in the emmet plugin block.
pub const EMMET_LANGUAGES: [&str; 3] = ["React", "Vue", "Html"];

// ── Explorer ─────────────────────────────────────────────────────────────────

/// File explorer flavour.
///
/// Resolved by exact string match; anything unrecognised falls back to
/// NERDTree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Explorer {
    CocExplorer,
    Defx,
    NerdTree,
}

impl Explorer {
    pub fn from_choice(choice: &str) -> Self {
        match choice {
            "coc-explorer" => Self::CocExplorer,
            "defx.nvim" => Self::Defx,
            _ => Self::NerdTree,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CocExplorer => "coc-explorer",
            Self::Defx => "defx.nvim",
            Self::NerdTree => "nerdtree",
        }
    }
}

impl fmt::Display for Explorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── IndentPlugin ─────────────────────────────────────────────────────────────

/// Indent guide plugin. Exact match on the indentLine repo, otherwise
/// vim-indent-guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentPlugin {
    IndentLine,
    IndentGuides,
}

impl IndentPlugin {
    pub fn from_choice(choice: &str) -> Self {
        if choice == "Yggdroot/indentLine" {
            Self::IndentLine
        } else {
            Self::IndentGuides
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IndentLine => "Yggdroot/indentLine",
            Self::IndentGuides => "nathanaelkane/vim-indent-guides",
        }
    }
}

impl fmt::Display for IndentPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── OptionTable ──────────────────────────────────────────────────────────────

/// A catalog lookup table mapping an option value to snippet text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionTable {
    /// Colorscheme repo → colorscheme name written to the theme cache.
    Colorschemes,
    /// Leader key label → key notation.
    LeaderKeys,
    /// Language → languages.toml block.
    Languages,
    /// Data file type → filetype.toml block.
    DataFiles,
    /// Enhance plugin label → enhance.toml block.
    EnhancePlugins,
    /// Enhance plugin name → keymap.
    EnhanceKeymaps,
    /// Version control repo → version.toml block.
    VersionControl,
    /// Version control repo → keymap.
    VersionKeymaps,
}

impl OptionTable {
    pub const ALL: [OptionTable; 8] = [
        Self::Colorschemes,
        Self::LeaderKeys,
        Self::Languages,
        Self::DataFiles,
        Self::EnhancePlugins,
        Self::EnhanceKeymaps,
        Self::VersionControl,
        Self::VersionKeymaps,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Colorschemes => "colorschemes",
            Self::LeaderKeys => "leader-keys",
            Self::Languages => "languages",
            Self::DataFiles => "data-files",
            Self::EnhancePlugins => "enhance-plugins",
            Self::EnhanceKeymaps => "enhance-keymaps",
            Self::VersionControl => "version-control",
            Self::VersionKeymaps => "version-keymaps",
        }
    }

    /// Whether users pick keys from this table directly.
    ///
    /// Keymap tables are keyed by plugin names derived from other choices.
    pub const fn is_user_facing(&self) -> bool {
        !matches!(self, Self::EnhanceKeymaps | Self::VersionKeymaps)
    }
}

impl fmt::Display for OptionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionTable {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "colorschemes" | "colors" | "themes" => Ok(Self::Colorschemes),
            "leader-keys" | "leaders" => Ok(Self::LeaderKeys),
            "languages" | "langs" => Ok(Self::Languages),
            "data-files" | "datafiles" => Ok(Self::DataFiles),
            "enhance-plugins" | "enhance" => Ok(Self::EnhancePlugins),
            "enhance-keymaps" => Ok(Self::EnhanceKeymaps),
            "version-control" | "vcs" => Ok(Self::VersionControl),
            "version-keymaps" => Ok(Self::VersionKeymaps),
            other => Err(DomainError::UnknownTable(other.to_string())),
        }
    }
}

// ── OneShot ──────────────────────────────────────────────────────────────────

/// Writes that happen at most once per generation pass no matter how many
/// choices trigger them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OneShot {
    /// emmet-vim block, triggered by any of [`EMMET_LANGUAGES`].
    Emmet,
}

// ── Root ─────────────────────────────────────────────────────────────────────

/// Which output root a target file lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Root {
    /// The Neovim configuration directory.
    Config,
    /// The cache directory holding the persisted theme name.
    Cache,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explorer_matches_exact_strings_only() {
        assert_eq!(Explorer::from_choice("coc-explorer"), Explorer::CocExplorer);
        assert_eq!(Explorer::from_choice("defx.nvim"), Explorer::Defx);
        assert_eq!(Explorer::from_choice("Defx.nvim"), Explorer::NerdTree);
        assert_eq!(Explorer::from_choice(""), Explorer::NerdTree);
    }

    #[test]
    fn indent_plugin_defaults_to_guides() {
        assert_eq!(
            IndentPlugin::from_choice("Yggdroot/indentLine"),
            IndentPlugin::IndentLine
        );
        assert_eq!(
            IndentPlugin::from_choice("anything"),
            IndentPlugin::IndentGuides
        );
    }

    #[test]
    fn option_table_round_trips_through_str() {
        for table in OptionTable::ALL {
            assert_eq!(table.as_str().parse::<OptionTable>().unwrap(), table);
        }
    }

    #[test]
    fn option_table_accepts_aliases() {
        assert_eq!("vcs".parse::<OptionTable>().unwrap(), OptionTable::VersionControl);
        assert_eq!("data_files".parse::<OptionTable>().unwrap(), OptionTable::DataFiles);
        assert!("plugins".parse::<OptionTable>().is_err());
    }

    #[test]
    fn keymap_tables_are_internal() {
        assert!(!OptionTable::EnhanceKeymaps.is_user_facing());
        assert!(!OptionTable::VersionKeymaps.is_user_facing());
        assert!(OptionTable::Languages.is_user_facing());
    }
}
