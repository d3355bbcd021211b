//! Catalog snippets and the tiny substitution layer on top of them.
//!
//! ## Design Decisions
//!
//! ### 1. Why a closed `SnippetId` enum?
//!
//! The set of fixed snippets is enumerable and every one of them is written
//! by exactly one generator method. An enum makes a missing catalog entry a
//! lookup error with a stable name (`dein-coc`), and lets catalog overlays
//! address snippets by that name.
//!
//! ### 2. Why `TemplateSource` with `Static` vs `Owned`?
//!
//! Built-in snippets are compile-time strings and are never copied.
//! Overlay snippets are loaded from TOML at runtime and own their text.
//!
//! ### 3. Substitution, not templating
//!
//! `{{NAME}}` slots are replaced verbatim. There are no conditionals or
//! loops; list-shaped values are joined by the generator before they reach
//! [`RenderContext`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::target_file::PluginScript, error::DomainError};

/// Identifier of a fixed catalog snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SnippetId {
    InitVim,
    /// Parameterized: `{{LEADER}}`, `{{LOCAL_LEADER}}`.
    Core,
    Dein,
    General,
    Event,
    AutoloadSourceFile,
    AutoloadMkdir,
    AutoloadLoadEnv,
    AutoloadCoc,
    Theme,
    /// Parameterized: `{{REPO}}`, rendered once per selected colorscheme.
    Colorscheme,
    Devicons,
    Dashboard,
    BufferLine,
    BufferLineKeymap,
    Statusline,
    CocExplorerKeymap,
    Defx,
    DefxKeymap,
    DefxFindKeymap,
    NerdTree,
    NerdTreeKeymap,
    Database,
    DatabaseKeymap,
    Clap,
    ClapKeymap,
    CocClapKeymap,
    EditorConfig,
    IndentLine,
    IndentGuides,
    ContextFiletype,
    Caw,
    CawKeymap,
    Vista,
    VistaKeymap,
    Gutentags,
    QuickRun,
    QuickRunKeymap,
    DeinSelf,
    Sandwich,
    SandwichKeymap,
    TextObj,
    NiceBlockKeymap,
    ExpandRegionKeymap,
    DsfKeymap,
    SplitJoinKeymap,
    OperatorReplaceKeymap,
    MultiBlockKeymap,
    TextObjFunctionKeymap,
    Committia,
    Emmet,
    /// Parameterized: `{{EXTENSIONS}}`.
    Coc,
    CocKeymap,
    CocSettings,
    VimKeymap,
    Makefile,
    InstallScript,
    Plugin(PluginScript),
}

impl SnippetId {
    /// Every snippet id, in declaration order.
    pub fn all() -> Vec<SnippetId> {
        let mut ids = vec![
            Self::InitVim,
            Self::Core,
            Self::Dein,
            Self::General,
            Self::Event,
            Self::AutoloadSourceFile,
            Self::AutoloadMkdir,
            Self::AutoloadLoadEnv,
            Self::AutoloadCoc,
            Self::Theme,
            Self::Colorscheme,
            Self::Devicons,
            Self::Dashboard,
            Self::BufferLine,
            Self::BufferLineKeymap,
            Self::Statusline,
            Self::CocExplorerKeymap,
            Self::Defx,
            Self::DefxKeymap,
            Self::DefxFindKeymap,
            Self::NerdTree,
            Self::NerdTreeKeymap,
            Self::Database,
            Self::DatabaseKeymap,
            Self::Clap,
            Self::ClapKeymap,
            Self::CocClapKeymap,
            Self::EditorConfig,
            Self::IndentLine,
            Self::IndentGuides,
            Self::ContextFiletype,
            Self::Caw,
            Self::CawKeymap,
            Self::Vista,
            Self::VistaKeymap,
            Self::Gutentags,
            Self::QuickRun,
            Self::QuickRunKeymap,
            Self::DeinSelf,
            Self::Sandwich,
            Self::SandwichKeymap,
            Self::TextObj,
            Self::NiceBlockKeymap,
            Self::ExpandRegionKeymap,
            Self::DsfKeymap,
            Self::SplitJoinKeymap,
            Self::OperatorReplaceKeymap,
            Self::MultiBlockKeymap,
            Self::TextObjFunctionKeymap,
            Self::Committia,
            Self::Emmet,
            Self::Coc,
            Self::CocKeymap,
            Self::CocSettings,
            Self::VimKeymap,
            Self::Makefile,
            Self::InstallScript,
        ];
        ids.extend(PluginScript::ALL.map(Self::Plugin));
        ids
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InitVim => "init-vim",
            Self::Core => "core",
            Self::Dein => "dein",
            Self::General => "general",
            Self::Event => "event",
            Self::AutoloadSourceFile => "autoload-source-file",
            Self::AutoloadMkdir => "autoload-mkdir",
            Self::AutoloadLoadEnv => "autoload-load-env",
            Self::AutoloadCoc => "autoload-coc",
            Self::Theme => "theme",
            Self::Colorscheme => "colorscheme",
            Self::Devicons => "devicons",
            Self::Dashboard => "dashboard",
            Self::BufferLine => "bufferline",
            Self::BufferLineKeymap => "bufferline-keymap",
            Self::Statusline => "statusline",
            Self::CocExplorerKeymap => "coc-explorer-keymap",
            Self::Defx => "defx",
            Self::DefxKeymap => "defx-keymap",
            Self::DefxFindKeymap => "defx-find-keymap",
            Self::NerdTree => "nerdtree",
            Self::NerdTreeKeymap => "nerdtree-keymap",
            Self::Database => "database",
            Self::DatabaseKeymap => "database-keymap",
            Self::Clap => "clap",
            Self::ClapKeymap => "clap-keymap",
            Self::CocClapKeymap => "coc-clap-keymap",
            Self::EditorConfig => "editorconfig",
            Self::IndentLine => "indent-line",
            Self::IndentGuides => "indent-guides",
            Self::ContextFiletype => "context-filetype",
            Self::Caw => "caw",
            Self::CawKeymap => "caw-keymap",
            Self::Vista => "vista",
            Self::VistaKeymap => "vista-keymap",
            Self::Gutentags => "gutentags",
            Self::QuickRun => "quickrun",
            Self::QuickRunKeymap => "quickrun-keymap",
            Self::DeinSelf => "dein-self",
            Self::Sandwich => "sandwich",
            Self::SandwichKeymap => "sandwich-keymap",
            Self::TextObj => "textobj",
            Self::NiceBlockKeymap => "niceblock-keymap",
            Self::ExpandRegionKeymap => "expand-region-keymap",
            Self::DsfKeymap => "dsf-keymap",
            Self::SplitJoinKeymap => "splitjoin-keymap",
            Self::OperatorReplaceKeymap => "operator-replace-keymap",
            Self::MultiBlockKeymap => "multiblock-keymap",
            Self::TextObjFunctionKeymap => "textobj-function-keymap",
            Self::Committia => "committia",
            Self::Emmet => "emmet",
            Self::Coc => "coc",
            Self::CocKeymap => "coc-keymap",
            Self::CocSettings => "coc-settings",
            Self::VimKeymap => "vim-keymap",
            Self::Makefile => "makefile",
            Self::InstallScript => "install-script",
            Self::Plugin(PluginScript::Bufkill) => "plugin-bufkill",
            Self::Plugin(PluginScript::Difftools) => "plugin-difftools",
            Self::Plugin(PluginScript::Hlsearch) => "plugin-hlsearch",
            Self::Plugin(PluginScript::Nicefold) => "plugin-nicefold",
            Self::Plugin(PluginScript::Whitespace) => "plugin-whitespace",
        }
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnippetId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownSnippet(s.to_string()))
    }
}

/// Source of snippet text: either compile-time or runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compile-time string literal.
    Static(&'static str),

    /// Runtime-owned string (overlay files).
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    /// Get string slice regardless of storage type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }

    /// Check if content contains placeholder syntax (quick heuristic).
    pub fn contains_placeholder(&self) -> bool {
        self.as_str().contains("{{") && self.as_str().contains("}}")
    }
}

/// Variables for `{{NAME}}` substitution.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - repeated placeholders are all replaced
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

/// coc.nvim extensions contributed by one language.
///
/// Resolved at lookup time; never inspected by type at use sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionSet {
    Single(String),
    Many(Vec<String>),
}

impl ExtensionSet {
    pub fn single(name: impl Into<String>) -> Self {
        Self::Single(name.into())
    }

    pub fn many<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(names.into_iter().map(Into::into).collect())
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Single(name) => vec![name.as_str()],
            Self::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_ids_are_unique_and_parse_back() {
        let all = SnippetId::all();
        let mut names: Vec<_> = all.iter().map(SnippetId::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len());

        for id in all {
            assert_eq!(id.as_str().parse::<SnippetId>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_snippet_id_is_error() {
        assert!(matches!(
            "dein-nonexistent".parse::<SnippetId>(),
            Err(DomainError::UnknownSnippet(_))
        ));
    }

    #[test]
    fn render_context_substitutes_known_slots_only() {
        let ctx = RenderContext::new()
            .with_variable("LEADER", "\\<Space>")
            .with_variable("LOCAL_LEADER", ";");
        let out = ctx.render("let g:mapleader=\"{{LEADER}}\" {{LOCAL_LEADER}} {{OTHER}}");
        assert_eq!(out, "let g:mapleader=\"\\<Space>\" ; {{OTHER}}");
    }

    #[test]
    fn extension_set_deserializes_string_or_list() {
        #[derive(Deserialize)]
        struct Doc {
            single: ExtensionSet,
            many: ExtensionSet,
        }
        let doc: Doc =
            toml::from_str("single = \"coc-rls\"\nmany = [\"coc-tsserver\", \"coc-eslint\"]")
                .unwrap();
        assert_eq!(doc.single.names(), vec!["coc-rls"]);
        assert_eq!(doc.many.names(), vec!["coc-tsserver", "coc-eslint"]);
    }

    #[test]
    fn template_source_detects_placeholders() {
        assert!(TemplateSource::from("repo = '{{REPO}}'").contains_placeholder());
        assert!(!TemplateSource::from(String::from("plain")).contains_placeholder());
    }
}
