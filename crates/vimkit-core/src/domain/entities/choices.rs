use serde::{Deserialize, Serialize};

/// Every option one generation pass consumes.
///
/// Values are free-form strings matched against catalog tables at render
/// time; anything the catalog does not know is skipped without error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserChoices {
    /// Colorscheme repos. The first one is persisted as the active theme.
    pub colorschemes: Vec<String>,
    /// Leader key label, e.g. `Space` or `Comma(,)`.
    pub leader_key: String,
    pub local_leader_key: String,
    pub dashboard: bool,
    pub bufferline: bool,
    pub statusline: bool,
    /// `coc-explorer`, `defx.nvim`, anything else selects NERDTree.
    pub explorer: String,
    pub database: bool,
    pub fuzzyfind: bool,
    pub editorconfig: bool,
    pub indent_plugin: String,
    pub comment: bool,
    pub outline: bool,
    pub tags: bool,
    pub quickrun: bool,
    pub data_files: Vec<String>,
    /// Full enhance plugin labels; the first word is the plugin name.
    pub enhance_plugins: Vec<String>,
    pub sandwich: bool,
    pub version_control: Vec<String>,
    pub languages: Vec<String>,
}

impl Default for UserChoices {
    fn default() -> Self {
        Self {
            colorschemes: vec!["glepnir/oceanic-material".into()],
            leader_key: "Space".into(),
            local_leader_key: "Semicolon(;)".into(),
            dashboard: true,
            bufferline: true,
            statusline: true,
            explorer: "coc-explorer".into(),
            database: false,
            fuzzyfind: true,
            editorconfig: true,
            indent_plugin: "Yggdroot/indentLine".into(),
            comment: true,
            outline: true,
            tags: false,
            quickrun: true,
            data_files: vec!["MarkDown".into(), "Toml".into(), "Json".into()],
            enhance_plugins: vec![
                "accelerated-jk (faster j/k movement)".into(),
                "vim-mundo (undo tree)".into(),
            ],
            sandwich: true,
            version_control: vec!["tpope/vim-fugitive".into()],
            languages: vec!["Rust".into(), "Python".into()],
        }
    }
}

impl UserChoices {
    /// Every toggle off and every list empty.
    ///
    /// Only the unconditional parts of the configuration get written.
    pub fn minimal() -> Self {
        Self {
            colorschemes: Vec::new(),
            leader_key: "Space".into(),
            local_leader_key: "Space".into(),
            dashboard: false,
            bufferline: false,
            statusline: false,
            explorer: String::new(),
            database: false,
            fuzzyfind: false,
            editorconfig: false,
            indent_plugin: String::new(),
            comment: false,
            outline: false,
            tags: false,
            quickrun: false,
            data_files: Vec::new(),
            enhance_plugins: Vec::new(),
            sandwich: false,
            version_control: Vec::new(),
            languages: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_in_defaults() {
        let choices: UserChoices = toml::from_str(
            r#"
            languages = ["Go"]
            database = true
            "#,
        )
        .unwrap();

        assert_eq!(choices.languages, vec!["Go"]);
        assert!(choices.database);
        assert_eq!(choices.leader_key, "Space");
        assert_eq!(choices.explorer, "coc-explorer");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<UserChoices, _> = toml::from_str("colour = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn defaults_survive_serialization() {
        let text = toml::to_string(&UserChoices::default()).unwrap();
        let back: UserChoices = toml::from_str(&text).unwrap();
        assert_eq!(back, UserChoices::default());
    }
}
