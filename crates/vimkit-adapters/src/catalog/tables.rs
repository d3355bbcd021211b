//! Compiled-in option tables.
//!
//! Each table maps an option value, exactly as the user spells it, to the
//! text written for it.

use vimkit_core::domain::OptionTable;

pub const COLORSCHEMES: &[(&str, &str)] = &[
    ("glepnir/oceanic-material", "oceanic_material"),
    ("drewtempelmeyer/palenight.vim", "palenight"),
    ("ayu-theme/ayu-vim", "ayu"),
    ("hardcoreplayers/gruvbox9", "gruvbox9"),
    ("arcticicestudio/nord-vim", "nord"),
    ("rakr/vim-one", "one"),
];

pub const LEADER_KEYS: &[(&str, &str)] = &[
    ("Space", "\\<Space>"),
    ("Comma(,)", ","),
    ("Semicolon(;)", ";"),
];

pub const LANGUAGES: &[(&str, &str)] = &[
    (
        "C-family",
        r#"
[[plugins]]
repo = 'jackguo380/vim-lsp-cxx-highlight'
on_ft = ['c', 'cpp', 'objc', 'objcpp', 'cc', 'cuda']
"#,
    ),
    (
        "R",
        r#"
[[plugins]]
repo = 'jalvesaq/Nvim-R'
on_ft = 'r'
"#,
    ),
    (
        "Javascript",
        r#"
[[plugins]]
repo = 'pangloss/vim-javascript'
on_ft = ['javascript', 'javascriptreact']
hook_source = '''
  let g:javascript_plugin_jsdoc = 1
  let g:javascript_plugin_flow = 1
'''
"#,
    ),
    (
        "Typescript",
        r#"
[[plugins]]
repo = 'HerringtonDarkholme/yats.vim'
on_ft = ['typescript', 'typescriptreact']
"#,
    ),
    (
        "React",
        r#"
[[plugins]]
repo = 'MaxMEllon/vim-jsx-pretty'
on_ft = ['javascript', 'javascriptreact', 'typescriptreact']
depends = 'vim-javascript'
hook_add = '''
  let g:vim_jsx_pretty_colorful_config = 1
'''
"#,
    ),
    (
        "Vue",
        r#"
[[plugins]]
repo = 'posva/vim-vue'
on_ft = 'vue'
hook_add = '''
  let g:vue_pre_processors = 'detect_on_enter'
'''
"#,
    ),
    (
        "Go",
        r#"
[[plugins]]
repo = 'fatih/vim-go'
on_ft = 'go'
hook_post_update = ':GoUpdateBinaries'
hook_source = '''
  let g:go_def_mapping_enabled = 0
  let g:go_doc_keywordprg_enabled = 0
  let g:go_highlight_functions = 1
  let g:go_highlight_methods = 1
  let g:go_highlight_structs = 1
  let g:go_highlight_operators = 1
  let g:go_highlight_build_constraints = 1
'''
"#,
    ),
    (
        "Rust",
        r#"
[[plugins]]
repo = 'rust-lang/rust.vim'
on_ft = 'rust'
hook_source = '''
  let g:rustfmt_autosave = 1
'''
"#,
    ),
    (
        "Ruby",
        r#"
[[plugins]]
repo = 'vim-ruby/vim-ruby'
on_ft = 'ruby'
"#,
    ),
    (
        "Scala",
        r#"
[[plugins]]
repo = 'derekwyatt/vim-scala'
on_ft = 'scala'
"#,
    ),
    (
        "Python",
        r#"
[[plugins]]
repo = 'vim-python/python-syntax'
on_ft = 'python'
hook_source = '''
  let g:python_highlight_all = 1
'''

[[plugins]]
repo = 'Vimjas/vim-python-pep8-indent'
on_ft = 'python'
"#,
    ),
    (
        "Html",
        r#"
[[plugins]]
repo = 'othree/html5.vim'
on_ft = 'html'
"#,
    ),
    (
        "Css",
        r#"
[[plugins]]
repo = 'hail2u/vim-css3-syntax'
on_ft = 'css'
"#,
    ),
    (
        "Lua",
        r#"
[[plugins]]
repo = 'tbastos/vim-lua'
on_ft = 'lua'
"#,
    ),
    (
        "Shell",
        r#"
[[plugins]]
repo = 'chrisbra/vim-sh-indent'
on_ft = ['sh', 'zsh']
"#,
    ),
];

pub const DATA_FILES: &[(&str, &str)] = &[
    (
        "MarkDown",
        r#"
[[plugins]]
repo = 'plasticboy/vim-markdown'
on_ft = 'markdown'
hook_add = '''
  let g:vim_markdown_frontmatter = 1
  let g:vim_markdown_conceal = 0
  let g:vim_markdown_folding_disabled = 1
'''

[[plugins]]
repo = 'iamcco/markdown-preview.nvim'
on_ft = ['markdown', 'pandoc.markdown', 'rmd']
build = 'sh -c "cd app && yarn install"'
"#,
    ),
    (
        "Toml",
        r#"
[[plugins]]
repo = 'cespare/vim-toml'
on_ft = 'toml'
"#,
    ),
    (
        "Nginx",
        r#"
[[plugins]]
repo = 'chr4/nginx.vim'
on_ft = 'nginx'
"#,
    ),
    (
        "Json",
        r#"
[[plugins]]
repo = 'elzr/vim-json'
on_ft = 'json'
hook_add = '''
  let g:vim_json_syntax_conceal = 0
'''
"#,
    ),
    (
        "Dockerfile",
        r#"
[[plugins]]
repo = 'ekalinin/Dockerfile.vim'
on_ft = ['Dockerfile', 'docker-compose']
"#,
    ),
];

pub const ENHANCE_PLUGINS: &[(&str, &str)] = &[
    (
        "accelerated-jk (faster j/k movement)",
        r#"
[[plugins]]
repo = 'rhysd/accelerated-jk'
on_map = { n = '<Plug>' }
"#,
    ),
    (
        "vim-mundo (undo tree)",
        r#"
[[plugins]]
repo = 'simnalamburt/vim-mundo'
on_cmd = 'MundoToggle'
"#,
    ),
    (
        "vim-easymotion (fast jump)",
        r#"
[[plugins]]
repo = 'easymotion/vim-easymotion'
on_map = { n = '<Plug>' }
hook_source = '''
  let g:EasyMotion_do_mapping = 0
  let g:EasyMotion_prompt = 'Jump to → '
  let g:EasyMotion_keys = 'fjdksweoavn'
  let g:EasyMotion_smartcase = 1
  let g:EasyMotion_use_smartsign_us = 1
'''
"#,
    ),
    (
        "rainbow (rainbow parentheses)",
        r#"
[[plugins]]
repo = 'luochen1990/rainbow'
on_event = 'BufReadPost'
hook_source = '''
  let g:rainbow_active = 1
'''
"#,
    ),
    (
        "vim-floaterm (floating terminal)",
        r#"
[[plugins]]
repo = 'voldikss/vim-floaterm'
on_cmd = ['FloatermNew', 'FloatermToggle', 'FloatermPrev', 'FloatermNext', 'FloatermSend']
hook_source = '''
  let g:floaterm_position = 'center'
  let g:floaterm_wintype = 'floating'
'''
"#,
    ),
    (
        "vim-smoothie (smooth scrolling)",
        r#"
[[plugins]]
repo = 'psliwka/vim-smoothie'
on_event = 'BufReadPost'
"#,
    ),
];

/// Internal: keyed by the first word of an enhance plugin label.
pub const ENHANCE_KEYMAPS: &[(&str, &str)] = &[
    (
        "accelerated-jk",
        r#"
" accelerated-jk
nmap <silent>j <Plug>(accelerated_jk_gj)
nmap <silent>k <Plug>(accelerated_jk_gk)
"#,
    ),
    (
        "vim-mundo",
        r#"
" vim-mundo
nnoremap <silent> <Leader>m :MundoToggle<CR>
"#,
    ),
    (
        "vim-easymotion",
        r#"
" vim-easymotion
nmap gsj <Plug>(easymotion-w)
nmap gsk <Plug>(easymotion-b)
nmap gsf <Plug>(easymotion-overwin-f2)
"#,
    ),
    (
        "vim-floaterm",
        r#"
" vim-floaterm
nnoremap <silent> <Leader>tt :<C-u>FloatermToggle<CR>
nnoremap <silent> <Leader>gz :<C-u>FloatermNew height=0.7 width=0.8 lazygit<CR>
"#,
    ),
];

pub const VERSION_CONTROL: &[(&str, &str)] = &[
    (
        "jreybert/vimagit",
        r#"
[[plugins]]
repo = 'jreybert/vimagit'
on_cmd = ['Magit', 'MagitOnly']
"#,
    ),
    (
        "tpope/vim-fugitive",
        r#"
[[plugins]]
repo = 'tpope/vim-fugitive'
on_cmd = ['G', 'Git', 'Gfetch', 'Gpush', 'Glog', 'Gclog', 'Gdiffsplit']
"#,
    ),
    (
        "lambdalisue/gina.vim",
        r#"
[[plugins]]
repo = 'lambdalisue/gina.vim'
on_cmd = 'Gina'
"#,
    ),
];

/// Internal: keyed by version control repo.
pub const VERSION_KEYMAPS: &[(&str, &str)] = &[
    (
        "jreybert/vimagit",
        r#"
" vimagit
nnoremap <silent> <Leader>gg :Magit<CR>
"#,
    ),
    (
        "tpope/vim-fugitive",
        r#"
" vim-fugitive
nnoremap <silent> <Leader>ga :Git add %:p<CR>
nnoremap <silent> <Leader>gd :Gdiffsplit<CR>
nnoremap <silent> <Leader>gc :Git commit<CR>
nnoremap <silent> <Leader>gb :Git blame<CR>
nnoremap <silent> <Leader>gf :Gfetch<CR>
nnoremap <silent> <Leader>gs :Git<CR>
nnoremap <silent> <Leader>gp :Gpush<CR>
"#,
    ),
];

/// Single-extension languages.
pub const SINGLE_EXTENSIONS: &[(&str, &str)] = &[
    ("R", "coc-r-lsp"),
    ("Vue", "coc-vetur"),
    ("Rust", "coc-rust-analyzer"),
    ("Ruby", "coc-solargraph"),
    ("Scala", "coc-metals"),
    ("Python", "coc-python"),
    ("Html", "coc-html"),
    ("Css", "coc-css"),
    ("Go", "coc-go"),
    ("Lua", "coc-lua"),
    ("Shell", "coc-sh"),
];

/// Shared by Javascript and Typescript.
pub const JS_TS_EXTENSIONS: &[&str] = &["coc-tsserver", "coc-eslint", "coc-prettier"];

pub const REACT_EXTENSIONS: &[&str] = &["coc-tsserver", "coc-eslint", "coc-prettier", "coc-emmet"];

pub fn table(table: OptionTable) -> &'static [(&'static str, &'static str)] {
    match table {
        OptionTable::Colorschemes => COLORSCHEMES,
        OptionTable::LeaderKeys => LEADER_KEYS,
        OptionTable::Languages => LANGUAGES,
        OptionTable::DataFiles => DATA_FILES,
        OptionTable::EnhancePlugins => ENHANCE_PLUGINS,
        OptionTable::EnhanceKeymaps => ENHANCE_KEYMAPS,
        OptionTable::VersionControl => VERSION_CONTROL,
        OptionTable::VersionKeymaps => VERSION_KEYMAPS,
    }
}
