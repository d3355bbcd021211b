//! Compiled-in snippet text.
//!
//! Whole files live under `catalog/` and are pulled in with `include_str!`.
//! Plugin blocks and keymaps are short enough to sit here as constants.

use vimkit_core::domain::{PluginScript, SnippetId};

pub const INIT_VIM: &str = include_str!("../../catalog/init.vim");
pub const CORE_VIM: &str = include_str!("../../catalog/core.vim");
pub const DEIN_VIM: &str = include_str!("../../catalog/dein.vim");
pub const GENERAL_VIM: &str = include_str!("../../catalog/general.vim");
pub const EVENT_VIM: &str = include_str!("../../catalog/event.vim");
pub const THEME_VIM: &str = include_str!("../../catalog/theme.vim");
pub const VIM_KEYMAP: &str = include_str!("../../catalog/vmap.vim");
pub const COC_SETTINGS: &str = include_str!("../../catalog/coc-settings.json");
pub const MAKEFILE: &str = include_str!("../../catalog/Makefile");
pub const INSTALL_SCRIPT: &str = include_str!("../../catalog/install.sh");

pub const PLUGIN_BUFKILL: &str = include_str!("../../catalog/plugin/bufkill.vim");
pub const PLUGIN_DIFFTOOLS: &str = include_str!("../../catalog/plugin/difftools.vim");
pub const PLUGIN_HLSEARCH: &str = include_str!("../../catalog/plugin/hlsearch.vim");
pub const PLUGIN_NICEFOLD: &str = include_str!("../../catalog/plugin/nicefold.vim");
pub const PLUGIN_WHITESPACE: &str = include_str!("../../catalog/plugin/whitespace.vim");

// ── autoload/initself.vim ────────────────────────────────────────────────────

pub const AUTOLOAD_SOURCE_FILE: &str = r#"
function! initself#source_file(root_path, path, ...)
  " Source user configuration files with set/global sensitivity
  let use_global = get(a:000, 0, ! has('vim_starting'))
  let abspath = resolve(a:root_path . '/' . a:path)
  if ! use_global
    execute 'source' fnameescape(abspath)
    return
  endif

  let tempfile = tempname()
  let content = map(readfile(abspath),
        \ "substitute(v:val, '^\\W*\\zsset\\ze\\W', 'setglobal', '')")
  try
    call writefile(content, tempfile)
    execute printf('source %s', fnameescape(tempfile))
  finally
    if filereadable(tempfile)
      call delete(tempfile)
    endif
  endtry
endfunction
"#;

pub const AUTOLOAD_MKDIR: &str = r#"
" Create the cache directories the configuration writes into
function! initself#mkdir_as_necessary(dir, force) abort
  if ! isdirectory(a:dir) && &l:buftype ==# '' &&
        \ (a:force || input(printf('"%s" does not exist. Create? [y/N]',
        \              a:dir)) =~? '^y\%[es]$')
    call mkdir(iconv(a:dir, &encoding, &termencoding), 'p')
  endif
endfunction
"#;

pub const AUTOLOAD_LOAD_ENV: &str = r#"
" Load database connections from $VIM_PATH/.env
function! initself#load_db_from_env() abort
  let s:env_file = $VIM_PATH . '/.env'
  if ! filereadable(s:env_file)
    return {}
  endif
  let l:dbs = {}
  for l:line in readfile(s:env_file)
    let l:pair = matchlist(l:line, '\v^DB_CONNECTION_(\w+)\s*\=\s*(.+)$')
    if ! empty(l:pair)
      let l:dbs[tolower(l:pair[1])] = trim(l:pair[2], '"''')
    endif
  endfor
  return l:dbs
endfunction
"#;

pub const AUTOLOAD_COC: &str = r#"
" Install or update coc.nvim extensions listed in g:coc_global_extensions
function! initself#coc_extension_update() abort
  if exists(':CocUpdateSync')
    CocUpdateSync
  endif
endfunction

function! initself#check_back_space() abort
  let col = col('.') - 1
  return !col || getline('.')[col - 1]  =~ '\s'
endfunction
"#;

// ── modules/appearance.toml ──────────────────────────────────────────────────

pub const DEIN_COLORSCHEME: &str = r#"
[[plugins]]
repo = '{{REPO}}'
"#;

pub const DEIN_DEVICONS: &str = r#"
[[plugins]]
repo = 'ryanoasis/vim-devicons'
"#;

pub const DEIN_DASHBOARD: &str = r#"
[[plugins]]
repo = 'glepnir/dashboard-nvim'
hook_add = '''
  let g:dashboard_default_executive = 'clap'
  let g:dashboard_custom_shortcut = {
    \ 'last_session'       : 'SPC s l',
    \ 'find_history'       : 'SPC f h',
    \ 'find_file'          : 'SPC f f',
    \ 'new_file'           : 'SPC t f',
    \ 'change_colorscheme' : 'SPC t c',
    \ 'find_word'          : 'SPC f a',
    \ 'book_marks'         : 'SPC f b',
    \ }
'''
"#;

pub const DEIN_BUFFERLINE: &str = r#"
[[plugins]]
repo = 'bagrat/vim-buffet'
on_event = 'BufReadPre'
hook_add = '''
  let g:buffet_powerline_separators = 1
  let g:buffet_tab_icon = ""
  let g:buffet_left_trunc_icon = ""
  let g:buffet_right_trunc_icon = ""
'''
"#;

pub const DEIN_STATUSLINE: &str = r#"
[[plugins]]
repo = 'glepnir/spaceline.vim'
on_event = 'BufReadPre'
hook_add = '''
  let g:spaceline_seperate_style = 'arrow-fade'
'''
"#;

pub const DEIN_DEFX: &str = r#"
[[plugins]]
repo = 'Shougo/defx.nvim'
on_cmd = 'Defx'
hook_source = '''
  call defx#custom#option('_', {
    \ 'winwidth': 30,
    \ 'split': 'vertical',
    \ 'direction': 'topleft',
    \ 'show_ignored_files': 0,
    \ 'buffer_name': 'defx',
    \ 'toggle': 1,
    \ 'resume': 1,
    \ })
'''

[[plugins]]
repo = 'kristijanhusak/defx-git'
on_source = 'defx.nvim'

[[plugins]]
repo = 'kristijanhusak/defx-icons'
on_source = 'defx.nvim'
"#;

pub const DEIN_NERDTREE: &str = r#"
[[plugins]]
repo = 'preservim/nerdtree'
on_cmd = ['NERDTreeToggle', 'NERDTreeFind']
hook_add = '''
  let g:NERDTreeMinimalUI = 1
  let g:NERDTreeShowHidden = 1
  let g:NERDTreeIgnore = ['\.git$', '\.DS_Store$', '__pycache__']
'''
"#;

// ── modules/database.toml ────────────────────────────────────────────────────

pub const DEIN_DATABASE: &str = r#"
[[plugins]]
repo = 'tpope/vim-dadbod'

[[plugins]]
repo = 'kristijanhusak/vim-dadbod-ui'
on_cmd = ['DBUIToggle', 'DBUIAddConnection', 'DBUI', 'DBUIFindBuffer', 'DBUIRenameBuffer']
on_source = 'vim-dadbod'
hook_add = '''
  let g:db_ui_show_help = 0
  let g:db_ui_win_position = 'left'
  let g:db_ui_use_nerd_fonts = 1
  let g:db_ui_winwidth = 35
  let g:db_ui_save_location = $DATA_PATH . '/db_ui_queries'
  let g:dbs = initself#load_db_from_env()
'''
"#;

// ── modules/fuzzyfind.toml ───────────────────────────────────────────────────

pub const DEIN_CLAP: &str = r#"
[[plugins]]
repo = 'liuchengxu/vim-clap'
merged = 0
on_cmd = 'Clap'
hook_post_update = 'Clap install-binary'
hook_add = '''
  let g:clap_cache_directory = $DATA_PATH . '/clap'
  let g:clap_theme = 'material_design_dark'
  let g:clap_current_selection_sign = { 'text': '➤', 'texthl': "ClapCurrentSelectionSign", "linehl": "ClapCurrentSelection"}
  let g:clap_layout = { 'relative': 'editor' }
  let g:clap_enable_icon = 1
  let g:clap_search_box_border_style = 'curve'
  let g:clap_provider_grep_enable_icon = 1
  let g:clap_prompt_format = '%spinner%%forerunner_status% %provider_id%: '
'''

[[plugins]]
repo = 'vn-ki/coc-clap'
on_source = 'vim-clap'
"#;

// ── modules/program.toml ─────────────────────────────────────────────────────

pub const DEIN_EDITORCONFIG: &str = r#"
[[plugins]]
repo = 'editorconfig/editorconfig-vim'
on_event = 'BufReadPre'
"#;

pub const DEIN_INDENT_LINE: &str = r#"
[[plugins]]
repo = 'Yggdroot/indentLine'
on_event = 'BufReadPre'
hook_source = '''
  let g:indentLine_enabled = 1
  let g:indentLine_char = '┊'
  let g:indentLine_fileTypeExclude = ['defx', 'denite', 'dashboard', 'tagbar', 'vista_kind', 'vista', 'coc-explorer', 'startify']
  let g:indentLine_concealcursor = 'niv'
  let g:indentLine_showFirstIndentLevel = 1
'''
"#;

pub const DEIN_INDENT_GUIDES: &str = r#"
[[plugins]]
repo = 'nathanaelkane/vim-indent-guides'
on_event = 'BufReadPre'
hook_source = '''
  let g:indent_guides_enable_on_vim_startup = 1
  let g:indent_guides_default_mapping = 0
  let g:indent_guides_tab_guides = 0
  let g:indent_guides_color_change_percent = 3
  let g:indent_guides_guide_size = 1
  let g:indent_guides_exclude_filetypes = ['help', 'defx', 'denite', 'dashboard', 'vista', 'coc-explorer']
'''
"#;

pub const DEIN_CAW: &str = r#"
[[plugins]]
repo = 'tyru/caw.vim'
depends = 'context_filetype.vim'
on_map = { nxo = '<Plug>' }
hook_add = '''
  let g:caw_no_default_keymappings = 1
'''
"#;

pub const DEIN_VISTA: &str = r#"
[[plugins]]
repo = 'liuchengxu/vista.vim'
on_cmd = ['Vista', 'Vista!', 'Vista!!']
hook_source = '''
  let g:vista#renderer#enable_icon = 1
  let g:vista_disable_statusline = 1
  let g:vista_default_executive = 'ctags'
  let g:vista_echo_cursor_strategy = 'floating_win'
  let g:vista_vimwiki_executive = 'markdown'
  let g:vista_executive_for = {
    \ 'vimwiki': 'markdown',
    \ 'pandoc': 'markdown',
    \ 'markdown': 'toc',
    \ 'typescript': 'coc',
    \ 'typescriptreact': 'coc',
    \ }
'''
"#;

pub const DEIN_GUTENTAGS: &str = r#"
[[plugins]]
repo = 'ludovicchabant/vim-gutentags'
if = "executable('ctags')"
on_event = ['BufReadPost', 'BufWritePost']
hook_source = '''
  let g:gutentags_cache_dir = $DATA_PATH . '/tags'
  let g:gutentags_project_root = ['.root', '.git', '.svn', '.hg', '.project', 'go.mod', 'Cargo.toml']
  let g:gutentags_generate_on_write = 1
  let g:gutentags_generate_on_missing = 1
  let g:gutentags_generate_on_new = 0
  let g:gutentags_exclude_filetypes = [ 'defx', 'denite', 'vista', 'magit' ]
  let g:gutentags_ctags_extra_args = ['--output-format=e-ctags']
'''
"#;

pub const DEIN_QUICKRUN: &str = r#"
[[plugins]]
repo = 'thinca/vim-quickrun'
on_cmd = 'QuickRun'
hook_add = '''
  let g:quickrun_config = {
    \ "_" : {
    \     "outputter" : "message",
    \ },
    \ }
  let g:quickrun_no_default_key_mappings = 1
'''
"#;

pub const DEIN_EMMET: &str = r#"
[[plugins]]
repo = 'mattn/emmet-vim'
on_event = 'InsertEnter'
on_ft = ['html', 'css', 'vue', 'javascript', 'javascriptreact', 'svelte']
hook_source = '''
  let g:user_emmet_complete_tag = 0
  let g:user_emmet_install_global = 0
  let g:user_emmet_install_command = 0
  let g:user_emmet_mode = 'i'
'''
"#;

// ── modules/filetype.toml ────────────────────────────────────────────────────

pub const DEIN_CONTEXT_FILETYPE: &str = r#"
[[plugins]]
repo = 'Shougo/context_filetype.vim'
"#;

// ── modules/enhance.toml ─────────────────────────────────────────────────────

pub const DEIN_SELF: &str = r#"
[[plugins]]
repo = 'Shougo/dein.vim'
"#;

// ── modules/textobj.toml ─────────────────────────────────────────────────────

pub const DEIN_SANDWICH: &str = r#"
[[plugins]]
repo = 'machakann/vim-sandwich'
on_map = { vonx = '<Plug>(operator-sandwich-' }
hook_add = '''
  let g:sandwich_no_default_key_mappings = 1
  let g:operator_sandwich_no_default_key_mappings = 1
  let g:textobj_sandwich_no_default_key_mappings = 1
'''
"#;

pub const DEIN_TEXTOBJ: &str = r#"
[[plugins]]
repo = 'kana/vim-operator-user'

[[plugins]]
repo = 'kana/vim-textobj-user'

[[plugins]]
repo = 'kana/vim-niceblock'
on_map = { x = '<Plug>' }

[[plugins]]
repo = 'terryma/vim-expand-region'
on_map = { x = '<Plug>' }

[[plugins]]
repo = 'AndrewRadev/dsf.vim'
on_map = { n = '<Plug>Dsf' }
hook_add = '''
  let g:dsf_no_mappings = 1
'''

[[plugins]]
repo = 'AndrewRadev/splitjoin.vim'
on_cmd = ['SplitjoinJoin', 'SplitjoinSplit']
hook_add = '''
  let g:splitjoin_join_mapping = ''
  let g:splitjoin_split_mapping = ''
'''

[[plugins]]
repo = 'kana/vim-operator-replace'
on_map = { vnx = '<Plug>' }

[[plugins]]
repo = 'osyo-manga/vim-textobj-multiblock'
on_map = { ox = '<Plug>' }
hook_add = '''
  let g:textobj_multiblock_no_default_key_mappings = 1
'''

[[plugins]]
repo = 'kana/vim-textobj-function'
on_map = { ox = '<Plug>' }
hook_add = '''
  let g:textobj_function_no_default_key_mappings = 1
'''
"#;

// ── modules/version.toml ─────────────────────────────────────────────────────

pub const DEIN_COMMITTIA: &str = r#"
[[plugins]]
repo = 'rhysd/committia.vim'
on_path = ['COMMIT_EDITMSG', 'MERGE_MSG']
hook_source = '''
  let g:committia_min_window_width = 70
'''
"#;

// ── modules/completion.toml ──────────────────────────────────────────────────

pub const DEIN_COC: &str = r#"
[[plugins]]
repo = 'neoclide/coc.nvim'
merged = 0
rev = 'release'
hook_add = '''
  let g:coc_global_extensions = [{{EXTENSIONS}}]
  autocmd User CocNvimInit call initself#coc_extension_update()
'''
"#;

// ── core/pmap.vim ────────────────────────────────────────────────────────────

pub const BUFFERLINE_KEYMAP: &str = r#"
" vim-buffet
nnoremap  ]b :<C-u>bp<CR>
nnoremap  [b :<C-u>bn<CR>
nnoremap <silent> <Leader>bc :Bonly<CR>
nnoremap <silent> <Leader>bx :Bw<CR>
nmap <leader>1 <Plug>BuffetSwitch(1)
nmap <leader>2 <Plug>BuffetSwitch(2)
nmap <leader>3 <Plug>BuffetSwitch(3)
nmap <leader>4 <Plug>BuffetSwitch(4)
nmap <leader>5 <Plug>BuffetSwitch(5)
"#;

pub const COC_EXPLORER_KEYMAP: &str = r#"
" coc-explorer
nnoremap <silent> <Leader>e :CocCommand explorer<CR>
nnoremap <silent> <Leader>F :CocCommand explorer --reveal<CR>
"#;

pub const DEFX_KEYMAP: &str = r#"
" defx.nvim
nnoremap <silent> <Leader>e
      \ :<C-u>Defx -resume -toggle -buffer-name=tab`tabpagenr()`<CR>
"#;

pub const DEFX_FIND_KEYMAP: &str = r#"
nnoremap <silent> <Leader>F
      \ :<C-u>Defx -resume -buffer-name=tab`tabpagenr()` -search=`expand('%:p')`<CR>
"#;

pub const NERDTREE_KEYMAP: &str = r#"
" nerdtree
nnoremap <silent> <Leader>e :<C-u>NERDTreeToggle<CR>
nnoremap <silent> <Leader>F :<C-u>NERDTreeFind<CR>
"#;

pub const DATABASE_KEYMAP: &str = r#"
" vim-dadbod-ui
nnoremap <silent> <Leader>od :DBUIToggle<CR>
"#;

pub const CLAP_KEYMAP: &str = r#"
" vim-clap
nnoremap <silent> <Leader>tc :<C-u>Clap colors<CR>
nnoremap <silent> <Leader>bb :<C-u>Clap buffers<CR>
nnoremap <silent> <Leader>fa :<C-u>Clap grep2<CR>
nnoremap <silent> <Leader>fb :<C-u>Clap marks<CR>
nnoremap <silent> <C-x><C-f> :<C-u>Clap filer<CR>
nnoremap <silent> <Leader>ff :<C-u>Clap files ++finder=rg --ignore --hidden --files<cr>
nnoremap <silent> <Leader>fg :<C-u>Clap gfiles<CR>
nnoremap <silent> <Leader>fw :<C-u>Clap grep ++query=<cword><cr>
nnoremap <silent> <Leader>fh :<C-u>Clap history<CR>
nnoremap <silent> <Leader>fW :<C-u>Clap windows<CR>
nnoremap <silent> <Leader>fl :<C-u>Clap loclist<CR>
nnoremap <silent> <Leader>fu :<C-u>Clap git_diff_files<CR>
nnoremap <silent> <Leader>fv :<C-u>Clap grep ++query=@visual<CR>
nnoremap <silent> <Leader>oc :<C-u>Clap dotfiles<CR>
"#;

pub const COC_CLAP_KEYMAP: &str = r#"
" coc-clap
nnoremap <silent> <Leader>ce :<C-u>Clap coc_diagnostics<CR>
nnoremap <silent> <Leader>; :<C-u>Clap coc_extensions<CR>
nnoremap <silent> <Leader>, :<C-u>Clap coc_commands<CR>
nnoremap <silent> <Leader>cs :<C-u>Clap coc_symbols<CR>
nnoremap <silent> <Leader>cS :<C-u>Clap coc_services<CR>
nnoremap <silent> <leader>ct :<C-u>Clap coc_outline<CR>
"#;

pub const CAW_KEYMAP: &str = r#"
" caw.vim
function! InitCaw() abort
  if ! (&l:modifiable && &buftype ==# '')
    silent! nunmap <buffer> gc
    silent! xunmap <buffer> gc
    silent! nunmap <buffer> gcc
    silent! xunmap <buffer> gcc
  else
    nmap <buffer> gc <Plug>(caw:prefix)
    xmap <buffer> gc <Plug>(caw:prefix)
    nmap <buffer> gcc <Plug>(caw:hatpos:toggle)
    xmap <buffer> gcc <Plug>(caw:hatpos:toggle)
  endif
endfunction
autocmd FileType * call InitCaw()
call InitCaw()
"#;

pub const VISTA_KEYMAP: &str = r#"
" vista.vim
nnoremap <silent> <Leader>i :<C-u>Vista!!<CR>
"#;

pub const QUICKRUN_KEYMAP: &str = r#"
" vim-quickrun
nnoremap <silent> <Leader>cr :QuickRun<CR>
"#;

pub const SANDWICH_KEYMAP: &str = r#"
" vim-sandwich
nmap <silent> sa <Plug>(operator-sandwich-add)
xmap <silent> sa <Plug>(operator-sandwich-add)
omap <silent> sa <Plug>(operator-sandwich-g@)
nmap <silent> sd <Plug>(operator-sandwich-delete)<Plug>(operator-sandwich-release-count)<Plug>(textobj-sandwich-query-a)
xmap <silent> sd <Plug>(operator-sandwich-delete)
nmap <silent> sr <Plug>(operator-sandwich-replace)<Plug>(operator-sandwich-release-count)<Plug>(textobj-sandwich-query-a)
xmap <silent> sr <Plug>(operator-sandwich-replace)
nmap <silent> sdb <Plug>(operator-sandwich-delete)<Plug>(operator-sandwich-release-count)<Plug>(textobj-sandwich-auto-a)
nmap <silent> srb <Plug>(operator-sandwich-replace)<Plug>(operator-sandwich-release-count)<Plug>(textobj-sandwich-auto-a)
omap ib <Plug>(textobj-sandwich-auto-i)
xmap ib <Plug>(textobj-sandwich-auto-i)
omap ab <Plug>(textobj-sandwich-auto-a)
xmap ab <Plug>(textobj-sandwich-auto-a)
omap is <Plug>(textobj-sandwich-query-i)
xmap is <Plug>(textobj-sandwich-query-i)
omap as <Plug>(textobj-sandwich-query-a)
xmap as <Plug>(textobj-sandwich-query-a)
"#;

pub const NICEBLOCK_KEYMAP: &str = r#"
" vim-niceblock
silent! xmap I  <Plug>(niceblock-I)
silent! xmap gI <Plug>(niceblock-gI)
silent! xmap A  <Plug>(niceblock-A)
"#;

pub const EXPAND_REGION_KEYMAP: &str = r#"
" vim-expand-region
xmap v <Plug>(expand_region_expand)
xmap V <Plug>(expand_region_shrink)
"#;

pub const DSF_KEYMAP: &str = r#"
" dsf.vim
nmap dsf <Plug>DsfDelete
nmap csf <Plug>DsfChange
"#;

pub const SPLITJOIN_KEYMAP: &str = r#"
" splitjoin.vim
nmap sj :SplitjoinJoin<CR>
nmap sk :SplitjoinSplit<CR>
"#;

pub const OPERATOR_REPLACE_KEYMAP: &str = r#"
" vim-operator-replace
xmap p <Plug>(operator-replace)
"#;

pub const MULTIBLOCK_KEYMAP: &str = r#"
" vim-textobj-multiblock
omap <silent> ab <Plug>(textobj-multiblock-a)
omap <silent> ib <Plug>(textobj-multiblock-i)
xmap <silent> ab <Plug>(textobj-multiblock-a)
xmap <silent> ib <Plug>(textobj-multiblock-i)
"#;

pub const TEXTOBJ_FUNCTION_KEYMAP: &str = r#"
" vim-textobj-function
omap <silent> af <Plug>(textobj-function-a)
omap <silent> if <Plug>(textobj-function-i)
xmap <silent> af <Plug>(textobj-function-a)
xmap <silent> if <Plug>(textobj-function-i)
"#;

pub const COC_KEYMAP: &str = r#"
" coc.nvim
inoremap <silent><expr> <TAB>
      \ pumvisible() ? "\<C-n>" :
      \ initself#check_back_space() ? "\<TAB>" :
      \ coc#refresh()
inoremap <expr><S-TAB> pumvisible() ? "\<C-p>" : "\<C-h>"
inoremap <silent><expr> <CR> pumvisible() ? coc#_select_confirm() : "\<C-g>u\<CR>\<c-r>=coc#on_enter()\<CR>"
nmap <silent> [e <Plug>(coc-diagnostic-prev)
nmap <silent> ]e <Plug>(coc-diagnostic-next)
nmap <silent> gd <Plug>(coc-definition)
nmap <silent> gy <Plug>(coc-type-definition)
nmap <silent> gi <Plug>(coc-implementation)
nmap <silent> gr <Plug>(coc-references)
nmap <Leader>cn <Plug>(coc-rename)
nnoremap <silent> K :call CocActionAsync('doHover')<CR>
nmap <Leader>ca <Plug>(coc-codeaction)
xmap <Leader>cf <Plug>(coc-format-selected)
nmap <Leader>cf <Plug>(coc-format-selected)
"#;

/// Snippet text for a fixed id.
pub fn fixed(id: SnippetId) -> &'static str {
    match id {
        SnippetId::InitVim => INIT_VIM,
        SnippetId::Core => CORE_VIM,
        SnippetId::Dein => DEIN_VIM,
        SnippetId::General => GENERAL_VIM,
        SnippetId::Event => EVENT_VIM,
        SnippetId::AutoloadSourceFile => AUTOLOAD_SOURCE_FILE,
        SnippetId::AutoloadMkdir => AUTOLOAD_MKDIR,
        SnippetId::AutoloadLoadEnv => AUTOLOAD_LOAD_ENV,
        SnippetId::AutoloadCoc => AUTOLOAD_COC,
        SnippetId::Theme => THEME_VIM,
        SnippetId::Colorscheme => DEIN_COLORSCHEME,
        SnippetId::Devicons => DEIN_DEVICONS,
        SnippetId::Dashboard => DEIN_DASHBOARD,
        SnippetId::BufferLine => DEIN_BUFFERLINE,
        SnippetId::BufferLineKeymap => BUFFERLINE_KEYMAP,
        SnippetId::Statusline => DEIN_STATUSLINE,
        SnippetId::CocExplorerKeymap => COC_EXPLORER_KEYMAP,
        SnippetId::Defx => DEIN_DEFX,
        SnippetId::DefxKeymap => DEFX_KEYMAP,
        SnippetId::DefxFindKeymap => DEFX_FIND_KEYMAP,
        SnippetId::NerdTree => DEIN_NERDTREE,
        SnippetId::NerdTreeKeymap => NERDTREE_KEYMAP,
        SnippetId::Database => DEIN_DATABASE,
        SnippetId::DatabaseKeymap => DATABASE_KEYMAP,
        SnippetId::Clap => DEIN_CLAP,
        SnippetId::ClapKeymap => CLAP_KEYMAP,
        SnippetId::CocClapKeymap => COC_CLAP_KEYMAP,
        SnippetId::EditorConfig => DEIN_EDITORCONFIG,
        SnippetId::IndentLine => DEIN_INDENT_LINE,
        SnippetId::IndentGuides => DEIN_INDENT_GUIDES,
        SnippetId::ContextFiletype => DEIN_CONTEXT_FILETYPE,
        SnippetId::Caw => DEIN_CAW,
        SnippetId::CawKeymap => CAW_KEYMAP,
        SnippetId::Vista => DEIN_VISTA,
        SnippetId::VistaKeymap => VISTA_KEYMAP,
        SnippetId::Gutentags => DEIN_GUTENTAGS,
        SnippetId::QuickRun => DEIN_QUICKRUN,
        SnippetId::QuickRunKeymap => QUICKRUN_KEYMAP,
        SnippetId::DeinSelf => DEIN_SELF,
        SnippetId::Sandwich => DEIN_SANDWICH,
        SnippetId::SandwichKeymap => SANDWICH_KEYMAP,
        SnippetId::TextObj => DEIN_TEXTOBJ,
        SnippetId::NiceBlockKeymap => NICEBLOCK_KEYMAP,
        SnippetId::ExpandRegionKeymap => EXPAND_REGION_KEYMAP,
        SnippetId::DsfKeymap => DSF_KEYMAP,
        SnippetId::SplitJoinKeymap => SPLITJOIN_KEYMAP,
        SnippetId::OperatorReplaceKeymap => OPERATOR_REPLACE_KEYMAP,
        SnippetId::MultiBlockKeymap => MULTIBLOCK_KEYMAP,
        SnippetId::TextObjFunctionKeymap => TEXTOBJ_FUNCTION_KEYMAP,
        SnippetId::Committia => DEIN_COMMITTIA,
        SnippetId::Emmet => DEIN_EMMET,
        SnippetId::Coc => DEIN_COC,
        SnippetId::CocKeymap => COC_KEYMAP,
        SnippetId::CocSettings => COC_SETTINGS,
        SnippetId::VimKeymap => VIM_KEYMAP,
        SnippetId::Makefile => MAKEFILE,
        SnippetId::InstallScript => INSTALL_SCRIPT,
        SnippetId::Plugin(PluginScript::Bufkill) => PLUGIN_BUFKILL,
        SnippetId::Plugin(PluginScript::Difftools) => PLUGIN_DIFFTOOLS,
        SnippetId::Plugin(PluginScript::Hlsearch) => PLUGIN_HLSEARCH,
        SnippetId::Plugin(PluginScript::Nicefold) => PLUGIN_NICEFOLD,
        SnippetId::Plugin(PluginScript::Whitespace) => PLUGIN_WHITESPACE,
    }
}
