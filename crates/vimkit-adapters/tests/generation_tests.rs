//! End-to-end generation passes through the real adapters.

use std::path::Path;

use tempfile::TempDir;
use vimkit_adapters::{
    AutoConsole, BuiltinCatalog, CatalogOverlay, LocalFilesystem, MemoryFilesystem,
    OverlayCatalog, ScriptedConsole,
};
use vimkit_core::{
    application::{ConfirmPolicy, GenerationService, Notice},
    domain::{
        DomainError, ExtensionSet, GenerationContext, OptionTable, OutputLayout, TargetFile,
        UserChoices,
    },
    error::VimkitError,
};

const CONFIG: &str = "/home/u/.config/nvim";
const CACHE: &str = "/home/u/.cache/vim";

fn memory_service(
    fs: &MemoryFilesystem,
    console: ScriptedConsole,
    policy: ConfirmPolicy,
) -> GenerationService {
    GenerationService::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(fs.clone()),
        Box::new(console),
        OutputLayout::new(CONFIG, CACHE),
        policy,
    )
}

fn read(fs: &MemoryFilesystem, relative: &str) -> String {
    fs.read_file(&Path::new(CONFIG).join(relative))
        .unwrap_or_else(|| panic!("{relative} was not written"))
}

fn minimal_with(languages: &[&str]) -> UserChoices {
    UserChoices {
        languages: languages.iter().map(|s| s.to_string()).collect(),
        ..UserChoices::minimal()
    }
}

fn written_names(console: &ScriptedConsole, target: TargetFile) -> Vec<String> {
    console
        .notices()
        .into_iter()
        .filter_map(|notice| match notice {
            Notice::Written { target: t, name } if t == target => Some(name),
            _ => None,
        })
        .collect()
}

#[test]
fn default_choices_render_every_module() {
    let fs = MemoryFilesystem::new();
    let report = memory_service(&fs, ScriptedConsole::default(), ConfirmPolicy::AssumeYes)
        .generate(&UserChoices::default())
        .unwrap();

    assert_eq!(report.targets.first(), Some(&TargetFile::InitVim));
    assert!(report.targets.contains(&TargetFile::InstallScript));
    assert!(read(&fs, "core/core.vim").contains(r#"let g:mapleader="\<Space>""#));
    assert!(read(&fs, "core/core.vim").contains(r#"let g:maplocalleader=";""#));
    assert!(!read(&fs, "modules/appearance.toml").contains("{{REPO}}"));
    assert!(fs.is_executable(&Path::new(CONFIG).join("install.sh")));
    assert!(!fs.is_executable(&Path::new(CONFIG).join("Makefile")));
    assert_eq!(
        fs.read_file(&Path::new(CACHE).join("theme.txt")).as_deref(),
        Some("oceanic_material")
    );
    assert_eq!(
        report.extensions,
        vec!["coc-explorer", "coc-rust-analyzer", "coc-python"]
    );
}

#[test]
fn unknown_option_values_are_skipped_silently() {
    let fs = MemoryFilesystem::new();
    let choices = UserChoices {
        languages: vec!["Klingon".into()],
        data_files: vec!["Parquet".into()],
        enhance_plugins: vec!["vim-teleport (instant travel)".into()],
        version_control: vec!["nobody/vcs".into()],
        colorschemes: vec!["nobody/colors".into()],
        leader_key: "Hyper".into(),
        ..UserChoices::minimal()
    };

    let report = memory_service(&fs, ScriptedConsole::default(), ConfirmPolicy::AssumeYes)
        .generate(&choices)
        .unwrap();

    for target in [TargetFile::Languages, TargetFile::Filetype, TargetFile::ThemeCache] {
        assert!(!report.targets.contains(&target), "{target} was written");
    }
    // enhance and version always carry their unconditional blocks
    assert!(!read(&fs, "modules/enhance.toml").contains("vim-teleport"));
    assert!(!read(&fs, "modules/version.toml").contains("nobody/vcs"));
    // unknown leader labels fall back to Space
    assert!(read(&fs, "core/core.vim").contains(r#"let g:mapleader="\<Space>""#));
}

#[test]
fn each_language_write_is_named_by_its_key() {
    let fs = MemoryFilesystem::new();
    let console = ScriptedConsole::default();
    memory_service(&fs, console.clone(), ConfirmPolicy::AssumeYes)
        .generate(&minimal_with(&["Go", "Klingon", "Rust", "Lua"]))
        .unwrap();

    assert_eq!(
        written_names(&console, TargetFile::Languages),
        vec!["Go", "Rust", "Lua"]
    );
}

#[test]
fn javascript_and_typescript_share_one_extension_set() {
    let fs = MemoryFilesystem::new();
    let report = memory_service(&fs, ScriptedConsole::default(), ConfirmPolicy::AssumeYes)
        .generate(&minimal_with(&["Javascript", "Typescript"]))
        .unwrap();

    assert_eq!(
        report.extensions,
        vec!["coc-tsserver", "coc-eslint", "coc-prettier"]
    );
    let completion = read(&fs, "modules/completion.toml");
    assert_eq!(completion.matches("'coc-tsserver'").count(), 1);
}

#[test]
fn unrecognized_explorer_selects_nerdtree_once() {
    let fs = MemoryFilesystem::new();
    let choices = UserChoices {
        explorer: "ranger.vim".into(),
        ..UserChoices::minimal()
    };
    let report = memory_service(&fs, ScriptedConsole::default(), ConfirmPolicy::AssumeYes)
        .generate(&choices)
        .unwrap();

    let appearance = read(&fs, "modules/appearance.toml");
    assert_eq!(appearance.matches("repo = 'preservim/nerdtree'").count(), 1);
    assert!(!report.extensions.contains(&"coc-explorer".to_string()));
}

#[test]
fn emmet_is_written_once_for_all_markup_languages() {
    let fs = MemoryFilesystem::new();
    memory_service(&fs, ScriptedConsole::default(), ConfirmPolicy::AssumeYes)
        .generate(&minimal_with(&["React", "Vue", "Html"]))
        .unwrap();

    assert_eq!(read(&fs, "modules/program.toml").matches("mattn/emmet-vim").count(), 1);
}

#[test]
fn emmet_follows_react_even_after_javascript() {
    let fs = MemoryFilesystem::new();
    let report = memory_service(&fs, ScriptedConsole::default(), ConfirmPolicy::AssumeYes)
        .generate(&minimal_with(&["Javascript", "React"]))
        .unwrap();

    assert_eq!(read(&fs, "modules/program.toml").matches("mattn/emmet-vim").count(), 1);
    assert_eq!(
        report.extensions,
        vec!["coc-tsserver", "coc-eslint", "coc-prettier", "coc-emmet"]
    );
}

#[test]
fn two_passes_are_byte_identical() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs, ScriptedConsole::default(), ConfirmPolicy::AssumeYes);
    let choices = UserChoices::default();

    service.generate(&choices).unwrap();
    let first = fs.snapshot();
    service.generate(&choices).unwrap();

    assert_eq!(first, fs.snapshot());
}

#[test]
fn disabled_toggles_skip_without_prompting() {
    let fs = MemoryFilesystem::new();
    let console = ScriptedConsole::new(std::iter::repeat_n(true, 64));
    memory_service(&fs, console.clone(), ConfirmPolicy::Prompt)
        .generate(&UserChoices::minimal())
        .unwrap();

    let questions = console.questions();
    assert!(questions.contains(&"Generate init.vim?".to_string()));
    assert!(!questions.contains(&"Generate vista.vim?".to_string()));
    assert!(console.notices().contains(&Notice::Skipped {
        name: "vista.vim".into()
    }));
    assert!(fs.read_file(&Path::new(CONFIG).join("modules/database.toml")).is_none());
}

#[test]
fn gated_groups_write_without_asking() {
    let fs = MemoryFilesystem::new();
    let console = ScriptedConsole::new(std::iter::repeat_n(true, 64));
    let choices = UserChoices {
        database: true,
        ..UserChoices::minimal()
    };
    memory_service(&fs, console.clone(), ConfirmPolicy::Prompt)
        .generate(&choices)
        .unwrap();

    assert!(!console.questions().iter().any(|q| q.contains("database")));
    assert!(read(&fs, "modules/database.toml").contains("vim-dadbod"));
}

#[test]
fn declined_confirmation_skips_only_that_group() {
    let choices = UserChoices {
        outline: true,
        ..UserChoices::minimal()
    };

    // First pass learns the question order.
    let asker = ScriptedConsole::new(std::iter::repeat_n(true, 64));
    memory_service(&MemoryFilesystem::new(), asker.clone(), ConfirmPolicy::Prompt)
        .generate(&choices)
        .unwrap();
    let questions = asker.questions();
    let vista = questions
        .iter()
        .position(|q| q == "Generate vista.vim?")
        .unwrap();

    let answers: Vec<bool> = (0..questions.len()).map(|i| i != vista).collect();
    let fs = MemoryFilesystem::new();
    let console = ScriptedConsole::new(answers);
    memory_service(&fs, console.clone(), ConfirmPolicy::Prompt)
        .generate(&choices)
        .unwrap();

    assert!(console.notices().contains(&Notice::Declined {
        name: "vista.vim".into()
    }));
    assert!(!read(&fs, "modules/program.toml").contains("liuchengxu/vista.vim"));
    assert!(fs.read_file(&Path::new(CONFIG).join("init.vim")).is_some());
    assert_eq!(console.remaining_answers(), 0);
}

#[test]
fn sealed_accumulator_rejects_late_contributions() {
    let service = memory_service(
        &MemoryFilesystem::new(),
        ScriptedConsole::default(),
        ConfirmPolicy::AssumeYes,
    );
    let generator = service.generator();
    let mut ctx = GenerationContext::new();

    generator.generate_completion(&mut ctx).unwrap();
    let err = generator
        .generate_language_plugins(&mut ctx, &["Rust".to_string()])
        .unwrap_err();

    assert!(matches!(
        err,
        VimkitError::Domain(DomainError::AccumulatorSealed { ref extension })
            if extension == "coc-rust-analyzer"
    ));
}

#[test]
fn local_filesystem_pass_writes_both_roots() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nvim");
    let cache = temp.path().join("cache");

    let service = GenerationService::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(AutoConsole::yes()),
        OutputLayout::new(&config, &cache),
        ConfirmPolicy::AssumeYes,
    );

    assert!(service.ensure_fresh().is_ok());
    let report = service.generate(&UserChoices::default()).unwrap();

    for target in &report.targets {
        let root = if *target == TargetFile::ThemeCache { &cache } else { &config };
        assert!(root.join(target.as_str()).is_file(), "{target} missing");
    }
    assert!(service.ensure_fresh().is_err());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(config.join("install.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_ne!(mode & 0o111, 0);
    }
}

#[test]
fn overlay_entries_flow_into_output() {
    let mut overlay = CatalogOverlay::default();
    overlay
        .tables
        .entry(OptionTable::Languages)
        .or_default()
        .insert("Zig".into(), "\n[[plugins]]\nrepo = 'ziglang/zig.vim'\n".into());
    overlay
        .extensions
        .insert("Zig".into(), ExtensionSet::single("coc-zls"));

    let fs = MemoryFilesystem::new();
    let service = GenerationService::new(
        Box::new(OverlayCatalog::new(overlay)),
        Box::new(fs.clone()),
        Box::new(ScriptedConsole::default()),
        OutputLayout::new(CONFIG, CACHE),
        ConfirmPolicy::AssumeYes,
    );
    let report = service.generate(&minimal_with(&["Zig", "Rust"])).unwrap();

    assert!(read(&fs, "modules/languages.toml").contains("ziglang/zig.vim"));
    assert_eq!(report.extensions, vec!["coc-zls", "coc-rust-analyzer"]);
}
