use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wka::commands::{self, CommandKind, Context};
use wka::core::Config;

struct Sandbox {
    _dir: TempDir,
    home: PathBuf,
    data: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        let data = dir.path().join("data");
        fs::create_dir_all(home.join("Workspace")).unwrap();
        Self {
            _dir: dir,
            home,
            data,
        }
    }

    fn context_in(&self, cwd: &Path) -> Context {
        let config = Config::with_paths(self.data.clone(), self.home.clone());
        Context::new(config, cwd.to_path_buf())
    }

    fn workspace(&self, project: &str) -> PathBuf {
        self.home.join("Workspace").join(project)
    }

    fn alias_file(&self) -> PathBuf {
        self.data.join("aliases.sh")
    }

    fn run(&self, cwd: &Path, kind: CommandKind) -> String {
        colored::control::set_override(false);
        let ctx = self.context_in(cwd);
        let mut out = Vec::new();
        commands::execute(kind, &ctx, &mut out).expect("command should succeed");
        String::from_utf8(out).unwrap()
    }

    fn aliases(&self) -> String {
        fs::read_to_string(self.alias_file()).unwrap()
    }
}

fn add(name: &str) -> CommandKind {
    CommandKind::Add(Some(name.to_string()))
}

#[test]
fn test_add_runs_setup_on_first_use() {
    let sandbox = Sandbox::new();
    let cwd = sandbox.workspace("app");

    let output = sandbox.run(&cwd, add("app"));

    assert!(output.contains("No file found"));
    assert!(output.contains("✓ Alias 'wk-app'"));
    assert!(sandbox.data.join("metadata.json").exists());

    let expected = format!("# wka-aliases v1\nalias wk-app='{}'\n", cwd.display());
    assert_eq!(sandbox.aliases(), expected);
}

#[test]
fn test_add_without_name_aborts() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&sandbox.workspace("app"), CommandKind::Add(None));

    assert!(output.contains("Please add new alias"));
    assert!(!sandbox.alias_file().exists());
}

#[test]
fn test_add_twice_is_rejected() {
    let sandbox = Sandbox::new();
    let cwd = sandbox.workspace("app");

    sandbox.run(&cwd, add("app"));
    let before = sandbox.aliases();
    let output = sandbox.run(&cwd, add("app"));

    assert!(output.contains("Alias already exist"));
    assert_eq!(sandbox.aliases(), before);
}

#[test]
fn test_add_outside_registry_has_no_prefix() {
    let sandbox = Sandbox::new();
    let cwd = sandbox.workspace("app").join("src");

    sandbox.run(&cwd, add("src"));

    assert!(sandbox
        .aliases()
        .ends_with(&format!("alias src='{}'\n", cwd.display())));
}

#[test]
fn test_add_same_name_elsewhere_warns() {
    let sandbox = Sandbox::new();
    sandbox.run(&sandbox.workspace("one"), add("app"));

    let output = sandbox.run(&sandbox.workspace("two"), add("app"));

    assert!(output.contains("already pointed at"));
    assert_eq!(sandbox.aliases().matches("alias wk-app=").count(), 2);
}

#[test]
fn test_list_empty_file() {
    let sandbox = Sandbox::new();
    let cwd = sandbox.workspace("app");
    sandbox.run(&cwd, CommandKind::Setup);

    let output = sandbox.run(&cwd, CommandKind::List);

    assert!(output.contains("No alias found"));
    assert!(!output.contains("1."));
    assert!(output.contains("Usage: wka [options]"));
}

#[test]
fn test_list_enumerates_in_file_order() {
    let sandbox = Sandbox::new();
    fs::create_dir_all(&sandbox.data).unwrap();
    fs::write(
        sandbox.alias_file(),
        "alias wk-b='/w/b'\nalias pr-a='/p/a'\n\nalias dl-c='/d/c'\n",
    )
    .unwrap();

    let output = sandbox.run(&sandbox.home, CommandKind::List);

    assert!(output.contains("List of alias:"));
    let entries: Vec<_> = output
        .lines()
        .filter(|line| line.contains(" -> "))
        .collect();
    assert_eq!(
        entries,
        vec!["1. wk-b -> /w/b", "2. pr-a -> /p/a", "3. dl-c -> /d/c"]
    );
}

#[test]
fn test_list_reports_malformed_lines() {
    let sandbox = Sandbox::new();
    fs::create_dir_all(&sandbox.data).unwrap();
    fs::write(sandbox.alias_file(), "alias wk-b='/w/b'\nalias broken\n").unwrap();

    let output = sandbox.run(&sandbox.home, CommandKind::List);

    assert!(output.contains("Skipping malformed line 2: alias broken"));
    assert!(output.contains("1. wk-b -> /w/b"));
    assert!(!output.contains("2. "));
}

#[test]
fn test_remove_present_token() {
    let sandbox = Sandbox::new();
    fs::create_dir_all(&sandbox.data).unwrap();
    fs::write(sandbox.alias_file(), "alias wk-foo='/home/u/Workspace'\n").unwrap();

    let output = sandbox.run(&sandbox.home, CommandKind::Remove(Some("wk-foo".to_string())));

    assert!(output.contains("✓ Removed alias wk-foo='/home/u/Workspace'"));
    assert_eq!(sandbox.aliases(), "");
}

#[test]
fn test_remove_absent_token() {
    let sandbox = Sandbox::new();
    fs::create_dir_all(&sandbox.data).unwrap();
    fs::write(sandbox.alias_file(), "alias wk-foo='/w/foo'\n").unwrap();

    let output = sandbox.run(&sandbox.home, CommandKind::Remove(Some("pr-bar".to_string())));

    assert!(output.contains("No alias matches 'pr-bar'"));
    assert_eq!(sandbox.aliases(), "alias wk-foo='/w/foo'\n");
}

#[test]
fn test_remove_without_token() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&sandbox.home, CommandKind::Remove(None));

    assert!(output.contains("Please provide valid arguments"));
}

#[test]
fn test_remove_takes_first_line_containing_token() {
    let sandbox = Sandbox::new();
    fs::create_dir_all(&sandbox.data).unwrap();
    fs::write(
        sandbox.alias_file(),
        "alias wk-foobar='/w/foobar'\nalias wk-foo='/w/foo'\n",
    )
    .unwrap();

    let output = sandbox.run(&sandbox.home, CommandKind::Remove(Some("wk-foo".to_string())));

    assert!(output.contains("✓ Removed alias wk-foobar='/w/foobar'"));
    assert_eq!(sandbox.aliases(), "alias wk-foo='/w/foo'\n");
}

#[test]
fn test_add_dash_edged_name_outside_registry_is_refused() {
    colored::control::set_override(false);
    let sandbox = Sandbox::new();
    let cwd = sandbox.home.parent().unwrap().join("opt").join("tool");
    let ctx = sandbox.context_in(&cwd);

    for name in ["tool-", "-tool"] {
        let mut out = Vec::new();
        let result = commands::execute(add(name), &ctx, &mut out);
        assert!(result.is_err(), "{:?} should be refused", name);
    }

    assert!(!sandbox.aliases().contains("tool"));
    let output = sandbox.run(&cwd, CommandKind::List);
    assert!(!output.contains("Skipping malformed line"));
}

#[test]
fn test_edit_points_alias_at_current_directory() {
    let sandbox = Sandbox::new();
    sandbox.run(&sandbox.workspace("old"), add("app"));

    let new_dir = sandbox.workspace("new");
    let output = sandbox.run(&new_dir, CommandKind::Edit(Some("wk-app".to_string())));

    assert!(output.contains("now points to"));
    assert!(sandbox
        .aliases()
        .contains(&format!("alias wk-app='{}'", new_dir.display())));
    assert!(!sandbox.aliases().contains("Workspace/old"));
}

#[test]
fn test_edit_unknown_alias() {
    let sandbox = Sandbox::new();
    sandbox.run(&sandbox.home, CommandKind::Setup);

    let output = sandbox.run(&sandbox.home, CommandKind::Edit(Some("wk-none".to_string())));

    assert!(output.contains("No alias matches 'wk-none'"));
}

#[test]
fn test_setup_keeps_existing_aliases() {
    let sandbox = Sandbox::new();
    let cwd = sandbox.workspace("app");
    sandbox.run(&cwd, add("app"));
    let before = sandbox.aliases();

    let output = sandbox.run(&cwd, CommandKind::Setup);

    assert!(output.contains("Alias file already exists"));
    assert!(output.contains("source '"));
    assert_eq!(sandbox.aliases(), before);
}

#[test]
fn test_category_counts_aliases_per_prefix() {
    let sandbox = Sandbox::new();
    sandbox.run(&sandbox.workspace("a"), add("a"));
    sandbox.run(&sandbox.workspace("b"), add("b"));

    let output = sandbox.run(&sandbox.home, CommandKind::Category);

    assert!(output.contains("List of category:"));
    let workspace_line = output
        .lines()
        .find(|line| line.trim_start().starts_with("wk "))
        .expect("workspace row");
    assert!(workspace_line.contains("(2 alias)"));
    assert!(output.contains("research"));
}

#[test]
fn test_category_without_alias_file() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&sandbox.home, CommandKind::Category);

    assert!(output.contains("(0 alias)"));
    assert!(!sandbox.alias_file().exists());
}

#[test]
fn test_help_lists_every_command() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&sandbox.home, CommandKind::Help);

    assert!(output.contains("Options:"));
    assert!(output.contains(" --help -h => Show help"));
    assert!(output.contains(" --add -a <name> => "));
    assert!(output.contains(" --test -t [msg] => Test"));
    assert!(output.contains("Examples:"));
    assert!(output.contains("CopyRight ©"));
}

#[test]
fn test_version_line() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&sandbox.home, CommandKind::Version);

    assert!(output.contains(&format!("CLI wka: {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_test_command_echoes_message() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&sandbox.home, CommandKind::Test(Some("hello".to_string())));

    assert!(output.contains("output: hello"));
}

#[test]
fn test_test_command_reports_resolution() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&sandbox.workspace("app"), CommandKind::Test(None));

    assert!(output.contains("output: prefix wk (workspace, work)"));
    assert!(output.contains("output: set up false"));
}
