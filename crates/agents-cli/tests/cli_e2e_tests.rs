//! CLI end-to-end tests that invoke the compiled `agents-sync` binary
//! against a temporary source/home pair.

use agents_test_utils::TestProject;
use assert_cmd::Command;
use predicates::prelude::*;

fn agents_sync() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_agents-sync"));
    cmd.env_remove("AGENTS_SYNC_SOURCE")
        .env_remove("AGENTS_SYNC_HOME")
        .env_remove("RUST_LOG");
    cmd
}

fn sync_project(project: &TestProject) -> Command {
    let mut cmd = agents_sync();
    cmd.arg("--source")
        .arg(project.source())
        .arg("--home")
        .arg(project.home())
        .args(["--color", "never"]);
    cmd
}

#[test]
fn help_exits_zero() {
    agents_sync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("--home"));
}

#[test]
fn version_flag() {
    agents_sync()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("agents-sync"));
}

#[test]
fn first_run_reports_changes() {
    let project = TestProject::new()
        .with_agents_md("# Rules")
        .with_doc("style.md", "tabs")
        .with_settings(r#"{"permissions": {"allow": ["read"]}}"#);

    sync_project(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Coding agents configuration sync tool"))
        .stdout(predicate::str::contains("Syncing AGENTS.md to central location"))
        .stdout(predicate::str::contains("Syncing permissions from settings.json"))
        .stdout(predicate::str::contains("Setting up symlinks..."))
        .stdout(predicate::str::contains("Change Detection Report"))
        .stdout(predicate::str::contains("│ ✓      │ docs    │ settings.json  │"))
        .stdout(predicate::str::contains("✓ Changes were applied successfully"))
        .stdout(predicate::str::contains("\u{1b}[").not());

    project
        .tree()
        .assert_file_contains("home/.connect0459/coding-agents/AGENTS.md", "# Rules");
}

#[test]
fn second_run_marks_docs_unchanged() {
    let project = TestProject::new()
        .with_agents_md("# Rules")
        .with_doc("style.md", "tabs");

    sync_project(&project).assert().success();
    sync_project(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("│ -      │ docs    │ AGENTS.md      │"))
        .stdout(predicate::str::contains("│ -      │ docs    │ agent-docs/    │"))
        .stdout(predicate::str::contains("│ ✓      │ symlink │ Claude         │"));
}

#[test]
fn settings_step_skipped_without_source_settings() {
    let project = TestProject::new().with_agents_md("# Rules");

    sync_project(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Syncing permissions").not())
        .stdout(predicate::str::contains("settings.json").not());
}

#[test]
fn missing_agents_md_exits_one() {
    let project = TestProject::new().with_doc("style.md", "tabs");

    sync_project(&project)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to copy AGENTS.md"))
        .stdout(predicate::str::contains("Change Detection Report").not());
}

#[test]
fn invalid_source_settings_exit_one() {
    let project = TestProject::new()
        .with_agents_md("# Rules")
        .with_settings("not json");

    sync_project(&project)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to merge permissions"));
}

#[test]
fn environment_supplies_directories() {
    let project = TestProject::new().with_agents_md("# Env");

    agents_sync()
        .env("AGENTS_SYNC_SOURCE", project.source())
        .env("AGENTS_SYNC_HOME", project.home())
        .args(["--color", "never"])
        .assert()
        .success();

    project
        .tree()
        .assert_file_contains("home/.connect0459/coding-agents/AGENTS.md", "# Env");
}
