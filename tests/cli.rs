use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cpup() -> Command {
    let mut cmd = Command::cargo_bin("cpup").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_path_exits_with_one() {
    let dir = tempdir().unwrap();
    cpup()
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn directory_without_manifest_exits_with_one() {
    let dir = tempdir().unwrap();
    cpup()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config.xml"));
}

#[cfg(unix)]
mod with_fake_tools {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn no_subprocess_runs_without_manifest() {
        let tools = tempdir().unwrap();
        let project = tempdir().unwrap();
        let marker = tools.path().join("ran");
        let cordova = script(
            tools.path(),
            "cordova",
            &format!("touch '{}'", marker.display()),
        );

        cpup()
            .arg(project.path())
            .env("CPUP_CORDOVA_BIN", &cordova)
            .env("CPUP_NPM_BIN", &cordova)
            .assert()
            .code(1);

        assert!(!marker.exists());
    }

    #[test]
    fn up_to_date_project_exits_cleanly() {
        let tools = tempdir().unwrap();
        let project = tempdir().unwrap();
        fs::write(project.path().join("config.xml"), "<widget/>").unwrap();

        let cordova = script(
            tools.path(),
            "cordova",
            "echo 'cordova-plugin-device 2.1.0 \"Device\"'",
        );
        let npm = script(tools.path(), "npm", "echo 2.1.0");

        cpup()
            .arg(project.path())
            .env("CPUP_CORDOVA_BIN", &cordova)
            .env("CPUP_NPM_BIN", &npm)
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("All plugins are up to date!"))
            .stdout(predicate::str::contains("[y/N]").not());
    }

    #[test]
    fn listing_failure_exits_with_one() {
        let tools = tempdir().unwrap();
        let project = tempdir().unwrap();
        fs::write(project.path().join("config.xml"), "<widget/>").unwrap();
        let cordova = script(tools.path(), "cordova", "echo 'no platforms' >&2; exit 2");

        cpup()
            .arg(project.path())
            .env("CPUP_CORDOVA_BIN", &cordova)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to list installed plugins"));
    }
}
