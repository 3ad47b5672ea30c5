use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

fn hop_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hop"))
}

fn init_test_repo(dir: &Path) {
    for args in [
        vec!["init", "-b", "main"],
        vec!["config", "user.email", "test@test.com"],
        vec!["config", "user.name", "Test"],
    ] {
        Command::new("git")
            .args(&args)
            .current_dir(dir)
            .output()
            .unwrap();
    }
    fs::write(dir.join("README.md"), "# test").unwrap();
    Command::new("git")
        .args(["add", "."])
        .current_dir(dir)
        .output()
        .unwrap();
    Command::new("git")
        .args(["commit", "-m", "init"])
        .current_dir(dir)
        .output()
        .unwrap();
}

fn run_hop(dir: &Path, cache: &Path) -> std::process::Output {
    Command::new(hop_binary())
        .current_dir(dir)
        .env("XDG_CACHE_HOME", cache)
        .output()
        .unwrap()
}

#[test]
fn exits_with_status_1_outside_a_repository() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_hop(tmp.path(), tmp.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No branches found."), "stderr: {stderr}");
}

#[test]
fn exits_with_status_1_when_only_the_current_branch_exists() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    fs::create_dir_all(&repo).unwrap();
    init_test_repo(&repo);

    // One branch, and it is checked out: nothing to switch to.
    let output = run_hop(&repo, tmp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No branches found."));
}

#[test]
fn help_and_version_work() {
    for flag in ["--help", "--version"] {
        let output = Command::new(hop_binary()).arg(flag).output().unwrap();
        assert!(output.status.success(), "{flag} failed");
    }
}
