use super::{parse_checkout_targets, provider::GitProvider};
use anyhow::Result;
use std::{
    path::{Path, PathBuf},
    process::Command,
};

/// [`GitProvider`] that shells out to the `git` binary in a fixed
/// working directory.
pub struct CliGitProvider {
    cwd: PathBuf,
}

impl CliGitProvider {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Run git and return trimmed stdout, or `None` on spawn failure or
    /// non-zero exit. Read queries treat both the same way (empty).
    fn git_stdout(&self, args: &[&str]) -> Option<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.cwd)
            .output();

        let Ok(output) = output else {
            return None;
        };
        if !output.status.success() {
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn git_run(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.cwd)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git {} failed: {}", args[0], stderr.trim());
        }

        Ok(())
    }
}

impl GitProvider for CliGitProvider {
    fn current_branch(&self) -> String {
        self.git_stdout(&["branch", "--show-current"])
            .unwrap_or_default()
    }

    fn recent_checkout_targets(&self) -> Vec<String> {
        let Some(reflog) = self.git_stdout(&["reflog", "show", "--pretty=format:%gs"]) else {
            return Vec::new();
        };
        parse_checkout_targets(&reflog)
    }

    fn list_branches(&self) -> Vec<String> {
        let Some(out) = self.git_stdout(&["branch", "--format=%(refname:short)"]) else {
            return Vec::new();
        };
        out.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    fn is_dirty(&self) -> bool {
        let Some(status) = self.git_stdout(&["status", "--porcelain=v1"]) else {
            return false;
        };
        // XY status code in the first two columns; an M in either column
        // is a modified tracked file.
        status
            .lines()
            .any(|line| line.chars().take(2).any(|c| c == 'M'))
    }

    fn stash(&self) -> Result<()> {
        self.git_run(&["stash"])
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.git_run(&["checkout", branch])
    }
}
