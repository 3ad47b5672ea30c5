use super::provider::GitProvider;
use anyhow::Result;
use std::sync::Mutex;

/// Scripted [`GitProvider`] for tests. Mutating operations are appended
/// to `call_log` so tests can assert invocation order.
#[derive(Default)]
pub struct MockGitProvider {
    pub current: String,
    pub recent: Vec<String>,
    pub branches: Vec<String>,
    pub dirty: bool,
    pub stash_result: Mutex<Option<Result<()>>>,
    pub checkout_result: Mutex<Option<Result<()>>>,
    pub call_log: Mutex<Vec<String>>,
}

impl GitProvider for MockGitProvider {
    fn current_branch(&self) -> String {
        self.current.clone()
    }

    fn recent_checkout_targets(&self) -> Vec<String> {
        self.recent.clone()
    }

    fn list_branches(&self) -> Vec<String> {
        self.branches.clone()
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn stash(&self) -> Result<()> {
        self.call_log.lock().unwrap().push("stash".to_string());
        self.stash_result.lock().unwrap().take().unwrap_or(Ok(()))
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.call_log
            .lock()
            .unwrap()
            .push(format!("checkout:{branch}"));
        self.checkout_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(()))
    }
}
