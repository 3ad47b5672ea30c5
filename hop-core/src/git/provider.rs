use anyhow::Result;

/// The narrow contract hop needs from the version-control tool. Read
/// queries report "nothing" on failure; the two mutating operations
/// surface their failure to the caller.
pub trait GitProvider: Send + Sync {
    /// Name of the currently checked-out branch; empty on failure or
    /// detached HEAD.
    fn current_branch(&self) -> String;

    /// Branch names mentioned as checkout targets in the reflog,
    /// most-recent-first. May contain duplicates and the current branch;
    /// the caller deduplicates and excludes.
    fn recent_checkout_targets(&self) -> Vec<String>;

    /// All local branch names, repository order (fallback enumeration).
    fn list_branches(&self) -> Vec<String>;

    /// True iff there are modified tracked files.
    fn is_dirty(&self) -> bool;

    fn stash(&self) -> Result<()>;

    fn checkout(&self, branch: &str) -> Result<()>;
}
