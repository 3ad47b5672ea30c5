pub mod cli;
pub mod mock;
pub mod provider;

pub use cli::CliGitProvider;
pub use provider::GitProvider;

/// Recency-ordered candidates are capped so the unfiltered list fits a
/// typical terminal without scrolling.
pub const RECENT_LIMIT: usize = 17;

/// Build the candidate list: distinct recent checkout targets (current
/// branch excluded, capped at [`RECENT_LIMIT`]), falling back to the full
/// branch list when there is no usable switch history. An empty result
/// means "no branches found" and is the caller's fatal case.
pub fn load_candidates(git: &dyn GitProvider) -> Vec<String> {
    let current = git.current_branch();

    let mut recent = Vec::new();
    for target in git.recent_checkout_targets() {
        if target.is_empty() || target == current || recent.contains(&target) {
            continue;
        }
        recent.push(target);
        if recent.len() == RECENT_LIMIT {
            break;
        }
    }

    if !recent.is_empty() {
        log::debug!("loaded {} branches from switch history", recent.len());
        return recent;
    }

    let fallback: Vec<String> = git
        .list_branches()
        .into_iter()
        .filter(|branch| !branch.is_empty() && *branch != current)
        .collect();
    log::debug!("no switch history; {} branches from fallback", fallback.len());
    fallback
}

/// Parse `git reflog show --pretty=format:%gs` output into checkout
/// target branch names, most-recent-first. A checkout subject reads
/// `checkout: moving from <src> to <dst>`; the target is the last
/// whitespace-delimited token.
pub fn parse_checkout_targets(reflog: &str) -> Vec<String> {
    reflog
        .lines()
        .filter(|line| line.contains("checkout:"))
        .filter_map(|line| line.split_whitespace().next_back())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{mock::MockGitProvider, *};

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_checkout_targets_basic() {
        let reflog = "\
checkout: moving from main to feature-x
commit: add thing
checkout: moving from feature-x to main
";
        assert_eq!(
            parse_checkout_targets(reflog),
            vec!["feature-x".to_string(), "main".to_string()]
        );
    }

    #[test]
    fn test_parse_checkout_targets_ignores_other_subjects() {
        let reflog = "commit: msg\nrebase (finish): returning to refs/heads/main\n";
        assert!(parse_checkout_targets(reflog).is_empty());
    }

    #[test]
    fn test_parse_checkout_targets_empty_input() {
        assert!(parse_checkout_targets("").is_empty());
    }

    #[test]
    fn test_load_prefers_recency_order() {
        let git = MockGitProvider {
            current: "main".to_string(),
            recent: names(&["feature-b", "feature-a", "hotfix"]),
            branches: names(&["alpha", "beta"]),
            ..Default::default()
        };
        assert_eq!(
            load_candidates(&git),
            names(&["feature-b", "feature-a", "hotfix"])
        );
    }

    #[test]
    fn test_load_excludes_current_and_deduplicates() {
        let git = MockGitProvider {
            current: "main".to_string(),
            recent: names(&["main", "feature-a", "main", "feature-a", "hotfix"]),
            ..Default::default()
        };
        assert_eq!(load_candidates(&git), names(&["feature-a", "hotfix"]));
    }

    #[test]
    fn test_load_caps_history_at_limit() {
        let recent: Vec<String> = (0..40).map(|i| format!("branch-{i}")).collect();
        let git = MockGitProvider {
            current: "main".to_string(),
            recent,
            ..Default::default()
        };
        let candidates = load_candidates(&git);
        assert_eq!(candidates.len(), RECENT_LIMIT);
        assert_eq!(candidates[0], "branch-0");
        assert_eq!(candidates[RECENT_LIMIT - 1], "branch-16");
    }

    #[test]
    fn test_load_falls_back_to_branch_list() {
        let git = MockGitProvider {
            current: "main".to_string(),
            branches: names(&["alpha", "beta", "main"]),
            ..Default::default()
        };
        assert_eq!(load_candidates(&git), names(&["alpha", "beta"]));
    }

    #[test]
    fn test_load_history_of_only_current_branch_falls_back() {
        let git = MockGitProvider {
            current: "main".to_string(),
            recent: names(&["main", "main"]),
            branches: names(&["main", "dev"]),
            ..Default::default()
        };
        assert_eq!(load_candidates(&git), names(&["dev"]));
    }

    #[test]
    fn test_load_everything_empty_yields_empty() {
        let git = MockGitProvider::default();
        assert!(load_candidates(&git).is_empty());
    }
}
