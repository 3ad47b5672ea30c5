pub mod git;
pub mod selector;

// Re-export commonly used types at crate root
pub use git::{CliGitProvider, GitProvider, load_candidates};
pub use selector::{Selector, SelectorEvent, Step};
