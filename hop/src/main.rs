mod logging;

use anyhow::Result;
use clap::Parser;
use hop_core::{CliGitProvider, GitProvider, Selector, load_candidates};
use hop_tui::Selection;
use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

#[derive(Parser)]
#[command(
    version,
    about = "Interactive git branch switcher biased toward recently used branches"
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    if let Err(error) = logging::setup_logging(logging::DEFAULT_LOG_LEVEL) {
        eprintln!("Warning: failed to initialise logging: {error}");
    }

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::from(2);
        }
    };
    let git = CliGitProvider::new(cwd);

    match run(&git) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(2)
        }
    }
}

fn run(git: &dyn GitProvider) -> Result<ExitCode> {
    let candidates = load_candidates(git);
    if candidates.is_empty() {
        // Fatal before anything interactive is drawn.
        eprintln!("No branches found.");
        return Ok(ExitCode::from(1));
    }

    let mut selector = Selector::new(candidates);
    let mut terminal = ratatui::init();
    let selection = hop_tui::run(&mut terminal, &mut selector);
    ratatui::restore();

    match selection? {
        Selection::Checkout(branch) => {
            let stdin = io::stdin();
            finalize_checkout(git, &branch, stdin.lock(), &mut io::stdout())?;
        }
        Selection::Cancelled => {}
    }
    Ok(ExitCode::SUCCESS)
}

/// Post-selection phase, after the terminal is restored: a blocking Y/n
/// stash prompt when the tree is dirty, then the checkout itself. Answer
/// `n` keeps the current branch; any other answer (including empty)
/// stashes first.
fn finalize_checkout(
    git: &dyn GitProvider,
    branch: &str,
    mut answers: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    if git.is_dirty() {
        writeln!(out, "Your working directory has uncommitted changes.")?;
        write!(out, "Stash changes before switching? (Y/n): ")?;
        out.flush()?;

        let mut answer = String::new();
        answers.read_line(&mut answer)?;
        if answer.trim().eq_ignore_ascii_case("n") {
            writeln!(out, "Branch switch aborted.")?;
            return Ok(());
        }
        git.stash()?;
    }

    git.checkout(branch)?;
    writeln!(out, "Switched to branch '{branch}'.")?;
    Ok(())
}
