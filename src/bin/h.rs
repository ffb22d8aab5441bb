//! `h` - resolve a search term to a project directory.
//!
//! Invoked by the shell function printed by `h-shell-init`. Prints
//! exactly one line on stdout: the resolved directory on success, or the
//! current directory on failure so the wrapper's `cd` is a no-op. All
//! diagnostics go to stderr.

use std::process::ExitCode;

use clap::Parser;

use h::fsutil::{current_dir_lossy, expand_tilde};
use h::resolve::resolve;

const USAGE: &str = "Usage: h (<name> | <owner>/<repo> | <url>) [git opts]";
const NOT_INSTALLED: &str =
    "h is not installed\n\nUsage: eval \"$(h-shell-init [code-root])\"";

/// Shell-facing resolver. The interesting interface is the generated
/// shell function, not this binary; clap's own help stays disabled so
/// `-h` can flow through to the term position and the one-line stdout
/// contract holds on every exit path.
#[derive(Parser, Debug)]
#[command(name = "h", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Resolve mode, set by the generated shell function.
    #[arg(long)]
    resolve: bool,

    /// Code root the shell function was generated with.
    code_root: Option<String>,

    /// Name, owner/repo shorthand, URL, or SSH remote.
    #[arg(allow_hyphen_values = true)]
    term: Option<String>,

    /// Extra arguments handed to `git clone` verbatim.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    git_args: Vec<String>,
}

/// Echo the cwd for the wrapper, explain on stderr, exit 1.
fn fail(message: &str) -> ExitCode {
    println!("{}", current_dir_lossy());
    eprintln!("{message}");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    #[cfg(windows)]
    {
        eprintln!("Error: Windows is not supported.");
        return ExitCode::FAILURE;
    }

    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => return fail(USAGE),
    };

    if !cli.resolve {
        return fail(NOT_INSTALLED);
    }

    let (Some(code_root), Some(term)) = (cli.code_root, cli.term) else {
        return fail(USAGE);
    };

    if term == "-h" || term == "--help" {
        return fail(USAGE);
    }

    let code_root = expand_tilde(&code_root);

    match resolve(&code_root, &term, &cli.git_args) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", current_dir_lossy());
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
