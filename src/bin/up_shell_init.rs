//! `up-shell-init` - print the up() wrapper for a shell profile.

use clap::Parser;

use h::shell;

/// Print the up() shell function for your profile.
#[derive(Parser, Debug)]
#[command(
    name = "up-shell-init",
    version,
    about,
    long_about = "Print a POSIX shell function that jumps to the nearest enclosing\n\
project root (a directory with .git, .hg, .envrc or a Gemfile).\n\n\
Example:\n\
  eval \"$(up-shell-init --pushd)\"\n"
)]
struct Cli {
    /// Navigate with pushd instead of cd.
    #[arg(long)]
    pushd: bool,
}

fn main() {
    let cli = Cli::parse();

    let runner = shell::sibling_binary("up");
    let cd_command = if cli.pushd { "pushd" } else { "cd" };

    print!("{}", shell::ascend_function(&runner, cd_command));
}
