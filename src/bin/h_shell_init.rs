//! `h-shell-init` - print the shell function that hooks `h` into the
//! shell.
//!
//! Meant to be evaluated from a shell profile:
//! `eval "$(h-shell-init)"`.

use clap::Parser;

use h::fsutil::expand_tilde;
use h::shell;

/// Print the h() shell function for your profile.
#[derive(Parser, Debug)]
#[command(
    name = "h-shell-init",
    version,
    about,
    long_about = "Print a POSIX shell function that resolves a search term with `h`\n\
and changes into the resulting directory.\n\n\
Examples:\n\
  eval \"$(h-shell-init)\"\n\
  eval \"$(h-shell-init --pushd ~/code)\"\n\
  eval \"$(h-shell-init --name g --git-opts \"--depth 1\")\"\n"
)]
struct Cli {
    /// Navigate with pushd instead of cd.
    #[arg(long)]
    pushd: bool,

    /// Name of the generated shell function.
    #[arg(long, value_name = "NAME", default_value = "h")]
    name: String,

    /// git clone options baked into every invocation.
    #[arg(long, value_name = "OPTIONS")]
    git_opts: Option<String>,

    /// Base directory for resolved and cloned projects.
    #[arg(value_name = "CODE_ROOT", env = "H_CODE_ROOT", default_value = "~/src")]
    code_root: String,
}

fn main() {
    let cli = Cli::parse();

    let code_root = expand_tilde(&cli.code_root);
    let resolver = shell::sibling_binary("h");
    let cd_command = if cli.pushd { "pushd" } else { "cd" };

    print!(
        "{}",
        shell::resolver_function(
            &cli.name,
            &resolver,
            &code_root,
            cli.git_opts.as_deref(),
            cd_command,
        )
    );
}
