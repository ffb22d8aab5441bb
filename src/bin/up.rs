//! `up` - print the nearest enclosing project root.
//!
//! Like the resolver, prints exactly one line on stdout so the wrapper
//! from `up-shell-init` can capture it; with nothing to climb to it
//! prints the current directory and the wrapper stays put.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use h::ascend::ascend;
use h::fsutil::current_dir_lossy;

const NOT_INSTALLED: &str =
    "up is not installed\n\nUsage: eval \"$(up-shell-init [--pushd])\"";

fn main() -> ExitCode {
    if let Some(first) = env::args().nth(1) {
        if first == "-h" || first == "--help" {
            println!("{}", current_dir_lossy());
            eprintln!("{NOT_INSTALLED}");
            return ExitCode::FAILURE;
        }
    }

    let cwd = match env::var("PWD") {
        Ok(pwd) if !pwd.is_empty() => PathBuf::from(pwd),
        _ => match env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                eprintln!("up: {err}");
                return ExitCode::FAILURE;
            }
        },
    };

    match ascend(&cwd) {
        Some(dir) => println!("{}", dir.display()),
        None => println!("{}", cwd.display()),
    }
    ExitCode::SUCCESS
}
