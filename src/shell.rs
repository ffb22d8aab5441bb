//! Shell wrapper generation
//!
//! A child process cannot change its parent's directory, so both tools
//! are wired into the shell through a function that captures their
//! stdout and `cd`s when it names somewhere new. The shell-init
//! binaries print these functions for `eval`.

use std::env;
use std::path::{Path, PathBuf};

/// Locate the sibling binary `name` next to the current executable.
///
/// Falls back to the bare name, which `command` resolves via `$PATH`.
pub fn sibling_binary(name: &str) -> PathBuf {
    match env::current_exe() {
        Ok(mut exe) => {
            exe.set_file_name(name);
            exe
        }
        Err(_) => PathBuf::from(name),
    }
}

/// Render the resolver wrapper function.
///
/// The `$PWD` comparison keeps failed resolutions in place: on failure
/// the resolver echoes the current directory, so the guard sees no
/// change and skips the `cd`.
pub fn resolver_function(
    func_name: &str,
    resolver: &Path,
    code_root: &Path,
    git_opts: Option<&str>,
    cd_command: &str,
) -> String {
    let git_opts = match git_opts {
        Some(opts) if !opts.is_empty() => format!(" {opts}"),
        _ => String::new(),
    };
    format!(
        r#"{func_name}() {{
  _h_dir=$(command {resolver} --resolve "{root}"{git_opts} "$@")
  _h_ret=$?
  [ "$_h_dir" != "$PWD" ] && {cd_command} "$_h_dir"
  return $_h_ret
}}
"#,
        resolver = resolver.display(),
        root = code_root.display(),
    )
}

/// Render the `up` wrapper function.
pub fn ascend_function(runner: &Path, cd_command: &str) -> String {
    format!(
        r#"up() {{
  _up_dir=$(command {runner} "$@")
  if [ $? = 0 ]; then
    [ "$_up_dir" != "$PWD" ] && {cd_command} "$_up_dir"
  fi
}}
"#,
        runner = runner.display(),
    )
}
