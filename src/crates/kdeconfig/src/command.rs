//! External command execution
//!
//! Everything that touches a subprocess goes through [`CommandRunner`], so
//! the setter can be driven by a scripted runner in tests.

use crate::error::{KdeConfigError, Result};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs an argument vector and captures its output
pub trait CommandRunner {
    /// Run `argv[0]` with the remaining arguments, blocking until it exits
    ///
    /// A non-zero exit status is returned as output, not as an error.
    fn run(&self, argv: &[String]) -> Result<CommandOutput>;

    /// Locate `name` the way a shell would
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        resolve_binary(name)
    }
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| KdeConfigError::InvalidRequest("empty command line".to_string()))?;

        debug!(program = %program, args = ?args, "Running command");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| KdeConfigError::CommandExecution {
                program: program.clone(),
                source,
            })?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(
            program = %program,
            status = ?result.status,
            stdout = %result.stdout.trim_end(),
            stderr = %result.stderr.trim_end(),
            "Command finished"
        );

        Ok(result)
    }
}

/// Locate an executable
///
/// A name containing a path separator is checked as-is; anything else is
/// searched for in every `PATH` entry.
pub fn resolve_binary(name: &str) -> Result<PathBuf> {
    let search_path = env::var_os("PATH").unwrap_or_default();
    resolve_binary_in(name, &search_path)
}

/// Locate an executable using an explicit search path
pub fn resolve_binary_in(name: &str, search_path: &OsString) -> Result<PathBuf> {
    let missing = || KdeConfigError::ExternalToolMissing {
        binary: name.to_string(),
        search_path: search_path.to_string_lossy().into_owned(),
    };

    if name.is_empty() {
        return Err(missing());
    }

    let candidate = Path::new(name);
    if candidate.components().count() > 1 || candidate.is_absolute() {
        return if is_executable(candidate) {
            Ok(candidate.to_path_buf())
        } else {
            Err(missing())
        };
    }

    env::split_paths(search_path)
        .map(|dir| dir.join(name))
        .find(|path| is_executable(path))
        .ok_or_else(missing)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Build `<binary> --file <file> (--group <g>)* --key <key>`
pub fn base_command(binary: &Path, file: &Path, groups: &[String], key: &str) -> Vec<String> {
    let mut cmd = Vec::with_capacity(4 + groups.len() * 2);
    cmd.push(binary.to_string_lossy().into_owned());
    cmd.push("--file".to_string());
    cmd.push(file.to_string_lossy().into_owned());
    for group in groups {
        cmd.push("--group".to_string());
        cmd.push(group.clone());
    }
    cmd.push("--key".to_string());
    cmd.push(key.to_string());
    cmd
}

/// Remove one trailing `\n` (or `\r\n`) from reader output
pub fn strip_line_terminator(output: &str) -> &str {
    output
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(output)
}
