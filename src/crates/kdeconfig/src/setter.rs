//! Read-write-read driver
//!
//! [`ConfigSetter::apply`] reads the current value, runs the writer, reads
//! the value again and reports whether it changed. The writer's exit status
//! is not inspected: a writer that fails without touching the file shows up
//! as `changed: false`, not as an error.

use crate::command::{base_command, strip_line_terminator, CommandRunner, SystemRunner};
use crate::config::ToolsConfig;
use crate::error::Result;
use crate::request::{validate_entry, ConfigRequest};
use crate::result::ConfigResult;
use std::path::Path;
use tracing::{debug, info, warn};

/// Applies [`ConfigRequest`]s through the external reader and writer
pub struct ConfigSetter<R = SystemRunner> {
    runner: R,
    tools: ToolsConfig,
}

impl ConfigSetter<SystemRunner> {
    /// Setter running real processes with the given tools
    pub fn new(tools: ToolsConfig) -> Self {
        Self::with_runner(SystemRunner, tools)
    }
}

impl<R: CommandRunner> ConfigSetter<R> {
    pub fn with_runner(runner: R, tools: ToolsConfig) -> Self {
        Self { runner, tools }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Command line the reader is invoked with
    pub fn read_command(&self, file: &Path, groups: &[String], key: &str) -> Result<Vec<String>> {
        let binary = self.runner.resolve(&self.tools.read_binary)?;
        Ok(base_command(&binary, file, groups, key))
    }

    /// Command line the writer is invoked with for `request`
    pub fn write_command(&self, request: &ConfigRequest) -> Result<Vec<String>> {
        let binary = self.runner.resolve(&self.tools.write_binary)?;
        let mut cmd = base_command(&binary, &request.file, &request.groups, &request.key);
        cmd.extend(request.mutation.write_args());
        Ok(cmd)
    }

    /// Current value of a key, empty if absent
    pub fn read(&self, file: &Path, groups: &[String], key: &str) -> Result<String> {
        validate_entry(file, groups, key)?;
        let cmd = self.read_command(file, groups, key)?;
        self.run_read(&cmd)
    }

    fn run_read(&self, cmd: &[String]) -> Result<String> {
        let output = self.runner.run(cmd)?;
        if !output.success() {
            debug!(status = ?output.status, stderr = %output.stderr.trim_end(), "Reader exited unsuccessfully");
        }
        Ok(strip_line_terminator(&output.stdout).to_string())
    }

    /// Apply `request`: read, write, read back, compare
    pub fn apply(&self, request: &ConfigRequest) -> Result<ConfigResult> {
        let read_cmd = self.read_command(&request.file, &request.groups, &request.key)?;
        let old_value = self.run_read(&read_cmd)?;
        debug!(key = %request.key, old_value = %old_value, "Read current value");

        let write_cmd = self.write_command(request)?;
        let output = self.runner.run(&write_cmd)?;
        if !output.success() {
            warn!(
                status = ?output.status,
                stderr = %output.stderr.trim_end(),
                cmd = ?write_cmd,
                "Writer exited unsuccessfully, relying on read-back comparison"
            );
        }

        let new_value = self.run_read(&read_cmd)?;
        let changed = new_value != old_value;

        info!(
            file = %request.file.display(),
            groups = ?request.groups,
            key = %request.key,
            changed,
            "Applied configuration change"
        );

        Ok(ConfigResult {
            changed,
            cmd: write_cmd,
            value_new: changed.then_some(new_value),
        })
    }
}
