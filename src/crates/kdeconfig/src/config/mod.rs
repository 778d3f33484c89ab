//! Tool selection
//!
//! Which reader and writer binaries to run. Sources are layered, later wins:
//!
//! 1. Defaults (`kreadconfig5`, `kwriteconfig5`)
//! 2. Environment (`KDECONFIG_READ_BIN`, `KDECONFIG_WRITE_BIN`)
//! 3. Explicit overrides, e.g. command-line flags
//!
//! # Example
//!
//! ```rust,no_run
//! use kdeconfig::config::ToolsConfig;
//!
//! let mut tools = ToolsConfig::from_env(ToolsConfig::ENV_PREFIX)?;
//! tools.merge(ToolsConfig::overrides(Some("kreadconfig6".into()), None));
//! tools.validate()?;
//! # Ok::<(), kdeconfig::KdeConfigError>(())
//! ```

mod env;

pub use env::{build_env_key, get_env, get_env_or};

use crate::error::{KdeConfigError, Result};
use serde::{Deserialize, Serialize};

/// Default reader binary
pub const DEFAULT_READ_BINARY: &str = "kreadconfig5";

/// Default writer binary
pub const DEFAULT_WRITE_BINARY: &str = "kwriteconfig5";

/// Reader and writer binaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Program printing the current value of a key
    pub read_binary: String,
    /// Program mutating a key
    pub write_binary: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            read_binary: DEFAULT_READ_BINARY.to_string(),
            write_binary: DEFAULT_WRITE_BINARY.to_string(),
        }
    }
}

impl ToolsConfig {
    /// Prefix for the environment overrides
    pub const ENV_PREFIX: &'static str = "KDECONFIG_";

    /// Defaults overlaid with `{prefix}READ_BIN` / `{prefix}WRITE_BIN`
    pub fn from_env(prefix: &str) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            read_binary: get_env_or(&build_env_key(prefix, "read_bin"), defaults.read_binary)?,
            write_binary: get_env_or(&build_env_key(prefix, "write_bin"), defaults.write_binary)?,
        })
    }

    /// A partial config holding only the given overrides
    ///
    /// Unset fields are left empty so [`merge`](Self::merge) skips them.
    pub fn overrides(read_binary: Option<String>, write_binary: Option<String>) -> Self {
        Self {
            read_binary: read_binary.unwrap_or_default(),
            write_binary: write_binary.unwrap_or_default(),
        }
    }

    /// Merge non-empty fields of `other` into this config
    pub fn merge(&mut self, other: Self) -> &mut Self {
        if !other.read_binary.is_empty() {
            self.read_binary = other.read_binary;
        }
        if !other.write_binary.is_empty() {
            self.write_binary = other.write_binary;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.read_binary.trim().is_empty() {
            return Err(KdeConfigError::Config("read binary must not be empty".into()));
        }
        if self.write_binary.trim().is_empty() {
            return Err(KdeConfigError::Config("write binary must not be empty".into()));
        }
        Ok(())
    }
}
