//! # kdeconfig
//!
//! Idempotent management of KDE configuration entries.
//!
//! Parsing and writing the INI-style files is left to KDE's own
//! `kreadconfig5` and `kwriteconfig5`. This crate builds their command
//! lines, runs them, and decides whether anything changed by comparing the
//! value read before the write with the value read after it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kdeconfig::{ConfigRequest, ConfigSetter, Mutation, ToolsConfig};
//!
//! # fn example() -> kdeconfig::Result<()> {
//! let setter = ConfigSetter::new(ToolsConfig::default());
//! let request = ConfigRequest::new(
//!     "kwinrc",
//!     vec!["Plugins".to_string()],
//!     "blurEnabled",
//!     Mutation::SetEnabled(false),
//! )?;
//!
//! let result = setter.apply(&request)?;
//! println!("changed: {}", result.changed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Caveats
//!
//! - The writer's exit status is never treated as a failure; only the
//!   read-back comparison decides the outcome.
//! - The two reads and the write are independent processes. A concurrent
//!   edit in between can produce a wrong `changed` report.

pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod request;
pub mod result;
pub mod setter;

pub use command::{CommandOutput, CommandRunner, SystemRunner};
pub use config::ToolsConfig;
pub use error::{KdeConfigError, Result};
pub use request::{validate_entry, ConfigRequest, GroupPath, Mutation, RequestParams, ValueType};
pub use result::{ConfigResult, FailureReport};
pub use setter::ConfigSetter;

/// Package version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
