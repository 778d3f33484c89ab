//! Structured output emitted after a run

use serde::{Deserialize, Serialize};

/// Outcome of applying a [`ConfigRequest`](crate::ConfigRequest)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigResult {
    /// Whether the read-back value differs from the value before the write
    pub changed: bool,
    /// The exact write command that was executed
    pub cmd: Vec<String>,
    /// Value after the write, present only when `changed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_new: Option<String>,
}

/// Failure report emitted in place of a [`ConfigResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub failed: bool,
    pub msg: String,
    pub changed: bool,
}

impl FailureReport {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            failed: true,
            msg: msg.into(),
            changed: false,
        }
    }
}

impl From<&crate::KdeConfigError> for FailureReport {
    fn from(err: &crate::KdeConfigError) -> Self {
        Self::new(err.to_string())
    }
}
