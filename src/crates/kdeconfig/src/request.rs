//! Request model
//!
//! [`RequestParams`] mirrors the loosely-typed invocation contract (every
//! field optional). It is resolved exactly once into a [`ConfigRequest`],
//! whose [`Mutation`] is a closed variant, so nothing downstream re-checks
//! the three optional mutation fields.

use crate::error::{KdeConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Type marker passed to the writer with `--type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Bool,
    Path,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single change a request asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Write a literal value, optionally with a type marker
    SetValue {
        value: String,
        value_type: Option<ValueType>,
    },
    /// Write a boolean, always emitted as `--type bool true|false`
    SetEnabled(bool),
    /// Remove the key
    Delete,
}

impl Mutation {
    /// Trailing writer arguments for this mutation
    pub fn write_args(&self) -> Vec<String> {
        match self {
            Self::Delete => vec!["--delete".to_string()],
            Self::SetValue {
                value,
                value_type: None,
            } => vec![value.clone()],
            Self::SetValue {
                value,
                value_type: Some(t),
            } => vec!["--type".to_string(), t.to_string(), value.clone()],
            Self::SetEnabled(enabled) => vec![
                "--type".to_string(),
                ValueType::Bool.to_string(),
                enabled.to_string(),
            ],
        }
    }
}

/// Group path as supplied by the caller: a single name or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupPath {
    One(String),
    Many(Vec<String>),
}

impl GroupPath {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(group) => vec![group],
            Self::Many(groups) => groups,
        }
    }
}

impl From<Vec<String>> for GroupPath {
    fn from(groups: Vec<String>) -> Self {
        Self::Many(groups)
    }
}

/// Raw invocation parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestParams {
    pub file: Option<PathBuf>,
    pub group: Option<GroupPath>,
    pub key: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub value_type: Option<ValueType>,
    pub delete: Option<bool>,
    pub enabled: Option<bool>,
}

impl RequestParams {
    /// Decode parameters from a JSON document
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Resolve the mutation by check order: `delete`, then a non-empty
    /// `value`, then `enabled`
    pub fn mutation(&self) -> Result<Mutation> {
        if self.delete == Some(true) {
            return Ok(Mutation::Delete);
        }
        if let Some(value) = self.value.as_deref().filter(|v| !v.is_empty()) {
            return Ok(Mutation::SetValue {
                value: value.to_string(),
                value_type: self.value_type,
            });
        }
        if let Some(enabled) = self.enabled {
            return Ok(Mutation::SetEnabled(enabled));
        }
        Err(KdeConfigError::missing_mutation())
    }

    /// Validate and convert into a [`ConfigRequest`]
    pub fn into_request(self) -> Result<ConfigRequest> {
        let mutation = self.mutation()?;
        ConfigRequest::new(
            self.file.unwrap_or_default(),
            self.group.map(GroupPath::into_vec).unwrap_or_default(),
            self.key.unwrap_or_default(),
            mutation,
        )
    }
}

/// A validated request to change one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRequest {
    pub file: PathBuf,
    pub groups: Vec<String>,
    pub key: String,
    pub mutation: Mutation,
}

impl ConfigRequest {
    pub fn new(
        file: impl Into<PathBuf>,
        groups: Vec<String>,
        key: impl Into<String>,
        mutation: Mutation,
    ) -> Result<Self> {
        let file = file.into();
        let key = key.into();
        validate_entry(&file, &groups, &key)?;
        Ok(Self {
            file,
            groups,
            key,
            mutation,
        })
    }
}

/// Check the addressing of an entry before any tool runs
///
/// The file path must be valid UTF-8 so it reaches the tools byte for byte;
/// group segments and the key must be non-empty.
pub fn validate_entry(file: &Path, groups: &[String], key: &str) -> Result<()> {
    if file.as_os_str().is_empty() {
        return Err(KdeConfigError::missing_field("file"));
    }
    if file.to_str().is_none() {
        return Err(KdeConfigError::non_utf8_path(file));
    }
    if groups.is_empty() || groups.iter().any(|g| g.is_empty()) {
        return Err(KdeConfigError::missing_field("group"));
    }
    if key.is_empty() {
        return Err(KdeConfigError::missing_field("key"));
    }
    Ok(())
}
