//! Core data types for wyag

use serde::{Deserialize, Deserializer, Serialize};

/// The only repository format version this build understands
pub const SUPPORTED_FORMAT_VERSION: i64 = 0;

/// Repository configuration document
/// Stored in .wyag/conf as indented JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "null_as_default")]
    pub core: CoreConfig,
}

/// The `core` section. Field names are part of the on-disk format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub repositoryformatversion: i64,

    /// Track the executable bit of worktree files
    #[serde(default, deserialize_with = "null_as_default")]
    pub filemode: bool,

    /// Repository has no separate worktree
    #[serde(default, deserialize_with = "null_as_default")]
    pub bare: bool,
}

impl Config {
    /// Parse a conf document
    /// AIDEV-NOTE: Missing or null fields fall back to their defaults and unknown fields
    /// are ignored, so `{}` and `null` are accepted as format version 0. Only the version
    /// is checked.
    pub fn parse(bytes: &[u8]) -> serde_json::Result<Self> {
        let config: Option<Config> = serde_json::from_slice(bytes)?;
        Ok(config.unwrap_or_default())
    }

    /// Render with two-space indentation and no trailing newline
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn is_supported(&self) -> bool {
        self.core.repositoryformatversion == SUPPORTED_FORMAT_VERSION
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
