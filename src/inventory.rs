//! Case-preserving inventory reader
//!
//! Parses INI-style grouped key lists: `[group]` section headers followed by
//! bare keys or `key=value` pairs. `=` is the sole delimiter (a `:` is just
//! part of the key) and values are ignored. Key case is preserved exactly as
//! written, which is why this is a line-oriented reader rather than a stock
//! INI parser; those commonly fold keys to lowercase.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

use crate::errors::{ReachabilityError, ReachabilityResult};

/// Parsed inventory: named groups of host keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    groups: HashMap<String, HashSet<String>>,
}

impl Inventory {
    /// Read and parse an inventory file
    pub async fn load(path: impl AsRef<Path>) -> ReachabilityResult<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        debug!("Read inventory from {}", path.display());
        Self::parse(&text)
    }

    /// Parse inventory text
    ///
    /// Blank lines and `#`/`;` comment lines are skipped. A key appearing
    /// before any section header is an error; duplicate keys within a group
    /// collapse into the set.
    pub fn parse(source: &str) -> ReachabilityResult<Self> {
        let mut groups: HashMap<String, HashSet<String>> = HashMap::new();
        let mut current: Option<String> = None;

        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                let name = name.trim().to_string();
                groups.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let Some(group) = current.as_deref() else {
                return Err(ReachabilityError::InvalidLine {
                    line: idx + 1,
                    content: raw.to_string(),
                });
            };

            // Everything after the first `=` is a value this reader ignores.
            let key = line.split_once('=').map_or(line, |(key, _)| key.trim_end());
            groups
                .entry(group.to_string())
                .or_default()
                .insert(key.to_string());
        }

        Ok(Self { groups })
    }

    /// The set of host keys declared under the named group
    ///
    /// Fails with [`ReachabilityError::GroupNotFound`] when the group is
    /// absent. An empty group is not an error.
    pub fn expected_hosts(&self, group_name: &str) -> ReachabilityResult<HashSet<String>> {
        self.groups
            .get(group_name)
            .cloned()
            .ok_or_else(|| ReachabilityError::GroupNotFound {
                group: group_name.to_string(),
            })
    }

    /// Names of all groups in the inventory
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Whether the inventory declares the named group
    pub fn has_group(&self, group_name: &str) -> bool {
        self.groups.contains_key(group_name)
    }
}
