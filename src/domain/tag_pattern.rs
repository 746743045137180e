//! Tag Pattern Value Object with Anchored Matching Invariants

use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Tag pattern validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagPatternError {
    #[error("Tag is empty")]
    Empty,
}

/// Anchored server-name matcher for a deployment tag
///
/// Matches names of the form `<tag>_dev<digits>`: the literal tag, the
/// literal substring `_dev`, then one or more decimal digits, with no extra
/// characters before or after.
///
/// The tag is matched literally. Regex metacharacters in the tag are escaped
/// before the pattern is built, so a tag such as `web.front` matches only
/// server names that contain the dot itself.
///
/// # Examples
///
/// ```rust
/// use openstack_reachability::domain::TagPattern;
///
/// let pattern = TagPattern::new("prod").unwrap();
/// assert!(pattern.matches("prod_dev3"));
/// assert!(!pattern.matches("prod_dev"));   // no digits
/// assert!(!pattern.matches("xprod_dev3")); // extra prefix
/// assert!(!pattern.matches("prod_dev3x")); // extra suffix
/// ```
#[derive(Debug, Clone)]
pub struct TagPattern {
    tag: String,
    regex: Regex,
}

impl TagPattern {
    /// Create a new pattern for the given tag
    ///
    /// # Invariants
    /// - Tag is non-empty
    /// - Matching is anchored at both ends
    /// - The tag is a literal segment, never interpreted as a pattern
    pub fn new(tag: impl Into<String>) -> Result<Self, TagPatternError> {
        let tag = tag.into();

        if tag.is_empty() {
            return Err(TagPatternError::Empty);
        }

        // The escaped tag cannot introduce metacharacters, so this compile
        // cannot fail for any tag value.
        let regex = Regex::new(&format!("^{}_dev[0-9]+$", regex::escape(&tag)))
            .unwrap_or_else(|e| unreachable!("escaped tag pattern failed to compile: {e}"));

        Ok(Self { tag, regex })
    }

    /// Check whether a server name matches `<tag>_dev<digits>` exactly
    pub fn matches(&self, server_name: &str) -> bool {
        self.regex.is_match(server_name)
    }

    /// Get the tag this pattern was built from
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_dev<n>", self.tag)
    }
}

impl TryFrom<&str> for TagPattern {
    type Error = TagPatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
