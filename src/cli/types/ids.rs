//! Tag types for Clash of Clans clans, players and wars.

use crate::error::{CwlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag of a league war that has not been scheduled yet.
pub const PLACEHOLDER_WAR_TAG: &str = "#0";

/// Normalize a user-supplied tag: trim, upper-case and prefix `#` when missing.
///
/// Tags only ever contain ASCII digits and upper-case letters after the `#`.
fn normalize_tag(raw: &str) -> Result<String> {
    let trimmed = raw.trim().to_uppercase();
    let body = trimmed.strip_prefix('#').unwrap_or(&trimmed);

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()) {
        return Err(CwlError::InvalidTag {
            tag: raw.to_string(),
        });
    }

    Ok(format!("#{}", body))
}

/// Type-safe wrapper for clan tags.
///
/// Keeps clan tags apart from player and war tags, which share the same
/// textual shape.
///
/// # Examples
///
/// ```rust
/// use cwl_perf::ClanTag;
///
/// let tag: ClanTag = "2pp".parse().unwrap();
/// assert_eq!(tag.as_str(), "#2PP");
/// assert_eq!(tag.url_encoded(), "%232PP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClanTag(String);

impl ClanTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tag with `#` percent-encoded, ready for a URL path segment.
    pub fn url_encoded(&self) -> String {
        self.0.replace('#', "%23")
    }
}

impl fmt::Display for ClanTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClanTag {
    type Err = CwlError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(normalize_tag(s)?))
    }
}

/// Type-safe wrapper for league war tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarTag(String);

impl WarTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn url_encoded(&self) -> String {
        self.0.replace('#', "%23")
    }

    /// `#0` marks a war slot the league has not filled in yet.
    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_WAR_TAG
    }
}

impl fmt::Display for WarTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WarTag {
    type Err = CwlError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(normalize_tag(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clan_tag_adds_hash_and_uppercases() {
        let tag: ClanTag = " 2ppq0 ".parse().unwrap();
        assert_eq!(tag.as_str(), "#2PPQ0");
        assert_eq!(tag.to_string(), "#2PPQ0");
    }

    #[test]
    fn test_clan_tag_keeps_existing_hash() {
        let tag: ClanTag = "#LQ8Y2".parse().unwrap();
        assert_eq!(tag.as_str(), "#LQ8Y2");
    }

    #[test]
    fn test_clan_tag_rejects_empty_and_symbols() {
        assert!("".parse::<ClanTag>().is_err());
        assert!("#".parse::<ClanTag>().is_err());
        match "#AB-C".parse::<ClanTag>() {
            Err(CwlError::InvalidTag { tag }) => assert_eq!(tag, "#AB-C"),
            other => panic!("Expected InvalidTag, got {:?}", other),
        }
    }

    #[test]
    fn test_url_encoding() {
        let clan: ClanTag = "#2PP".parse().unwrap();
        assert_eq!(clan.url_encoded(), "%232PP");

        let war: WarTag = "#8QJ".parse().unwrap();
        assert_eq!(war.url_encoded(), "%238QJ");
    }

    #[test]
    fn test_war_tag_placeholder() {
        let placeholder: WarTag = "#0".parse().unwrap();
        assert!(placeholder.is_placeholder());

        let real: WarTag = "#8QJ".parse().unwrap();
        assert!(!real.is_placeholder());
    }

    #[test]
    fn test_war_tag_deserializes_verbatim() {
        let tag: WarTag = serde_json::from_str("\"#0\"").unwrap();
        assert!(tag.is_placeholder());
    }
}
