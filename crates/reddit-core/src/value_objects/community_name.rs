//! Community name - the primary key of a community

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Minimum community name length in characters
pub const MIN_COMMUNITY_NAME_LEN: usize = 3;

/// Maximum community name length in characters
pub const MAX_COMMUNITY_NAME_LEN: usize = 21;

/// Characters that cannot make up a name on their own
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Message shown inline when a name fails validation
pub const INVALID_NAME_MESSAGE: &str =
    "Community names must be between 3-21 characters, and can only contain letters, numbers and underscores";

/// A validated community name.
///
/// Names are case-sensitive and double as the community document id, so a
/// name is fixed once the community exists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommunityName(String);

impl CommunityName {
    /// Validate and wrap a raw name
    ///
    /// # Errors
    /// Returns `DomainError::ValidationFailed` when the name is shorter than 3
    /// or longer than 21 characters, consists only of special characters, or
    /// contains a path separator.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let len = raw.chars().count();

        if !(MIN_COMMUNITY_NAME_LEN..=MAX_COMMUNITY_NAME_LEN).contains(&len)
            || is_only_special(&raw)
            || raw.contains('/')
        {
            return Err(DomainError::ValidationFailed(INVALID_NAME_MESSAGE.to_string()));
        }

        Ok(Self(raw))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form used in headers and links, e.g. `r/rust`
    pub fn prefixed(&self) -> String {
        format!("r/{}", self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Characters left before the 21 character limit is hit
pub fn chars_remaining(input: &str) -> usize {
    MAX_COMMUNITY_NAME_LEN.saturating_sub(input.chars().count())
}

fn is_only_special(name: &str) -> bool {
    name.chars().all(|c| SPECIAL_CHARACTERS.contains(c))
}

impl fmt::Display for CommunityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommunityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommunityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CommunityName> for String {
    fn from(name: CommunityName) -> Self {
        name.0
    }
}
