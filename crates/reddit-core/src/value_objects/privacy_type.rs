//! Community privacy type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Who can view and post in a community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyType {
    #[default]
    Public,
    Restricted,
    Private,
}

impl PrivacyType {
    pub const ALL: [Self; 3] = [Self::Public, Self::Restricted, Self::Private];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Restricted => "restricted",
            Self::Private => "private",
        }
    }

    /// Human readable explanation shown next to the option
    pub fn description(self) -> &'static str {
        match self {
            Self::Public => "Anyone can view, post, and comment to this community",
            Self::Restricted => {
                "Anyone can view this community, but only approved users can post"
            }
            Self::Private => "Only approved users can view and submit to this community",
        }
    }
}

impl fmt::Display for PrivacyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrivacyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "restricted" => Ok(Self::Restricted),
            "private" => Ok(Self::Private),
            other => Err(DomainError::ValidationFailed(format!(
                "Unknown community type: {other}"
            ))),
        }
    }
}
