//! Hierarchical document store paths
//!
//! Documents live at an even number of segments (`communities/rust`),
//! collections at an odd number (`users/uid1/communitySnippets`).

use std::fmt;

use crate::error::DomainError;
use crate::value_objects::{CommunityName, UserId};

/// Top-level collection holding community documents
pub const COMMUNITIES: &str = "communities";

/// Top-level collection holding user documents
pub const USERS: &str = "users";

/// Per-user sub-collection of membership snippets
pub const COMMUNITY_SNIPPETS: &str = "communitySnippets";

/// Path to a single document
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentPath(String);

/// Path to a collection of documents
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollectionPath(String);

fn segments(raw: &str) -> Result<Vec<&str>, DomainError> {
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.iter().any(|s| s.is_empty()) {
        return Err(DomainError::InvalidPath(raw.to_string()));
    }
    Ok(parts)
}

impl DocumentPath {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let parts = segments(raw)?;
        if parts.len() % 2 != 0 {
            return Err(DomainError::InvalidPath(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// `communities/{name}`
    pub fn community(name: &CommunityName) -> Self {
        Self(format!("{COMMUNITIES}/{name}"))
    }

    /// `users/{uid}`
    pub fn user(uid: &UserId) -> Self {
        Self(format!("{USERS}/{uid}"))
    }

    /// `users/{uid}/communitySnippets/{name}`
    pub fn community_snippet(uid: &UserId, name: &CommunityName) -> Self {
        Self(format!("{USERS}/{uid}/{COMMUNITY_SNIPPETS}/{name}"))
    }

    /// Last segment - the document id
    pub fn id(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// Collection this document belongs to
    pub fn parent(&self) -> CollectionPath {
        let (parent, _) = self.0.rsplit_once('/').unwrap_or_default();
        CollectionPath(parent.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CollectionPath {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let parts = segments(raw)?;
        if parts.len() % 2 != 1 {
            return Err(DomainError::InvalidPath(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// `users/{uid}/communitySnippets`
    pub fn community_snippets(uid: &UserId) -> Self {
        Self(format!("{USERS}/{uid}/{COMMUNITY_SNIPPETS}"))
    }

    pub fn communities() -> Self {
        Self(COMMUNITIES.to_string())
    }

    /// Document with the given id inside this collection
    pub fn doc(&self, id: &str) -> Result<DocumentPath, DomainError> {
        if id.is_empty() || id.contains('/') {
            return Err(DomainError::InvalidPath(format!("{}/{id}", self.0)));
        }
        Ok(DocumentPath(format!("{}/{id}", self.0)))
    }

    /// Whether `path` is a direct child of this collection
    pub fn contains(&self, path: &DocumentPath) -> bool {
        path.parent() == *self
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
