//! Registry API DTOs.
//!
//! DESIGN
//! ======
//! These mirror the registry's JSON models. Every response field is
//! `#[serde(default)]` so an older or newer server that omits a field still
//! decodes; request bodies are strict and only carry what the endpoint reads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registry user as returned by `/me` and `/users/{name}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub created_at: String,
    pub updated_at: String,
    /// GitHub login.
    pub name: String,
    pub full_name: String,
    pub url: String,
    pub avatar_url: String,
    pub gravatar_id: String,
    /// Only present on the caller's own record.
    pub email: Option<String>,
    pub email_confirmed: bool,
    /// IDs of modules the user has starred.
    pub stars: Vec<u64>,
}

impl User {
    /// True for the placeholder record held while no one is logged in.
    pub fn is_empty(&self) -> bool {
        self.id == 0 && self.name.is_empty()
    }

    /// Whether `module_id` is among this user's stars.
    pub fn has_starred(&self, module_id: u64) -> bool {
        self.stars.contains(&module_id)
    }
}

/// A user-created API token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserToken {
    pub id: u64,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub user_id: u64,
    /// Number of times the token has been used to publish.
    pub count: u64,
    pub token: uuid::Uuid,
    pub revoked: bool,
}

/// A published module with its relations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    pub id: u64,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub team: String,
    pub description: String,
    pub homepage: String,
    pub stars: i64,
    pub bug_tracker: BugTracker,
    pub keywords: Vec<Keyword>,
    pub authors: Vec<User>,
    pub owners: Vec<User>,
    pub versions: Vec<ModuleVersion>,
}

impl Module {
    /// The most recently published version, if any.
    pub fn latest_version(&self) -> Option<&ModuleVersion> {
        self.versions.iter().max_by_key(|v| v.id)
    }

    /// Find a version by its version string.
    pub fn version(&self, version: &str) -> Option<&ModuleVersion> {
        self.versions.iter().find(|v| v.version == version)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleVersion {
    pub id: u64,
    pub created_at: String,
    pub updated_at: String,
    pub version: String,
    pub documentation: String,
    pub repo: String,
    pub sdk_compat: Option<String>,
    pub module_id: u64,
    pub published_by: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BugTracker {
    pub url: Option<String>,
    pub contact: Option<String>,
}

/// Star count returned by the star/unstar endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStars {
    pub stars: i64,
}

/// Generic paginated envelope used by list and search endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paginated<T> {
    pub order: String,
    pub reverse: bool,
    pub page: u64,
    pub limit: u64,
    pub count: u64,
    pub total: u64,
    pub results: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            order: String::new(),
            reverse: false,
            page: 1,
            limit: 0,
            count: 0,
            total: 0,
            results: Vec::new(),
        }
    }
}

impl<T> Paginated<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_mul(self.limit) < self.total
    }
}

/// Body of `PUT /me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub email: String,
}

/// Body of `PUT /me/tokens`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCreate {
    pub name: String,
}

/// Body of `PUT /me/invite`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerInvite {
    pub user: String,
    pub module_id: u64,
}

/// Error payload the registry attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: String,
}
