//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages fetch on the client only: each keeps its own
//! `RwSignal<Option<Load<T>>>` (`None` while loading) and fills it from a
//! spawned request. Session-affecting calls go through `SessionStore`;
//! read-only lookups use `ApiClient` directly.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod accept_invite;
pub mod account;
pub mod browse;
pub mod confirm_email;
pub mod home;
pub mod module;
pub mod not_found;
pub mod profile;
pub mod search;

/// Result of a page-level fetch, with the error already rendered for users.
pub type Load<T> = Result<T, String>;

/// Parse a `page` query parameter, defaulting to the first page.
pub fn page_param(raw: Option<&str>) -> u64 {
    raw.and_then(|p| p.trim().parse::<u64>().ok()).filter(|p| *p > 0).unwrap_or(1)
}

/// Parse a numeric route id segment.
pub fn id_param(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|id| id.trim().parse().ok())
}
