//! Session store: the client-side mirror of the registry login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionStore`] is created by the root component and handed to
//! children through Leptos context. It owns the [`Session`] signal; views
//! read through accessors and change it only by calling the async actions
//! below, each of which commits after its own network call settles.
//!
//! STATES
//! ======
//! `unauthenticated` (initial) -> `authenticated` after a successful
//! `fetch_current_user`; back to `unauthenticated` after `logout` or a failed
//! fetch.
//!
//! ERROR HANDLING
//! ==============
//! Background reconciliation (`fetch_current_user`, `fetch_tokens`) logs and
//! falls back to empty state. User-initiated actions return `Err(message)`
//! with the server's error string when there is one.
//!
//! Concurrent actions commit in settlement order, not call order. A slow
//! `fetch_tokens` can overwrite the result of a faster `revoke_token`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::storage::{HintStorage, LocalStorage, clear_login_hint, read_login_hint, write_login_hint};
use crate::net::client::ApiClient;
use crate::net::types::{ModuleStars, User, UserToken, UserUpdate};

/// Everything the front end knows about the current login.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub authenticated: bool,
    pub record: User,
    pub tokens: Vec<UserToken>,
}

/// Called after logout to reload the page from a logged-out state.
pub type ReloadHook = Arc<dyn Fn() + Send + Sync>;

/// Injectable session container shared through context.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<Session>,
    api: ApiClient,
    hint: Arc<dyn HintStorage>,
    reload: ReloadHook,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("api", &self.api).finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(api: ApiClient, hint: Arc<dyn HintStorage>, reload: ReloadHook) -> Self {
        Self { state: RwSignal::new(Session::default()), api, hint, reload }
    }

    /// Store wired to `localStorage` and a full page reload on logout.
    pub fn browser(api: ApiClient) -> Self {
        Self::new(api, Arc::new(LocalStorage), Arc::new(crate::util::browser::reload_page))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Persisted hint OR in-memory flag.
    ///
    /// The hint lets a reloaded page render as logged in before the
    /// reconciling fetch answers.
    pub fn is_authenticated(&self) -> bool {
        read_login_hint(self.hint.as_ref()) || self.state.with(|s| s.authenticated)
    }

    pub fn user_record(&self) -> User {
        self.state.with(|s| s.record.clone())
    }

    pub fn user_tokens(&self) -> Vec<UserToken> {
        self.state.with(|s| s.tokens.clone())
    }

    /// Untracked copy of the whole session.
    pub fn snapshot(&self) -> Session {
        self.state.get_untracked()
    }

    /// Read-only signal for views that want fine-grained reactivity.
    pub fn signal(&self) -> ReadSignal<Session> {
        self.state.read_only()
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    fn set_user(&self, record: User) {
        self.state.update(|s| s.record = record);
    }

    fn set_authenticated(&self, authenticated: bool) {
        self.state.update(|s| s.authenticated = authenticated);
    }

    fn set_tokens(&self, tokens: Vec<UserToken>) {
        self.state.update(|s| s.tokens = tokens);
    }

    fn clear_user(&self) {
        self.set_user(User::default());
        self.set_authenticated(false);
        clear_login_hint(self.hint.as_ref());
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Reconcile with the server's view of the session. Never fails.
    pub async fn fetch_current_user(&self) {
        match self.api.get_user().await {
            Ok(user) => {
                self.set_user(user);
                self.set_authenticated(true);
                write_login_hint(self.hint.as_ref());
            }
            Err(e) => {
                log::warn!("fetch current user failed: {e}");
                self.clear_user();
            }
        }
    }

    /// Update the current user's profile.
    ///
    /// The server only acknowledges the change, so the patch is applied to
    /// the held record. A changed email is unconfirmed until the emailed
    /// link is followed.
    ///
    /// # Errors
    ///
    /// Returns the server's message, or the raw error text.
    pub async fn update_user(&self, update: &UserUpdate) -> Result<(), String> {
        self.api.update_user(update).await.map_err(|e| {
            log::warn!("update user failed: {e}");
            e.user_message()
        })?;
        self.state.update(|s| {
            if s.record.email.as_deref() != Some(update.email.as_str()) {
                s.record.email_confirmed = false;
            }
            s.record.email = Some(update.email.clone());
        });
        Ok(())
    }

    /// Confirm the current user's email with the emailed token.
    ///
    /// # Errors
    ///
    /// Returns the server's message, or the raw error text.
    pub async fn confirm_email(&self, token: &str) -> Result<(), String> {
        let user = self.api.confirm_email(token).await.map_err(|e| {
            log::warn!("confirm email failed: {e}");
            e.user_message()
        })?;
        self.set_user(user);
        Ok(())
    }

    /// Replace the token list with the server's. Resets to empty on failure.
    pub async fn fetch_tokens(&self) {
        match self.api.get_user_tokens().await {
            Ok(tokens) => self.set_tokens(tokens),
            Err(e) => {
                log::warn!("fetch tokens failed: {e}");
                self.set_tokens(Vec::new());
            }
        }
    }

    /// Create a token and append it to the list.
    ///
    /// # Errors
    ///
    /// Returns the server's message, or the raw error text.
    pub async fn create_token(&self, name: &str) -> Result<UserToken, String> {
        let token = self.api.create_user_token(name).await.map_err(|e| {
            log::warn!("create token failed: {e}");
            e.user_message()
        })?;
        let created = token.clone();
        self.state.update(|s| s.tokens.push(token));
        Ok(created)
    }

    /// Revoke a token and drop the one whose id the server returned.
    ///
    /// # Errors
    ///
    /// Returns the server's message, or the raw error text.
    pub async fn revoke_token(&self, token: &UserToken) -> Result<(), String> {
        let revoked = self.api.revoke_user_token(token).await.map_err(|e| {
            log::warn!("revoke token failed: {e}");
            e.user_message()
        })?;
        self.state.update(|s| s.tokens.retain(|t| t.id != revoked.id));
        Ok(())
    }

    /// Star or unstar a module and keep the user's star list in step.
    ///
    /// # Errors
    ///
    /// Returns the server's message, or the raw error text.
    pub async fn set_starred(&self, module_id: u64, starred: bool) -> Result<ModuleStars, String> {
        let result = if starred {
            self.api.star_module(module_id).await
        } else {
            self.api.unstar_module(module_id).await
        };
        let stars = result.map_err(|e| {
            log::warn!("star module {module_id} failed: {e}");
            e.user_message()
        })?;
        self.state.update(|s| {
            s.record.stars.retain(|id| *id != module_id);
            if starred {
                s.record.stars.push(module_id);
            }
        });
        Ok(stars)
    }

    /// End the session, whatever the server says, then reload the page.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout_user().await {
            log::warn!("logout request failed: {e}");
        }
        self.clear_user();
        (self.reload)();
    }
}
