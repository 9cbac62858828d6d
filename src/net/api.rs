//! Registry endpoints used by the front end.
//!
//! Each method is a thin typed wrapper over [`ApiClient::perform`]; path
//! construction lives in small free functions so it can be tested without a
//! transport.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns the [`RequestError`] from `perform` untouched.
//! Deciding whether to swallow or surface a failure is the caller's job.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::ApiClient;
use super::error::RequestError;
use super::transport::Method;
use super::types::{Module, ModuleStars, OwnerInvite, Paginated, TokenCreate, User, UserToken, UserUpdate};
use crate::util::url::encode_component;

const NO_BODY: Option<&()> = None;

/// Page selection for paginated list endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageQuery {
    pub fn page(page: u64) -> Self {
        Self { page: page.max(1), ..Self::default() }
    }

    /// Query string including the leading `?`.
    pub fn to_query(self) -> String {
        format!("?page={}&limit={}", self.page, self.limit)
    }
}

fn token_path(token_id: u64) -> String {
    format!("/me/tokens/{token_id}")
}

fn confirm_email_path(token: &str) -> String {
    format!("/me/confirm/{}", encode_component(token))
}

fn accept_invite_path(token: &str) -> String {
    format!("/me/invite/accept/{}", encode_component(token))
}

fn user_path(name: &str) -> String {
    format!("/users/{}", encode_component(name))
}

fn user_modules_path(name: &str) -> String {
    format!("/users/{}/modules", encode_component(name))
}

fn module_path(module_id: u64) -> String {
    format!("/modules/{module_id}")
}

fn modules_path(page: PageQuery) -> String {
    format!("/modules{}", page.to_query())
}

fn search_path(query: &str, page: PageQuery) -> String {
    format!("/modules/search{}&q={}", page.to_query(), encode_component(query))
}

fn star_path(module_id: u64, star: bool) -> String {
    if star {
        format!("/modules/{module_id}/star")
    } else {
        format!("/modules/{module_id}/unstar")
    }
}

impl ApiClient {
    // =========================================================================
    // SESSION / CURRENT USER
    // =========================================================================

    /// `GET /me`.
    ///
    /// # Errors
    ///
    /// Fails with a status error when no session cookie is present.
    pub async fn get_user(&self) -> Result<User, RequestError> {
        self.perform(Method::Get, "/me", NO_BODY).await
    }

    /// `PUT /me`. The registry answers a bare `true`, not the updated record.
    ///
    /// # Errors
    ///
    /// Returns the server's validation message on a bad email.
    pub async fn update_user(&self, update: &UserUpdate) -> Result<bool, RequestError> {
        self.perform(Method::Put, "/me", Some(update)).await
    }

    /// `POST /session/logout`. The response body is a redirect and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on transport or status failure.
    pub async fn logout_user(&self) -> Result<(), RequestError> {
        self.perform_unit(Method::Post, "/session/logout").await
    }

    /// `PUT /me/confirm/{token}`.
    ///
    /// # Errors
    ///
    /// Fails when the token is unknown or expired.
    pub async fn confirm_email(&self, token: &str) -> Result<User, RequestError> {
        self.perform(Method::Put, &confirm_email_path(token), NO_BODY).await
    }

    // =========================================================================
    // TOKENS
    // =========================================================================

    /// `GET /me/tokens`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on any failure.
    pub async fn get_user_tokens(&self) -> Result<Vec<UserToken>, RequestError> {
        self.perform(Method::Get, "/me/tokens", NO_BODY).await
    }

    /// `PUT /me/tokens` with `{name}`.
    ///
    /// # Errors
    ///
    /// Fails when the name is empty or the token limit is reached.
    pub async fn create_user_token(&self, name: &str) -> Result<UserToken, RequestError> {
        let body = TokenCreate { name: name.to_owned() };
        self.perform(Method::Put, "/me/tokens", Some(&body)).await
    }

    /// `DELETE /me/tokens/{id}`; returns the revoked token.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on any failure.
    pub async fn revoke_user_token(&self, token: &UserToken) -> Result<UserToken, RequestError> {
        self.perform(Method::Delete, &token_path(token.id), NO_BODY).await
    }

    // =========================================================================
    // OWNER INVITES
    // =========================================================================

    /// `PUT /me/invite` with `{user, module_id}`.
    ///
    /// # Errors
    ///
    /// Fails when the invitee is already an owner or has no confirmed email.
    pub async fn invite_module_owner(&self, user: &str, module_id: u64) -> Result<bool, RequestError> {
        let body = OwnerInvite { user: user.to_owned(), module_id };
        self.perform(Method::Put, "/me/invite", Some(&body)).await
    }

    /// `PUT /me/invite/accept/{token}`; returns the module now co-owned.
    ///
    /// # Errors
    ///
    /// Fails when the invite token is unknown or expired.
    pub async fn accept_module_owner_invite(&self, token: &str) -> Result<Module, RequestError> {
        self.perform(Method::Put, &accept_invite_path(token), NO_BODY).await
    }

    // =========================================================================
    // USERS
    // =========================================================================

    /// `GET /users/{name}`.
    ///
    /// # Errors
    ///
    /// Fails with 404 when the user does not exist.
    pub async fn get_user_by_name(&self, name: &str) -> Result<User, RequestError> {
        self.perform(Method::Get, &user_path(name), NO_BODY).await
    }

    /// `GET /users/{name}/modules`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on any failure.
    pub async fn get_user_modules(&self, name: &str) -> Result<Vec<Module>, RequestError> {
        self.perform(Method::Get, &user_modules_path(name), NO_BODY).await
    }

    // =========================================================================
    // MODULES
    // =========================================================================

    /// `GET /modules/{id}`.
    ///
    /// # Errors
    ///
    /// Fails with 404 when the module does not exist.
    pub async fn get_module(&self, module_id: u64) -> Result<Module, RequestError> {
        self.perform(Method::Get, &module_path(module_id), NO_BODY).await
    }

    /// `GET /modules?page=&limit=`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on any failure.
    pub async fn get_modules(&self, page: PageQuery) -> Result<Paginated<Module>, RequestError> {
        self.perform(Method::Get, &modules_path(page), NO_BODY).await
    }

    /// `GET /modules/search?page=&limit=&q=`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on any failure.
    pub async fn search_modules(&self, query: &str, page: PageQuery) -> Result<Paginated<Module>, RequestError> {
        self.perform(Method::Get, &search_path(query, page), NO_BODY).await
    }

    /// `PUT /modules/{id}/star`.
    ///
    /// # Errors
    ///
    /// Fails with 401 when not logged in.
    pub async fn star_module(&self, module_id: u64) -> Result<ModuleStars, RequestError> {
        self.perform(Method::Put, &star_path(module_id, true), NO_BODY).await
    }

    /// `PUT /modules/{id}/unstar`.
    ///
    /// # Errors
    ///
    /// Fails with 401 when not logged in.
    pub async fn unstar_module(&self, module_id: u64) -> Result<ModuleStars, RequestError> {
        self.perform(Method::Put, &star_path(module_id, false), NO_BODY).await
    }
}
