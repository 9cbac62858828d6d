//! Named application routes and their metadata.
//!
//! DESIGN
//! ======
//! Every view the router can show has a variant here carrying its path
//! parameters. Header options and guard protection are per-route metadata,
//! so navigation code builds URLs from names instead of string literals.


pub mod guard;

use crate::util::url::encode_component;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Search { query: String },
    Account,
    Profile { name: String },
    Module { id: u64 },
    ModuleVersion { id: u64, version: String },
    Browse { page: u64 },
    ConfirmEmail { token: String },
    AcceptOwnerInvite { token: String },
    NotFound,
}

impl AppRoute {
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search { query: query.into() }
    }

    /// Stable route name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search { .. } => "search",
            Self::Account => "account",
            Self::Profile { .. } => "profile",
            Self::Module { .. } => "modules",
            Self::ModuleVersion { .. } => "modulesVersioned",
            Self::Browse { .. } => "browse",
            Self::ConfirmEmail { .. } => "confirmEmail",
            Self::AcceptOwnerInvite { .. } => "acceptOwnerInvite",
            Self::NotFound => "error",
        }
    }

    /// Whether the header renders its search box on this route.
    pub fn show_search(&self) -> bool {
        !matches!(self, Self::Home | Self::ConfirmEmail { .. } | Self::AcceptOwnerInvite { .. })
    }

    /// Whether entering this route goes through the auth guard.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Account)
    }

    /// Navigable URL for this route.
    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Search { query } => format!("/search?q={}", encode_component(query)),
            Self::Account => "/account".to_owned(),
            Self::Profile { name } => format!("/profile/{}", encode_component(name)),
            Self::Module { id } => format!("/modules/{id}"),
            Self::ModuleVersion { id, version } => format!("/modules/{id}/{}", encode_component(version)),
            Self::Browse { page } if *page > 1 => format!("/modules?page={page}"),
            Self::Browse { .. } => "/modules".to_owned(),
            Self::ConfirmEmail { token } => format!("/confirm/{}", encode_component(token)),
            Self::AcceptOwnerInvite { token } => format!("/accept/{}", encode_component(token)),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Match a location pathname (no query string) to a route.
    ///
    /// Query parameters are not consulted, so `Search` and `Browse` come back
    /// with their defaults.
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["search"] => Self::search(""),
            ["account"] => Self::Account,
            ["profile", name] => Self::Profile { name: (*name).to_owned() },
            ["modules"] => Self::Browse { page: 1 },
            ["modules", id] => id.parse().map_or(Self::NotFound, |id| Self::Module { id }),
            ["modules", id, version] => id
                .parse()
                .map_or(Self::NotFound, |id| Self::ModuleVersion { id, version: (*version).to_owned() }),
            ["confirm", token] => Self::ConfirmEmail { token: (*token).to_owned() },
            ["accept", token] => Self::AcceptOwnerInvite { token: (*token).to_owned() },
            _ => Self::NotFound,
        }
    }
}
