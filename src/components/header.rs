//! Top navigation bar: brand, optional search box, and session controls.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::search_form::SearchForm;
use crate::config::ClientConfig;
use crate::routing::AppRoute;
use crate::state::session::SessionStore;
use crate::util::browser::spawn_browser;

/// App header. The search box visibility follows the current route's
/// `show_search` metadata.
#[component]
pub fn AppHeader() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();
    let location = use_location();

    let hide_search = move || !AppRoute::from_path(&location.pathname.get()).show_search();
    let login_href = config.session_start_url();
    let browse_href = AppRoute::Browse { page: 1 }.href();

    let session_controls = move || {
        if session.is_authenticated() {
            let name = session.user_record().name;
            let store = session.clone();
            view! {
                <a class="app-header__account" href=AppRoute::Account.href()>
                    {if name.is_empty() { "Account".to_owned() } else { name }}
                </a>
                <button
                    class="btn app-header__logout"
                    on:click=move |_| {
                        let store = store.clone();
                        spawn_browser(async move { store.logout().await });
                    }
                >
                    "Logout"
                </button>
            }
                .into_any()
        } else {
            view! {
                <a class="btn app-header__login" href=login_href.clone()>
                    "Login with GitHub"
                </a>
            }
                .into_any()
        }
    };

    view! {
        <header class="app-header">
            <a class="app-header__brand" href=AppRoute::Home.href()>
                "Atlas"
            </a>
            <div class="app-header__search" class:hidden=hide_search>
                <SearchForm class="search-form search-form--header"/>
            </div>
            <nav class="app-header__nav">
                <a href=browse_href>"Browse"</a>
                {session_controls}
            </nav>
        </header>
    }
}
