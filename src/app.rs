//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ProtectedRoute, Route, Router, Routes},
};

use crate::components::footer::AppFooter;
use crate::components::header::AppHeader;
use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::pages::{
    accept_invite::AcceptOwnerInvitePage, account::AccountPage, browse::BrowsePage, confirm_email::ConfirmEmailPage,
    home::HomePage, module::ModulePage, not_found::NotFoundPage, profile::ProfilePage, search::SearchPage,
};
use crate::routing::{AppRoute, guard};
use crate::state::session::SessionStore;
use crate::util::browser::spawn_browser;

/// Root application component.
///
/// Builds the API client and session store, provides them as context, kicks
/// off the background session reconcile, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let api = ApiClient::browser(config.clone());
    let session = SessionStore::browser(api.clone());

    provide_context(config);
    provide_context(api);
    provide_context(session.clone());

    let reconcile = session.clone();
    spawn_browser(async move { reconcile.fetch_current_user().await });

    let account_allowed = guard::route_condition(session, AppRoute::Account);

    view! {
        <Title text="Atlas"/>

        <Router>
            <AppHeader/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <ProtectedRoute
                        path=StaticSegment("account")
                        view=AccountPage
                        condition=account_allowed
                        redirect_path=guard::redirect_href(AppRoute::Account)
                    />
                    <Route path=(StaticSegment("profile"), ParamSegment("name")) view=ProfilePage/>
                    <Route path=StaticSegment("modules") view=BrowsePage/>
                    <Route path=(StaticSegment("modules"), ParamSegment("id")) view=ModulePage/>
                    <Route
                        path=(StaticSegment("modules"), ParamSegment("id"), ParamSegment("version"))
                        view=ModulePage
                    />
                    <Route path=(StaticSegment("confirm"), ParamSegment("token")) view=ConfirmEmailPage/>
                    <Route path=(StaticSegment("accept"), ParamSegment("token")) view=AcceptOwnerInvitePage/>
                </Routes>
            </main>
            <AppFooter/>
        </Router>
    }
}
