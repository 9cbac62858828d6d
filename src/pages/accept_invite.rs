//! Landing page for a module owner invitation link.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::Load;
use crate::net::client::ApiClient;
use crate::net::types::Module;
use crate::routing::AppRoute;
use crate::util::browser::spawn_browser;

#[component]
pub fn AcceptOwnerInvitePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let token = Memo::new(move |_| params.read().get("token").unwrap_or_default());
    let accepted = RwSignal::new(None::<Load<Module>>);

    Effect::new(move || {
        let token = token.get();
        accepted.set(None);
        let api = api.clone();
        spawn_browser(async move {
            let result = api.accept_module_owner_invite(&token).await.map_err(|e| e.user_message());
            accepted.set(Some(result));
        });
    });

    view! {
        <section class="accept-page">
            {move || match accepted.get() {
                None => view! { <p class="loading">"Accepting invitation..."</p> }.into_any(),
                Some(Ok(module)) => {
                    let href = AppRoute::Module { id: module.id }.href();
                    view! {
                        <p>{format!("You are now an owner of {}.", module.name)}</p>
                        <a class="btn" href=href>"View module"</a>
                    }
                        .into_any()
                }
                Some(Err(e)) => view! { <p class="error">{format!("Could not accept invitation: {e}")}</p> }.into_any(),
            }}
        </section>
    }
}
