//! Public profile of a registry user and the modules they own.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::Load;
use crate::components::module_list::ModuleList;
use crate::net::client::ApiClient;
use crate::net::types::{Module, User};
use crate::util::browser::spawn_browser;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let name = Memo::new(move |_| params.read().get("name").unwrap_or_default());
    let user = RwSignal::new(None::<Load<User>>);
    let modules = RwSignal::new(None::<Load<Vec<Module>>>);

    Effect::new(move || {
        let name = name.get();
        user.set(None);
        modules.set(None);
        let api = api.clone();
        spawn_browser(async move {
            let fetched = api.get_user_by_name(&name).await.map_err(|e| e.user_message());
            let found = fetched.is_ok();
            user.set(Some(fetched));
            if !found {
                return;
            }
            let owned = api.get_user_modules(&name).await.map_err(|e| e.user_message());
            modules.set(Some(owned));
        });
    });

    view! {
        <section class="profile-page">
            {move || match user.get() {
                None => view! { <p class="loading">"Loading profile..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(user)) => {
                    let display = if user.full_name.is_empty() { user.name.clone() } else { user.full_name.clone() };
                    view! {
                        <header class="profile-page__header">
                            <img class="profile-page__avatar" src=user.avatar_url alt=user.name.clone()/>
                            <h2>{display}</h2>
                            <a class="profile-page__github" href=user.url target="_blank" rel="noopener">
                                {format!("@{}", user.name)}
                            </a>
                        </header>
                    }
                        .into_any()
                }
            }}
            {move || match modules.get() {
                None => ().into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(owned)) => {
                    view! {
                        <h3>"Modules"</h3>
                        <ModuleList modules=owned/>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
