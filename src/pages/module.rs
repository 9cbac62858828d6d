//! Module detail page, optionally pinned to one published version.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves both `/modules/:id` and `/modules/:id/:version`. Without a version
//! segment the latest published version is shown. Starring goes through the
//! session store so the user's star list stays in step; the displayed count
//! comes from the server's reply.

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::{Load, id_param};
use crate::net::client::ApiClient;
use crate::net::types::{Module, ModuleVersion};
use crate::routing::AppRoute;
use crate::state::session::SessionStore;
use crate::util::browser::spawn_browser;

/// Version to display: the requested one, or the latest when none was asked for.
fn selected_version(module: &Module, requested: Option<&str>) -> Option<ModuleVersion> {
    match requested {
        Some(version) => module.version(version).cloned(),
        None => module.latest_version().cloned(),
    }
}

/// Homepage URL worth linking, if the module declares one.
fn homepage_link(module: &Module) -> Option<String> {
    let homepage = module.homepage.trim();
    (!homepage.is_empty()).then(|| homepage.to_owned())
}

#[component]
pub fn ModulePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let params = use_params_map();
    let module_id = Memo::new(move |_| id_param(params.read().get("id").as_deref()));
    let requested = Memo::new(move |_| params.read().get("version"));

    let module = RwSignal::new(None::<Load<Module>>);
    let stars = RwSignal::new(0_i64);
    let status = RwSignal::new(None::<String>);

    let fetch_api = api.clone();
    Effect::new(move || {
        let Some(id) = module_id.get() else {
            module.set(Some(Err(format!("Invalid module id: {}", params.read_untracked().get("id").unwrap_or_default()))));
            return;
        };
        module.set(None);
        status.set(None);
        let api = fetch_api.clone();
        spawn_browser(async move {
            let fetched = api.get_module(id).await.map_err(|e| e.user_message());
            if let Ok(m) = &fetched {
                stars.set(m.stars);
            }
            module.set(Some(fetched));
        });
    });

    let star_session = session.clone();
    let toggle_star = move |module_id: u64| {
        let store = star_session.clone();
        let starred = !store.user_record().has_starred(module_id);
        spawn_browser(async move {
            match store.set_starred(module_id, starred).await {
                Ok(count) => stars.set(count.stars),
                Err(e) => status.set(Some(e)),
            }
        });
    };

    view! {
        <section class="module-page">
            <Show when=move || status.get().is_some()>
                <p class="module-page__status">{move || status.get().unwrap_or_default()}</p>
            </Show>
            {move || match module.get() {
                None => view! { <p class="loading">"Loading module..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(m)) => {
                    let requested = requested.get();
                    let version = selected_version(&m, requested.as_deref());
                    let session = session.clone();
                    let toggle_star = toggle_star.clone();
                    let api = api.clone();
                    module_detail(m, version, requested, session, api, stars, status, toggle_star).into_any()
                }
            }}
        </section>
    }
}

#[allow(clippy::too_many_arguments)]
fn module_detail(
    module: Module,
    version: Option<ModuleVersion>,
    requested: Option<String>,
    session: SessionStore,
    api: ApiClient,
    stars: RwSignal<i64>,
    status: RwSignal<Option<String>>,
    toggle_star: impl Fn(u64) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let module_id = module.id;
    let authenticated = session.is_authenticated();
    let is_owner = {
        let me = session.user_record();
        !me.is_empty() && module.owners.iter().any(|o| o.id == me.id)
    };
    let star_session = session.clone();
    let starred = move || star_session.user_record().has_starred(module_id);

    let version_view = match (version, requested) {
        (Some(v), _) => view! {
            <dl class="module-page__version">
                <dt>"Version"</dt>
                <dd>{v.version}</dd>
                <dt>"Published"</dt>
                <dd>{v.created_at}</dd>
                <dt>"Repository"</dt>
                <dd><a href=v.repo.clone() target="_blank" rel="noopener">{v.repo.clone()}</a></dd>
                <dt>"Documentation"</dt>
                <dd><a href=v.documentation.clone() target="_blank" rel="noopener">{v.documentation.clone()}</a></dd>
                <dt>"SDK compatibility"</dt>
                <dd>{v.sdk_compat.unwrap_or_else(|| "unspecified".to_owned())}</dd>
            </dl>
        }
            .into_any(),
        (None, Some(wanted)) => view! { <p class="error">{format!("Version {wanted} not found.")}</p> }.into_any(),
        (None, None) => view! { <p>"No versions published yet."</p> }.into_any(),
    };

    let versions = module
        .versions
        .iter()
        .rev()
        .map(|v| {
            let href = AppRoute::ModuleVersion { id: module_id, version: v.version.clone() }.href();
            view! { <li><a href=href>{v.version.clone()}</a></li> }
        })
        .collect_view();

    let people = |users: &[crate::net::types::User]| {
        users
            .iter()
            .map(|u| {
                let href = AppRoute::Profile { name: u.name.clone() }.href();
                view! { <li><a href=href>{u.name.clone()}</a></li> }
            })
            .collect_view()
    };
    let owners = people(&module.owners);
    let authors = people(&module.authors);
    let keywords = module.keywords.iter().map(|k| k.name.clone()).collect::<Vec<_>>().join(", ");
    let bug_tracker = module.bug_tracker.url.clone().or_else(|| module.bug_tracker.contact.clone());

    view! {
        <header class="module-page__header">
            <h2>{module.name.clone()}</h2>
            <span class="module-page__team">{module.team.clone()}</span>
            <span class="module-page__stars">{move || format!("★ {}", stars.get())}</span>
            {authenticated.then(|| view! {
                <button class="btn module-page__star" on:click=move |_| toggle_star(module_id)>
                    {move || if starred() { "Unstar" } else { "Star" }}
                </button>
            })}
        </header>
        <p class="module-page__description">{module.description.clone()}</p>
        {homepage_link(&module).map(|homepage| {
            let href = homepage.clone();
            view! { <a class="module-page__homepage" href=href target="_blank" rel="noopener">{homepage}</a> }
        })}
        {version_view}
        <p class="module-page__keywords">{keywords}</p>
        {bug_tracker.map(|b| view! { <p class="module-page__bugs">"Issues: "{b}</p> })}
        <h3>"Versions"</h3>
        <ul class="module-page__versions">{versions}</ul>
        <h3>"Owners"</h3>
        <ul class="module-page__owners">{owners}</ul>
        <h3>"Authors"</h3>
        <ul class="module-page__authors">{authors}</ul>
        {is_owner.then(|| view! { <InviteOwnerForm api module_id status/> })}
    }
}

/// Invite another registry user to co-own a module.
#[component]
fn InviteOwnerForm(api: ApiClient, module_id: u64, status: RwSignal<Option<String>>) -> impl IntoView {
    let invitee = RwSignal::new(String::new());
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = invitee.get_untracked().trim().to_owned();
        if user.is_empty() {
            return;
        }
        let api = api.clone();
        spawn_browser(async move {
            match api.invite_module_owner(&user, module_id).await {
                Ok(_) => {
                    invitee.set(String::new());
                    status.set(Some(format!("Invitation sent to {user}.")));
                }
                Err(e) => status.set(Some(format!("Invite failed: {}", e.user_message()))),
            }
        });
    };

    view! {
        <form class="module-page__invite" on:submit=on_submit>
            <h3>"Invite an owner"</h3>
            <input
                type="text"
                placeholder="GitHub username"
                prop:value=move || invitee.get()
                on:input=move |ev| invitee.set(event_target_value(&ev))
            />
            <button class="btn" type="submit">
                "Invite"
            </button>
        </form>
    }
}
