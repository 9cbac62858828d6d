//! Module summary cards and list pagination.

use leptos::prelude::*;

use crate::net::types::Module;
use crate::routing::AppRoute;

/// One module summary linking to its detail page.
#[component]
pub fn ModuleCard(module: Module) -> impl IntoView {
    let href = AppRoute::Module { id: module.id }.href();
    let version = module.latest_version().map(|v| v.version.clone()).unwrap_or_default();
    let keywords = module.keywords.iter().map(|k| k.name.clone()).collect::<Vec<_>>().join(", ");

    view! {
        <article class="module-card">
            <a class="module-card__name" href=href>
                {module.name}
            </a>
            <span class="module-card__team">{module.team}</span>
            <span class="module-card__version">{version}</span>
            <span class="module-card__stars">{format!("★ {}", module.stars)}</span>
            <p class="module-card__description">{module.description}</p>
            <p class="module-card__keywords">{keywords}</p>
        </article>
    }
}

/// Cards for a list of modules, or an empty-state message.
#[component]
pub fn ModuleList(modules: Vec<Module>) -> impl IntoView {
    if modules.is_empty() {
        return view! { <p class="module-list__empty">"No modules found."</p> }.into_any();
    }
    view! {
        <div class="module-list">
            {modules.into_iter().map(|module| view! { <ModuleCard module/> }).collect_view()}
        </div>
    }
        .into_any()
}

/// Previous/next links for a paginated list.
#[component]
pub fn Pager(prev_href: Option<String>, next_href: Option<String>) -> impl IntoView {
    view! {
        <nav class="pager">
            {prev_href.map(|href| view! { <a class="btn pager__prev" href=href>"Previous"</a> })}
            {next_href.map(|href| view! { <a class="btn pager__next" href=href>"Next"</a> })}
        </nav>
    }
}
