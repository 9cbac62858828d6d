//! Paginated listing of every published module.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::{Load, page_param};
use crate::components::module_list::{ModuleList, Pager};
use crate::net::api::PageQuery;
use crate::net::client::ApiClient;
use crate::net::types::{Module, Paginated};
use crate::routing::AppRoute;
use crate::util::browser::spawn_browser;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let query_map = use_query_map();
    let page = Memo::new(move |_| page_param(query_map.read().get("page").as_deref()));
    let modules = RwSignal::new(None::<Load<Paginated<Module>>>);

    Effect::new(move || {
        let page = page.get();
        modules.set(None);
        let api = api.clone();
        spawn_browser(async move {
            let listed = api.get_modules(PageQuery::page(page)).await.map_err(|e| e.user_message());
            modules.set(Some(listed));
        });
    });

    view! {
        <section class="browse-page">
            <h2>"All modules"</h2>
            {move || match modules.get() {
                None => view! { <p class="loading">"Loading modules..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(listed)) => {
                    let prev_href = listed.has_prev().then(|| AppRoute::Browse { page: listed.page - 1 }.href());
                    let next_href = listed.has_next().then(|| AppRoute::Browse { page: listed.page + 1 }.href());
                    view! {
                        <ModuleList modules=listed.results/>
                        <Pager prev_href next_href/>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
