//! Search results for `/search?q=...&page=...`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::{Load, page_param};
use crate::components::module_list::{ModuleList, Pager};
use crate::net::api::PageQuery;
use crate::net::client::ApiClient;
use crate::net::types::{Module, Paginated};
use crate::util::browser::spawn_browser;
use crate::util::url::encode_component;

fn search_page_href(query: &str, page: u64) -> String {
    format!("/search?q={}&page={page}", encode_component(query))
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let query_map = use_query_map();
    let query = Memo::new(move |_| query_map.read().get("q").unwrap_or_default());
    let page = Memo::new(move |_| page_param(query_map.read().get("page").as_deref()));
    let results = RwSignal::new(None::<Load<Paginated<Module>>>);

    Effect::new(move || {
        let q = query.get();
        let page = page.get();
        results.set(None);
        let api = api.clone();
        spawn_browser(async move {
            let found = api.search_modules(&q, PageQuery::page(page)).await.map_err(|e| e.user_message());
            results.set(Some(found));
        });
    });

    view! {
        <section class="search-page">
            <h2>{move || format!("Results for \"{}\"", query.get())}</h2>
            {move || match results.get() {
                None => view! { <p class="loading">"Searching..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(found)) => {
                    let q = query.get_untracked();
                    let prev_href = found.has_prev().then(|| search_page_href(&q, found.page - 1));
                    let next_href = found.has_next().then(|| search_page_href(&q, found.page + 1));
                    view! {
                        <p class="search-page__total">{format!("{} modules", found.total)}</p>
                        <ModuleList modules=found.results/>
                        <Pager prev_href next_href/>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
