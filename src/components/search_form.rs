//! Module search box shared by the header and the landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::AppRoute;

/// Text input that navigates to the search route with `?q=` on submit.
/// Blank queries are ignored.
#[component]
pub fn SearchForm(#[prop(default = "search-form")] class: &'static str) -> impl IntoView {
    let navigate = use_navigate();
    let criteria = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = criteria.get_untracked().trim().to_owned();
        if query.is_empty() {
            return;
        }
        navigate(&AppRoute::search(query).href(), NavigateOptions::default());
    };

    view! {
        <form class=class on:submit=on_submit>
            <input
                class="search-form__input"
                type="search"
                placeholder="Search modules"
                prop:value=move || criteria.get()
                on:input=move |ev| criteria.set(event_target_value(&ev))
            />
            <button class="btn search-form__submit" type="submit">
                "Search"
            </button>
        </form>
    }
}
