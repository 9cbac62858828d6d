//! Landing page with the primary search box.

use leptos::prelude::*;

use crate::components::search_form::SearchForm;
use crate::routing::AppRoute;
use crate::util::body_class::use_body_class;

#[component]
pub fn HomePage() -> impl IntoView {
    use_body_class("landing-page");
    let browse_href = AppRoute::Browse { page: 1 }.href();

    view! {
        <section class="home-page">
            <h1 class="home-page__title">"Atlas"</h1>
            <p class="home-page__subtitle">"Discover and share Cosmos SDK modules."</p>
            <SearchForm class="search-form search-form--hero"/>
            <a class="btn home-page__browse" href=browse_href>
                "Browse all modules"
            </a>
        </section>
    }
}
