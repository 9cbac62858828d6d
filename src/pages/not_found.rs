use leptos::prelude::*;

use crate::routing::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let home_href = AppRoute::Home.href();
    view! {
        <section class="not-found-page">
            <h2>"Page not found"</h2>
            <p>"There is nothing at this address."</p>
            <a class="btn" href=home_href>"Back to the registry"</a>
        </section>
    }
}
