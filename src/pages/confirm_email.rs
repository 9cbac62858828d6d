//! Landing page for the email confirmation link.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::Load;
use crate::routing::AppRoute;
use crate::state::session::SessionStore;
use crate::util::browser::spawn_browser;

#[component]
pub fn ConfirmEmailPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let params = use_params_map();
    let token = Memo::new(move |_| params.read().get("token").unwrap_or_default());
    let outcome = RwSignal::new(None::<Load<()>>);

    Effect::new(move || {
        let token = token.get();
        outcome.set(None);
        let store = session.clone();
        spawn_browser(async move {
            outcome.set(Some(store.confirm_email(&token).await));
        });
    });

    let account_href = AppRoute::Account.href();
    view! {
        <section class="confirm-page">
            {move || match outcome.get() {
                None => view! { <p class="loading">"Confirming your email..."</p> }.into_any(),
                Some(Ok(())) => {
                    view! {
                        <p>"Your email address is confirmed."</p>
                        <a class="btn" href=account_href.clone()>"Go to your account"</a>
                    }
                        .into_any()
                }
                Some(Err(e)) => view! { <p class="error">{format!("Confirmation failed: {e}")}</p> }.into_any(),
            }}
        </section>
    }
}
