//! Account page: profile email and API token management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable through the auth guard. Every change goes through
//! `SessionStore` actions so the header and other views see the same state;
//! failures land in the page's status line.

use leptos::prelude::*;

use crate::net::types::{UserToken, UserUpdate};
use crate::state::session::SessionStore;
use crate::util::body_class::use_body_class;
use crate::util::browser::spawn_browser;

#[component]
pub fn AccountPage() -> impl IntoView {
    use_body_class("account-page");
    let session = expect_context::<SessionStore>();

    let status = RwSignal::new(None::<String>);
    let email = RwSignal::new(session.user_record().email.unwrap_or_default());
    let token_name = RwSignal::new(String::new());
    let created_token = RwSignal::new(None::<UserToken>);
    let busy = RwSignal::new(false);

    // Pick up the email once the background user fetch lands.
    let email_session = session.clone();
    Effect::new(move || {
        if let Some(current) = email_session.user_record().email {
            if email.get_untracked().is_empty() {
                email.set(current);
            }
        }
    });

    let tokens_session = session.clone();
    spawn_browser(async move { tokens_session.fetch_tokens().await });

    let update_session = session.clone();
    let on_update_email = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let update = UserUpdate { email: email.get_untracked().trim().to_owned() };
        if update.email.is_empty() {
            status.set(Some("Enter an email address first.".to_owned()));
            return;
        }
        busy.set(true);
        let store = update_session.clone();
        spawn_browser(async move {
            match store.update_user(&update).await {
                Ok(()) => status.set(Some("Email updated. Check your inbox to confirm it.".to_owned())),
                Err(e) => status.set(Some(format!("Update failed: {e}"))),
            }
            busy.set(false);
        });
    };

    let create_session = session.clone();
    let on_create_token = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name = token_name.get_untracked().trim().to_owned();
        if name.is_empty() {
            status.set(Some("Give the token a name.".to_owned()));
            return;
        }
        busy.set(true);
        let store = create_session.clone();
        spawn_browser(async move {
            match store.create_token(&name).await {
                Ok(token) => {
                    created_token.set(Some(token));
                    token_name.set(String::new());
                    status.set(None);
                }
                Err(e) => status.set(Some(format!("Token creation failed: {e}"))),
            }
            busy.set(false);
        });
    };

    let list_session = session.clone();
    let revoke_session = session.clone();
    let profile_session = session;

    view! {
        <section class="account-page__body">
            <header class="account-page__header">
                <h2>{move || profile_session.user_record().name}</h2>
                <Show when=move || status.get().is_some()>
                    <p class="account-page__status">{move || status.get().unwrap_or_default()}</p>
                </Show>
            </header>

            <form class="account-page__email" on:submit=on_update_email>
                <label for="account-email">"Email"</label>
                <input
                    id="account-email"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Update"
                </button>
            </form>

            <h3>"API tokens"</h3>
            <form class="account-page__token-create" on:submit=on_create_token>
                <input
                    type="text"
                    placeholder="Token name"
                    prop:value=move || token_name.get()
                    on:input=move |ev| token_name.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Create token"
                </button>
            </form>
            <Show when=move || created_token.get().is_some()>
                <p class="account-page__new-token">
                    "New token (copy it now): "
                    <code>{move || created_token.get().map(|t| t.token.to_string()).unwrap_or_default()}</code>
                </p>
            </Show>

            <table class="account-page__tokens">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Created"</th>
                        <th>"Uses"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list_session.user_tokens()
                        key=|token| token.id
                        children=move |token: UserToken| {
                            let store = revoke_session.clone();
                            let target = token.clone();
                            view! {
                                <tr>
                                    <td>{token.name}</td>
                                    <td>{token.created_at}</td>
                                    <td>{token.count}</td>
                                    <td>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| {
                                                let store = store.clone();
                                                let target = target.clone();
                                                spawn_browser(async move {
                                                    if let Err(e) = store.revoke_token(&target).await {
                                                        status.set(Some(format!("Revoke failed: {e}")));
                                                    }
                                                });
                                            }
                                        >
                                            "Revoke"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
