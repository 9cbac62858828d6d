use leptos::prelude::*;

#[component]
pub fn AppFooter() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <span>"Atlas module registry"</span>
            <a href="https://github.com/cosmos/atlas" target="_blank" rel="noopener">
                "Source"
            </a>
        </footer>
    }
}
