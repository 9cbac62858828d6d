//! Browser navigation helpers. Require a browser environment; native builds
//! no-op.

/// Reload the current page so every view reinitializes.
pub fn reload_page() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Run a future on the browser's event loop; dropped in native builds.
pub fn spawn_browser<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(fut);
    }
}
