//! Per-view `<body>` class management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Some pages restyle the whole document (e.g. the landing page background).
//! A page opts in by calling [`use_body_class`] in its component body: the
//! class is added on mount and removed when the view is torn down.

#[cfg(test)]
#[path = "body_class_test.rs"]
mod body_class_test;

use leptos::prelude::on_cleanup;

/// Something with a class list.
pub trait ClassTarget: Send + Sync {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// The document `<body>` element. No-op off the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentBody;

impl ClassTarget for DocumentBody {
    fn add_class(&self, class: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.class_list().add_1(class);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = class;
        }
    }

    fn remove_class(&self, class: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.class_list().remove_1(class);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = class;
        }
    }
}

/// Adds `class` to a target while mounted. Mount/unmount are idempotent.
#[derive(Debug)]
pub struct BodyClass<T: ClassTarget> {
    class: String,
    target: T,
    mounted: bool,
}

impl<T: ClassTarget> BodyClass<T> {
    pub fn new(class: impl Into<String>, target: T) -> Self {
        Self { class: class.into(), target, mounted: false }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) {
        if self.mounted || self.class.is_empty() {
            return;
        }
        self.target.add_class(&self.class);
        self.mounted = true;
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.target.remove_class(&self.class);
        self.mounted = false;
    }
}

/// Mount `class` on `<body>` for the lifetime of the calling component.
pub fn use_body_class(class: &'static str) {
    let mut helper = BodyClass::new(class, DocumentBody);
    helper.mount();
    on_cleanup(move || helper.unmount());
}
