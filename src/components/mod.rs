//! Reusable UI components shared across pages.

pub mod footer;
pub mod header;
pub mod module_list;
pub mod search_form;
