//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the login/session mirror; `storage` is the persisted
//! login hint it caches into.

pub mod session;
pub mod storage;
