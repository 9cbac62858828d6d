//! Networking modules for the registry REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the wire seam, `client` turns a (method, path, body) triple
//! into a decoded result, `api` names every endpoint, `types` defines the
//! JSON schema, and `error` the failure taxonomy.

pub mod api;
pub mod client;
pub mod error;
#[cfg(test)]
pub(crate) mod mock;
pub mod transport;
pub mod types;
