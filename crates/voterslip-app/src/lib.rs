//! HTTP surface of the voterslip lookup service.
//!
//! The binary in `main.rs` wires configuration, tracing, and the store
//! client, then serves the router assembled in [`app::api`].

pub mod app;
pub mod config;
pub mod error;
pub mod store_handler;
