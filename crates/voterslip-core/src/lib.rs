//! Shared foundation for the voterslip workspace: configuration, the core
//! error type, cross-crate constants, and small text utilities.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
