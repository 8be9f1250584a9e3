//! Remote-store boundary for the voterslip workspace.
//!
//! Owns the wire record types and their single coercion boundary
//! ([`record::Voter::from_raw`]), the [`store::VoterStore`] read contract,
//! a Firebase Realtime Database REST client, and an in-memory
//! implementation used by tests and demo mode.

pub mod error;
pub mod firebase;
pub mod memory;
pub mod record;
pub mod store;
