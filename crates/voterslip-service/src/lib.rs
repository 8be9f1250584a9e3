//! Lookup dispatch and slip formatting for the voterslip workspace.
//!
//! `search` holds the query core: the combined dispatcher, the phone and
//! name paths, the exact lookups, and the roll listing. `slip` holds the
//! pure formatters that turn a voter into shareable artifacts.

pub mod error;
pub mod search;
pub mod slip;

mod slip_tests;
