//! Shared building blocks for the homeledger crates: errors, settings and constants.

pub mod config;
pub mod constants;
pub mod error;
