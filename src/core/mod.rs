//! Core library components.
//!
//! Environment resolution, secret materialization and the secret store
//! backends. Nothing in here writes to stdout.

pub mod config;
pub mod constants;
pub mod environment;
pub mod export;
pub mod materialize;
pub mod payload;
pub mod store;
pub mod types;
