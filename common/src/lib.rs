//! Shared models for camscout.
//!
//! Everything in here is plain data or a pure helper: the subnet prefix and
//! scan result models, the relay status types reported by the supervisor,
//! the runtime [`config::Config`] and the fixed protocol constants.

pub mod config;
pub mod constants;
pub mod network;
pub mod relay;
