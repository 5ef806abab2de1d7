//! # camscout engine
//!
//! Finds RTSP cameras on the local `/24` and drives the streaming relay that
//! pulls video from one of them.
//!
//! * [`system`]: interface lookup (local address and subnet prefix).
//! * [`scanner`]: the concurrent port sweep.
//! * [`relay::config`]: rewrites the relay's `source:` line.
//! * [`relay::supervisor`]: owns the single relay process.
//! * [`controller`]: the facade a front end talks to.

pub mod controller;
pub mod error;
pub mod network;
pub mod relay;
pub mod scanner;
pub mod system;
