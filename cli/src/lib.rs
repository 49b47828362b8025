//! Host side of the API bridge.
//!
//! `api_bridge_core` decides what to send and how to report it; this crate
//! owns the process: command line and environment, stderr logging, and the
//! blocking `ureq` transport that performs the one HTTP call.

pub mod cli;
pub mod logging;
pub mod transport;
