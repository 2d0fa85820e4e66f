//! gs-cli library
//!
//! Exports the HTTP client for use in tests and other crates.

pub(crate) mod client;
pub mod sse_decoder;
pub mod watch_target;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, server_url_for};
pub use sse_decoder::SseDecoder;
pub use watch_target::WatchTarget;
