pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, server_url_for};
pub use error::{ClientError, Result as CliClientResult};
