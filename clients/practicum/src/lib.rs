mod client;
mod config;
mod error;

pub use client::PracticumClient;
pub use config::{PracticumClientConfig, DEFAULT_ENDPOINT};
pub use error::{FetchError, TransportKind};
