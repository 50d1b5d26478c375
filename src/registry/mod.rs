/// Remote card-registry client over HTTP/JSON.
pub mod client;
pub mod decode;
pub mod errors;

pub use client::{DEFAULT_HOST, DEFAULT_PORT, RegistryClient, RegistryConfig};
pub use errors::RegistryError;
