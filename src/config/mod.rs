//! Configuration module for tldw.
//!
//! All configuration comes from environment variables, read once at startup.

mod settings;

pub use settings::{EndpointSettings, Provider, ProviderConfig, Settings};
