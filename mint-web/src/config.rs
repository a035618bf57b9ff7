//! Application configuration
//!
//! One immutable bundle, built at startup: the supported chains, the app
//! name shown in wallet prompts, and the connector set offered for those
//! chains.

use shared::chain::{default_chains, ChainDescriptor};

use crate::services::wallet::{default_connectors, Connector};

/// Application name passed to wallet connectors.
pub const APP_NAME: &str = "Soroban NFTs";

/// Immutable startup configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub app_name: &'static str,
    pub chains: Vec<ChainDescriptor>,
    pub connectors: Vec<Connector>,
}

impl AppConfig {
    /// Build the configuration bundle. Infallible: connector detection
    /// reports a missing extension as a not-installed connector rather
    /// than failing startup.
    pub fn load() -> Self {
        let chains = default_chains();
        let connectors = default_connectors(APP_NAME, &chains);
        log::info!(
            "configured {} chain(s), {} connector(s)",
            chains.len(),
            connectors.len()
        );
        Self {
            app_name: APP_NAME,
            chains,
            connectors,
        }
    }
}
