use std::sync::Arc;

use shipform_core::validation::shipping::ShippingRules;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Shipping rules compiled once at startup.
    pub rules: Arc<ShippingRules>,
}

impl AppState {
    /// Compile the shipping rules from `config` and wrap both for sharing.
    pub fn new(config: ServerConfig) -> Result<Self, shipform_core::error::CoreError> {
        let rules = config.shipping.clone().compile()?;
        Ok(Self {
            config: Arc::new(config),
            rules: Arc::new(rules),
        })
    }
}
