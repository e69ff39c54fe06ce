//! Integration bootstrap: validate configuration and register capabilities.
//!
//! Everything that can fail — configuration validation, building the shared
//! HTTP client — happens before the first registration, so a bad setup
//! leaves the registry exactly as it was found.

use crate::capability::{ImageReference, Opener, RingTrigger};
use crate::client::DeviceClient;
use crate::config::DeviceConfig;
use crate::error::Result;
use crate::registry::CapabilityRegistry;
use log::info;
use serde_json::Value;
use std::sync::Arc;

/// Entity ids the host assigned to the doorbell's capabilities.
#[derive(Debug, Clone)]
pub struct Registration {
    pub opener_entity_id: String,
    pub ring_entity_id: String,
    pub image_entity_id: String,
}

/// Validate a raw configuration table and register the doorbell.
pub fn setup_from_value(raw: &Value, registry: &mut CapabilityRegistry) -> Result<Registration> {
    let config = DeviceConfig::from_value(raw)?;
    setup(&config, registry)
}

/// Register the doorbell's three capabilities with the host.
pub fn setup(config: &DeviceConfig, registry: &mut CapabilityRegistry) -> Result<Registration> {
    info!(
        "Setting up doorbell {:?} at {}",
        config.name,
        config.base_url()
    );

    let client = Arc::new(DeviceClient::new(config)?);

    let opener = Arc::new(Opener::new(config, client.clone()));
    let ring = Arc::new(RingTrigger::new(config, client));
    let image = Arc::new(ImageReference::new(config));

    Ok(Registration {
        opener_entity_id: registry.register(opener),
        ring_entity_id: registry.register(ring),
        image_entity_id: registry.register(image),
    })
}
