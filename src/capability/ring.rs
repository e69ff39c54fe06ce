//! Ring-trigger capability (siren-like).

use super::{Capability, CapabilityKind};
use crate::client::{DeviceClient, ExchangeOutcome};
use crate::config::DeviceConfig;
use crate::error::Result;
use async_trait::async_trait;
use log::error;
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;

/// Request body for the device's `/configure` endpoint.
#[derive(Debug, Serialize)]
struct ConfigureRequest<'a> {
    siren_entity_id: &'a str,
}

/// Keeps the doorbell informed of which entity to notify on a ring.
///
/// Unlike the opener, this capability talks to the device on every host
/// refresh cycle, not only on explicit action: each cycle re-announces the
/// host-assigned entity id so the device knows where to direct a physical
/// ring event.
pub struct RingTrigger {
    device_id: String,
    name: String,
    url: String,
    client: Arc<DeviceClient>,
}

impl RingTrigger {
    pub fn new(config: &DeviceConfig, client: Arc<DeviceClient>) -> Self {
        Self {
            device_id: config.id.clone(),
            name: config.name.clone(),
            url: config.endpoint("/configure"),
            client,
        }
    }
}

#[async_trait]
impl Capability for RingTrigger {
    fn unique_id(&self) -> Option<String> {
        Some(format!("doorbellsiren{}", self.device_id))
    }

    fn display_name(&self) -> String {
        format!("{} Ring", self.name)
    }

    fn icon(&self) -> Option<&'static str> {
        Some("mdi:bell-ring")
    }

    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Trigger
    }

    async fn refresh(&self, entity_id: &str) -> Result<ExchangeOutcome> {
        let body = serde_json::to_value(ConfigureRequest {
            siren_entity_id: entity_id,
        })?;
        let outcome = self
            .client
            .execute(Method::POST, &self.url, Some(&body))
            .await?;
        if let Some(message) = outcome.device_error() {
            error!("{}", message);
        }
        Ok(outcome)
    }
}
