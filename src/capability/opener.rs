//! Door-opener capability (momentary action).

use super::{Capability, CapabilityKind};
use crate::client::{DeviceClient, ExchangeOutcome};
use crate::config::DeviceConfig;
use crate::error::Result;
use async_trait::async_trait;
use log::error;
use reqwest::Method;
use std::sync::Arc;

/// Fires a single door-open request at the doorbell.
///
/// The action is fire-and-forget: the device is the source of truth for the
/// physical effect, so a 200 answer is all the confirmation there is. There
/// is no state to poll.
pub struct Opener {
    device_id: String,
    name: String,
    url: String,
    client: Arc<DeviceClient>,
}

impl Opener {
    pub fn new(config: &DeviceConfig, client: Arc<DeviceClient>) -> Self {
        Self {
            device_id: config.id.clone(),
            name: config.name.clone(),
            url: config.endpoint("/opendoor"),
            client,
        }
    }
}

#[async_trait]
impl Capability for Opener {
    fn unique_id(&self) -> Option<String> {
        Some(format!("doorbellopener{}", self.device_id))
    }

    fn display_name(&self) -> String {
        format!("{} Open", self.name)
    }

    fn icon(&self) -> Option<&'static str> {
        Some("mdi:lock-open")
    }

    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Action
    }

    async fn invoke(&self) -> Result<ExchangeOutcome> {
        let outcome = self.client.execute(Method::POST, &self.url, None).await?;
        if let Some(message) = outcome.device_error() {
            error!("{}", message);
        }
        Ok(outcome)
    }
}
