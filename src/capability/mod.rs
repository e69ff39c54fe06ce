//! Capability adapters exposed to the host automation framework.
//!
//! Each adapter is one controllable or observable feature of the doorbell.
//! The host holds adapters behind the [`Capability`] trait and drives them
//! through user actions (`invoke`) and scheduled refresh cycles (`refresh`).

pub mod image;
pub mod opener;
pub mod ring;

pub use image::ImageReference;
pub use opener::Opener;
pub use ring::RingTrigger;

use crate::client::ExchangeOutcome;
use crate::error::Result;
use async_trait::async_trait;

/// What kind of entity surface the host should give a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    /// Momentary fire-and-forget action, button-like.
    Action,
    /// Trigger whose device sync runs on every host refresh cycle.
    Trigger,
    /// Static URL the host fetches and renders on its own schedule.
    ImageReference,
}

impl CapabilityKind {
    /// Entity-id domain used by the host.
    pub fn domain(&self) -> &'static str {
        match self {
            CapabilityKind::Action => "button",
            CapabilityKind::Trigger => "siren",
            CapabilityKind::ImageReference => "image",
        }
    }
}

/// One controllable or observable doorbell feature.
///
/// Operations that do not apply to a given capability keep their no-op
/// defaults; the host only calls what the capability's kind advertises.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Stable unique id namespaced by device id, when the capability has one.
    fn unique_id(&self) -> Option<String> {
        None
    }

    fn display_name(&self) -> String;

    fn icon(&self) -> Option<&'static str> {
        None
    }

    fn kind(&self) -> CapabilityKind;

    /// Run the capability's action once, on explicit user or automation
    /// action. Device-side rejections come back as soft failures inside the
    /// outcome; only transport failures are errors.
    async fn invoke(&self) -> Result<ExchangeOutcome> {
        Ok(ExchangeOutcome::Success { body: None })
    }

    /// Host-driven refresh cycle. `entity_id` is the identifier the host
    /// assigned to this capability at registration time.
    async fn refresh(&self, _entity_id: &str) -> Result<ExchangeOutcome> {
        Ok(ExchangeOutcome::Success { body: None })
    }

    /// URL the host should fetch for image-reference capabilities.
    fn image_url(&self) -> Option<&str> {
        None
    }

    /// Whether the host's image fetcher should verify TLS certificates.
    fn verify_tls(&self) -> bool {
        false
    }
}
