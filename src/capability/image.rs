//! Camera snapshot reference.

use super::{Capability, CapabilityKind};
use crate::config::DeviceConfig;

/// Exposes the doorbell's camera snapshot URL.
///
/// Pure accessor: the host fetches and renders the URL on its own schedule,
/// this capability never performs a request itself. The URL is precomputed
/// at construction and stable for the capability's lifetime.
pub struct ImageReference {
    name: String,
    url: String,
    verify_tls: bool,
}

impl ImageReference {
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            name: config.name.clone(),
            url: config.endpoint("/cameraimage"),
            verify_tls: config.verify_tls,
        }
    }
}

impl Capability for ImageReference {
    fn display_name(&self) -> String {
        format!("{} Image", self.name)
    }

    fn kind(&self) -> CapabilityKind {
        CapabilityKind::ImageReference
    }

    fn image_url(&self) -> Option<&str> {
        Some(&self.url)
    }

    fn verify_tls(&self) -> bool {
        self.verify_tls
    }
}
