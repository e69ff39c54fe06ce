//! In-process capability registry.
//!
//! Stands in for the host framework's platform loader: assigns entity ids,
//! keeps track of registered capabilities, and drives the periodic refresh
//! cycle the host would otherwise schedule.

use crate::capability::Capability;
use crate::client::ExchangeOutcome;
use crate::error::Result;
use log::{info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One registered capability together with its host-assigned entity id.
pub struct RegisteredCapability {
    entity_id: String,
    capability: Arc<dyn Capability>,
    /// Cleared when the last exchange failed at the transport level,
    /// set again by the next successful one.
    available: AtomicBool,
}

impl RegisteredCapability {
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn capability(&self) -> &Arc<dyn Capability> {
        &self.capability
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

/// Registry of every capability the integration has exposed to the host.
#[derive(Default)]
pub struct CapabilityRegistry {
    entries: Vec<RegisteredCapability>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability and assign it an entity id in the host's
    /// `domain.object_id` form. Returns the assigned id.
    pub fn register(&mut self, capability: Arc<dyn Capability>) -> String {
        let entity_id = format!(
            "{}.{}",
            capability.kind().domain(),
            slugify(&capability.display_name())
        );
        info!(
            "Registered capability {:?} as {}",
            capability.display_name(),
            entity_id
        );
        self.entries.push(RegisteredCapability {
            entity_id: entity_id.clone(),
            capability,
            available: AtomicBool::new(true),
        });
        entity_id
    }

    pub fn get(&self, entity_id: &str) -> Option<&RegisteredCapability> {
        self.entries.iter().find(|e| e.entity_id == entity_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredCapability> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_available(&self, entity_id: &str) -> bool {
        self.get(entity_id).is_some_and(|e| e.is_available())
    }

    /// Drive one refresh cycle across every registered capability.
    ///
    /// Each capability is refreshed with its own entity id. A transport
    /// failure marks only that capability unavailable and never aborts the
    /// cycle; a successful exchange marks it available again.
    pub async fn refresh_all(&self) {
        for entry in &self.entries {
            match entry.capability.refresh(&entry.entity_id).await {
                Ok(_) => entry.available.store(true, Ordering::SeqCst),
                Err(e) => {
                    warn!("{} is unavailable: {}", entry.entity_id, e);
                    entry.available.store(false, Ordering::SeqCst);
                }
            }
        }
    }

    /// Invoke an action capability by entity id.
    ///
    /// Availability is updated the same way as on refresh. Returns `None`
    /// for an unknown entity id.
    pub async fn invoke(&self, entity_id: &str) -> Option<Result<ExchangeOutcome>> {
        let entry = self.get(entity_id)?;
        let result = entry.capability.invoke().await;
        entry.available.store(result.is_ok(), Ordering::SeqCst);
        Some(result)
    }
}

/// Lowercase the display name and collapse anything non-alphanumeric to `_`.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_sep = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            slug.push('_');
            last_was_sep = true;
        }
    }
    if slug.ends_with('_') {
        slug.pop();
    }
    slug
}
