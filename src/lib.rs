//! Doorbell bridge library.
//!
//! Exposes a networked doorbell/intercom (door-open relay, ring trigger,
//! camera snapshot) as capabilities a host automation hub can register and
//! drive. Each capability action is one HTTP exchange against the device's
//! local REST API.

pub mod bootstrap;
pub mod capability;
pub mod client;
pub mod config;
pub mod error;
pub mod registry;

#[cfg(test)]
mod testutil;
