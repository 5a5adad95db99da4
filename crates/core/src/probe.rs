//! Collaborator traits: the abstraction over live environment lookups.
//!
//! Detectors never touch the network or the OS directly. They ask a
//! [`GeoLookup`] or a [`SystemInfo`], so tests can substitute deterministic
//! fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::error::LookupError;

/// What an IP-geolocation service told us. Both fields are optional on the
/// wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoFix {
    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub country: Option<String>,
}

/// Capability to geolocate the current machine.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// A short name for diagnostics (e.g. "ipinfo").
    fn name(&self) -> &str;

    /// Perform one lookup. No retries.
    async fn lookup(&self) -> Result<GeoFix, LookupError>;
}

/// Capability to introspect the local platform and network identity.
pub trait SystemInfo: Send + Sync {
    /// Operating system name, e.g. "Linux".
    fn system_name(&self) -> String;

    /// Operating system release, e.g. a kernel version.
    fn release(&self) -> String;

    /// This machine's hostname.
    fn hostname(&self) -> Result<String, LookupError>;

    /// Resolve a hostname to its addresses.
    fn resolve_host(&self, host: &str) -> Result<Vec<IpAddr>, LookupError>;
}
