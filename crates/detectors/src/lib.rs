//! Live context detectors for Contextwise.
//!
//! Each detector produces one atomic fact and never fails: when its
//! collaborator cannot answer, the detector substitutes a sentinel
//! ("Unknown" / "Unavailable") and logs the cause at debug level.
//!
//! The collaborators are injected ([`GeoLookup`], [`SystemInfo`]) so tests
//! can run without a network or a particular OS.

pub mod host;
pub mod ipinfo;

use std::net::IpAddr;
use std::sync::Arc;

use contextwise_config::AppConfig;
use contextwise_core::context::{UNAVAILABLE, UNKNOWN};
use contextwise_core::error::LookupError;
use contextwise_core::probe::{GeoLookup, SystemInfo};
use contextwise_core::{EnvironmentFacts, LocationContext};
use tracing::debug;

pub use contextwise_core::context::resolve_time_context;
pub use host::HostSystemInfo;
pub use ipinfo::{DisabledGeoLookup, IpInfoLookup};

/// Ask the geolocation collaborator for (city, country).
///
/// Any failure yields ("Unknown", "Unknown"); a missing field yields
/// "Unknown" for that field alone.
pub async fn resolve_location_context(geo: &dyn GeoLookup) -> LocationContext {
    match geo.lookup().await {
        Ok(fix) => LocationContext::new(
            fix.city.unwrap_or_else(|| UNKNOWN.to_string()),
            fix.country.unwrap_or_else(|| UNKNOWN.to_string()),
        ),
        Err(e) => {
            debug!(lookup = geo.name(), error = %e, "Location unavailable, using sentinel");
            LocationContext::unknown()
        }
    }
}

/// `"<system-name> - <release-version>"`.
pub fn resolve_device_context(system: &dyn SystemInfo) -> String {
    format!("{} - {}", system.system_name(), system.release())
}

/// The IP address this machine's hostname resolves to, or "Unavailable".
pub fn resolve_network_context(system: &dyn SystemInfo) -> String {
    match local_address(system) {
        Ok(ip) => ip.to_string(),
        Err(e) => {
            debug!(error = %e, "Network address unavailable, using sentinel");
            UNAVAILABLE.to_string()
        }
    }
}

fn local_address(system: &dyn SystemInfo) -> Result<IpAddr, LookupError> {
    let host = system.hostname()?;
    let addrs = system.resolve_host(&host)?;

    // Prefer IPv4, as a gethostbyname-style lookup would.
    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| LookupError::Resolution(format!("{host} has no addresses")))
}

/// Gathers every live fact for one render pass.
#[derive(Clone)]
pub struct ContextDetector {
    geo: Arc<dyn GeoLookup>,
    system: Arc<dyn SystemInfo>,
}

impl ContextDetector {
    pub fn new(geo: Arc<dyn GeoLookup>, system: Arc<dyn SystemInfo>) -> Self {
        Self { geo, system }
    }

    /// Build the live detector described by the configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, LookupError> {
        let geo: Arc<dyn GeoLookup> = if config.geolocation.enabled {
            Arc::new(IpInfoLookup::new(config.geolocation.endpoint.clone())?)
        } else {
            Arc::new(DisabledGeoLookup)
        };
        Ok(Self::new(geo, Arc::new(HostSystemInfo)))
    }

    pub fn geo(&self) -> &dyn GeoLookup {
        self.geo.as_ref()
    }

    /// Run the location, device and network detectors in sequence.
    pub async fn detect(&self) -> EnvironmentFacts {
        let location = resolve_location_context(self.geo.as_ref()).await;
        let device = resolve_device_context(self.system.as_ref());

        // Hostname resolution may block on DNS.
        let system = self.system.clone();
        let network = tokio::task::spawn_blocking(move || resolve_network_context(system.as_ref()))
            .await
            .unwrap_or_else(|_| UNAVAILABLE.to_string());

        EnvironmentFacts {
            location,
            device,
            network,
        }
    }
}
