//! Local platform and network identity.

use contextwise_core::error::LookupError;
use contextwise_core::probe::SystemInfo;
use std::net::{IpAddr, ToSocketAddrs};

/// [`SystemInfo`] backed by the running host.
///
/// The system name is the kernel name ("Linux", "Darwin", "Windows"), not a
/// distribution name. The release comes from `sysinfo`, with "unknown"
/// standing in when it cannot tell, so device detection never fails.
pub struct HostSystemInfo;

/// Kernel name for a `std::env::consts::OS` value, spelled as `uname -s`
/// spells it.
fn kernel_name(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".into(),
        "macos" | "ios" => "Darwin".into(),
        "windows" => "Windows".into(),
        "freebsd" => "FreeBSD".into(),
        "openbsd" => "OpenBSD".into(),
        "netbsd" => "NetBSD".into(),
        "dragonfly" => "DragonFly".into(),
        "solaris" | "illumos" => "SunOS".into(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => "Unknown".into(),
            }
        }
    }
}

impl SystemInfo for HostSystemInfo {
    fn system_name(&self) -> String {
        kernel_name(std::env::consts::OS)
    }

    fn release(&self) -> String {
        sysinfo::System::kernel_version().unwrap_or_else(|| "unknown".to_string())
    }

    fn hostname(&self) -> Result<String, LookupError> {
        hostname::get()
            .map_err(|e| LookupError::Resolution(e.to_string()))?
            .into_string()
            .map_err(|_| LookupError::Resolution("hostname is not valid UTF-8".into()))
    }

    fn resolve_host(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        let addrs = (host, 0)
            .to_socket_addrs()
            .map_err(|e| LookupError::Resolution(e.to_string()))?;
        Ok(addrs.map(|a| a.ip()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_facts_are_never_empty() {
        let host = HostSystemInfo;
        assert!(!host.system_name().is_empty());
        assert!(!host.release().is_empty());
    }

    #[test]
    fn kernel_names_match_uname() {
        assert_eq!(kernel_name("linux"), "Linux");
        assert_eq!(kernel_name("macos"), "Darwin");
        assert_eq!(kernel_name("windows"), "Windows");
        assert_eq!(kernel_name("haiku"), "Haiku");
        assert_eq!(kernel_name(""), "Unknown");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn live_system_name_is_kernel_not_distribution() {
        let name = HostSystemInfo.system_name();
        assert_eq!(name, "Linux");

        let device = crate::resolve_device_context(&HostSystemInfo);
        assert!(device.starts_with("Linux - "), "device was {device}");
    }

    #[test]
    fn localhost_resolves_to_loopback() {
        let addrs = HostSystemInfo.resolve_host("localhost").unwrap();
        assert!(addrs.iter().any(|ip| ip.is_loopback()));
    }

    #[test]
    fn bogus_host_fails_to_resolve() {
        let result = HostSystemInfo.resolve_host("no-such-host.invalid");
        assert!(matches!(result, Err(LookupError::Resolution(_))));
    }
}
