//! `contextwise doctor` — Diagnose config and live lookups.
//!
//! Runs each detector's collaborator directly so failures that the
//! dashboard would hide behind "Unknown" / "Unavailable" are visible.

use contextwise_config::AppConfig;
use contextwise_core::TouristCatalog;
use contextwise_core::probe::SystemInfo;
use contextwise_detectors::{ContextDetector, HostSystemInfo, resolve_device_context};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Contextwise Doctor — Context Diagnostics");
    println!("==========================================\n");

    let mut issues = 0;

    // Check config
    let config_path = AppConfig::config_dir().join("config.toml");
    if !config_path.exists() {
        println!("  ⚠️  No config file — using defaults (run `contextwise init`)");
    }
    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Config valid");
            config
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            issues += 1;
            AppConfig::default()
        }
    };

    // Check geolocation
    let detector = ContextDetector::from_config(&config)?;
    match detector
        .geo()
        .lookup()
        .await
        .map_err(contextwise_core::Error::from)
    {
        Ok(fix) => {
            println!(
                "  ✅ Geolocation ({}): {}, {}",
                detector.geo().name(),
                fix.city.as_deref().unwrap_or("?"),
                fix.country.as_deref().unwrap_or("?")
            );
            println!(
                "     {}",
                guide_note(fix.city.as_deref(), &TouristCatalog::builtin())
            );
        }
        Err(e) => {
            println!("  ❌ Geolocation ({}): {e}", detector.geo().name());
            issues += 1;
        }
    }

    // Check device
    let system = HostSystemInfo;
    println!("  ✅ Device: {}", resolve_device_context(&system));

    // Check network
    let resolved = tokio::task::spawn_blocking(move || {
        let host = system.hostname()?;
        let addrs = system.resolve_host(&host)?;
        Ok::<_, contextwise_core::error::LookupError>((host, addrs))
    })
    .await?;
    match resolved {
        Ok((host, addrs)) if !addrs.is_empty() => {
            let list: Vec<String> = addrs.iter().map(|ip| ip.to_string()).collect();
            println!("  ✅ Hostname {host} resolves to {}", list.join(", "));
        }
        Ok((host, _)) => {
            println!("  ❌ Hostname {host} has no addresses");
            issues += 1;
        }
        Err(e) => {
            println!("  ❌ Network: {e}");
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. The dashboard will show sentinels for these.");
    }

    Ok(())
}

/// Whether the tourist guide has dedicated spots for the detected city.
fn guide_note(city: Option<&str>, catalog: &TouristCatalog) -> String {
    let cities = catalog.cities();
    match city {
        Some(city) if cities.iter().any(|c| *c == city) => format!("Tourist guide covers {city}"),
        Some(city) => format!(
            "No tourist guide for {city}; showing the fallback (guided: {})",
            cities.join(", ")
        ),
        None => "No city detected; tourist guide will show the fallback".into(),
    }
}
