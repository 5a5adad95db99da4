//! `contextwise show` — Detect contexts and print the dashboard as text.

use chrono::Local;
use contextwise_config::AppConfig;
use contextwise_core::view::headings;
use contextwise_core::{KnowledgeBase, Role, TouristCatalog, ViewModel, compute_view_model};
use contextwise_detectors::ContextDetector;

pub async fn run(role: Option<Role>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let detector = ContextDetector::from_config(&config)?;

    let facts = detector.detect().await;
    let vm = compute_view_model(
        &Local::now().time(),
        role.unwrap_or(config.dashboard.default_role),
        &facts,
        &KnowledgeBase::builtin(),
        &TouristCatalog::builtin(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&vm)?);
    } else {
        print!("{}", render_text(&vm));
    }

    Ok(())
}

/// Plain-text rendering of the dashboard, minus the diagram.
pub fn render_text(vm: &ViewModel) -> String {
    let mut out = String::new();
    let rule = "=".repeat(vm.title.chars().count());

    out.push_str(&format!("{}\n{rule}\n\n", vm.title));

    out.push_str(&format!("{}\n", headings::CONTEXTS));
    out.push_str(&format!("  Time Context:     {}\n", vm.time));
    out.push_str(&format!("  Location Context: {}\n", vm.location));
    out.push_str(&format!("  Device Context:   {}\n", vm.device));
    out.push_str(&format!("  Network Context:  {}\n", vm.network));
    out.push_str(&format!("  Role Context:     {}\n\n", vm.role));

    out.push_str(&format!("{}\n", headings::SERVICES));
    out.push_str(&format!("  ✅ {}\n\n", vm.service));

    out.push_str(&format!("{}\n", headings::TOURISM));
    out.push_str(&format!("  ℹ️  {}\n", vm.tourism.message));
    out.push_str("  Recommended spots:\n");
    for spot in &vm.tourism.spots {
        out.push_str(&format!("   - {spot}\n"));
    }

    out
}
