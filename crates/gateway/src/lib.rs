//! HTTP gateway for Contextwise.
//!
//! Serves the single-page dashboard, its SVG diagram, a health check,
//! and the v1 JSON API over the same view model.
//!
//! Built on Axum.

pub mod api_v1;
pub mod dashboard;
pub mod render;

use axum::{Router, extract::State, response::Json, routing::get};
use chrono::{DateTime, Local, NaiveTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use contextwise_core::{KnowledgeBase, Role, TouristCatalog, ViewModel, compute_view_model};
use contextwise_detectors::ContextDetector;

/// Source of the current wall-clock time.
pub type Clock = Arc<dyn Fn() -> NaiveTime + Send + Sync>;

/// Shared application state for the gateway.
///
/// Everything in here is read-only after startup, so no lock is needed.
pub struct GatewayState {
    pub detector: ContextDetector,
    pub knowledge: KnowledgeBase,
    pub catalog: TouristCatalog,
    pub default_role: Role,
    pub start_time: DateTime<Utc>,
    clock: Clock,
}

pub type SharedState = Arc<GatewayState>;

impl GatewayState {
    pub fn new(detector: ContextDetector, default_role: Role) -> Self {
        Self {
            detector,
            knowledge: KnowledgeBase::builtin(),
            catalog: TouristCatalog::builtin(),
            default_role,
            start_time: Utc::now(),
            clock: Arc::new(|| Local::now().time()),
        }
    }

    /// Replace the wall clock.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveTime + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn now(&self) -> NaiveTime {
        (self.clock)()
    }

    /// Detect live facts and compute one page.
    pub async fn view(&self, role: Option<Role>) -> ViewModel {
        let facts = self.detector.detect().await;
        compute_view_model(
            &self.now(),
            role.unwrap_or(self.default_role),
            &facts,
            &self.knowledge,
            &self.catalog,
        )
    }
}

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state.clone())
        .nest("/v1", api_v1::v1_router(state.clone()))
        .merge(dashboard::dashboard_router(state))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
pub async fn start(config: contextwise_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let detector = ContextDetector::from_config(&config)?;
    info!(
        geolocation = detector.geo().name(),
        default_role = %config.dashboard.default_role,
        "Context detectors ready"
    );

    let state = Arc::new(GatewayState::new(detector, config.dashboard.default_role));
    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_secs: i64,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: (Utc::now() - state.start_time).num_seconds().max(0),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use contextwise_core::error::LookupError;
    use contextwise_core::probe::{GeoFix, GeoLookup, SystemInfo};
    use std::net::{IpAddr, Ipv4Addr};

    pub struct FixedGeo;

    #[async_trait]
    impl GeoLookup for FixedGeo {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn lookup(&self) -> Result<GeoFix, LookupError> {
            Ok(GeoFix {
                city: Some("Chennai".into()),
                country: Some("IN".into()),
            })
        }
    }

    pub struct FixedSystem;

    impl SystemInfo for FixedSystem {
        fn system_name(&self) -> String {
            "Linux".into()
        }

        fn release(&self) -> String {
            "6.8.0".into()
        }

        fn hostname(&self) -> Result<String, LookupError> {
            Ok("workstation".into())
        }

        fn resolve_host(&self, _host: &str) -> Result<Vec<IpAddr>, LookupError> {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20))])
        }
    }

    /// Gateway state with fixed collaborators and a clock stuck at `hour`.
    pub fn test_state(hour: u32) -> SharedState {
        let detector = ContextDetector::new(Arc::new(FixedGeo), Arc::new(FixedSystem));
        let state = GatewayState::new(detector, Role::Guest)
            .with_clock(move || NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default());
        Arc::new(state)
    }
}
