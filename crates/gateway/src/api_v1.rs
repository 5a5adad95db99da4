//! HTTP API v1: the dashboard's data as JSON.
//!
//! Endpoints:
//!
//! - `GET /v1/context?role=`           — Full view model for one render pass
//! - `GET /v1/service?role=&time=`     — Resolve one (role, time) pair
//! - `GET /v1/knowledge`               — The knowledge base table
//! - `GET /v1/graph`                   — Node-link projection of the table
//! - `GET /v1/tourism?city=&time=`     — Tourist recommendation for a city
//! - `GET /v1/tourism/cities`          — Cities with a dedicated guide

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use contextwise_core::context::resolve_time_context;
use contextwise_core::{
    KnowledgeTriple, OntologyGraph, Role, TimeContext, TouristRecommendation, ViewModel,
    recommend_spots, resolve_service,
};

use crate::SharedState;

/// Build the v1 API router. Nest this under "/v1" in the main router.
pub fn v1_router(state: SharedState) -> Router {
    Router::new()
        .route("/context", get(context_handler))
        .route("/service", get(service_handler))
        .route("/knowledge", get(knowledge_handler))
        .route("/graph", get(graph_handler))
        .route("/tourism", get(tourism_handler))
        .route("/tourism/cities", get(cities_handler))
        .with_state(state)
}

// ── Context ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ContextQuery {
    role: Option<Role>,
}

async fn context_handler(
    State(state): State<SharedState>,
    Query(query): Query<ContextQuery>,
) -> Json<ViewModel> {
    Json(state.view(query.role).await)
}

// ── Service ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ServiceQuery {
    role: Role,
    time: Option<TimeContext>,
}

#[derive(Serialize)]
struct ServiceResponse {
    role: Role,
    time: TimeContext,
    service: &'static str,
    matched: bool,
}

async fn service_handler(
    State(state): State<SharedState>,
    Query(query): Query<ServiceQuery>,
) -> Json<ServiceResponse> {
    let time = query
        .time
        .unwrap_or_else(|| resolve_time_context(&state.now()));

    Json(ServiceResponse {
        role: query.role,
        time,
        service: resolve_service(query.role, time, &state.knowledge),
        matched: state.knowledge.find_service(query.role, time).is_some(),
    })
}

// ── Knowledge ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct KnowledgeListResponse {
    triples: Vec<KnowledgeTriple>,
    count: usize,
}

async fn knowledge_handler(State(state): State<SharedState>) -> Json<KnowledgeListResponse> {
    Json(KnowledgeListResponse {
        triples: state.knowledge.triples().to_vec(),
        count: state.knowledge.len(),
    })
}

async fn graph_handler(State(state): State<SharedState>) -> Json<OntologyGraph> {
    Json(OntologyGraph::from_knowledge_base(&state.knowledge))
}

// ── Tourism ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TourismQuery {
    city: String,
    time: Option<TimeContext>,
}

async fn tourism_handler(
    State(state): State<SharedState>,
    Query(query): Query<TourismQuery>,
) -> Json<TouristRecommendation> {
    let time = query
        .time
        .unwrap_or_else(|| resolve_time_context(&state.now()));

    Json(recommend_spots(&query.city, time, &state.catalog))
}

#[derive(Serialize)]
struct CityListResponse {
    cities: Vec<&'static str>,
    count: usize,
}

async fn cities_handler(State(state): State<SharedState>) -> Json<CityListResponse> {
    let cities = state.catalog.cities();
    Json(CityListResponse {
        count: cities.len(),
        cities,
    })
}
