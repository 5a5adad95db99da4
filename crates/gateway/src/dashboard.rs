//! The HTML dashboard and its diagram image.
//!
//! Pages are rendered server-side from a fresh [`ViewModel`] on every
//! request, enabling single-binary deployment with no static assets.

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use contextwise_core::{OntologyGraph, Role};

use crate::SharedState;
use crate::render;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub role: Option<Role>,
}

/// Build a router that serves the dashboard.
pub fn dashboard_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/graph.svg", get(graph_svg_handler))
        .with_state(state)
}

async fn index_handler(
    State(state): State<SharedState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let vm = state.view(query.role).await;
    Html(render::dashboard_html(&vm))
}

async fn graph_svg_handler(State(state): State<SharedState>) -> Response {
    let graph = OntologyGraph::from_knowledge_base(&state.knowledge);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/svg+xml; charset=utf-8")],
        render::graph_svg(&graph),
    )
        .into_response()
}
