//! The dashboard view model.
//!
//! [`compute_view_model`] is the single place where detected facts meet the
//! two lookup tables. Renderers (HTML, SVG, CLI text, JSON) only read the
//! resulting [`ViewModel`]; none of them make decisions of their own.

use chrono::Timelike;
use serde::Serialize;

use crate::context::{EnvironmentFacts, LocationContext, Role, TimeContext, resolve_time_context};
use crate::graph::OntologyGraph;
use crate::knowledge::{KnowledgeBase, KnowledgeTriple, resolve_service};
use crate::tourism::{TouristCatalog, TouristRecommendation, recommend_spots};

pub const TITLE: &str = "🧠 Context-Aware Smart Workspace Assistant + Tourist Guide";

/// Section headings, in page order.
pub mod headings {
    pub const CONTEXTS: &str = "📌 Detected Contexts";
    pub const SERVICES: &str = "⚡ Context-Aware Services (Ontology-Driven)";
    pub const KNOWLEDGE: &str = "📖 Show Ontology Knowledge Base";
    pub const GRAPH: &str = "🕸 Ontology Graph: Role → Context → Service";
    pub const TOURISM: &str = "🧳 Smart Tourist Guide (Cyberguide-Inspired)";
}

/// Cosmetic page styling keyed by time bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleHint {
    pub background: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<&'static str>,
}

impl StyleHint {
    /// Morning and Night restyle the page; Afternoon and Evening do not.
    pub fn for_time(time: TimeContext) -> Option<Self> {
        match time {
            TimeContext::Morning => Some(Self {
                background: "#FFFACD",
                foreground: None,
            }),
            TimeContext::Night => Some(Self {
                background: "#2F4F4F",
                foreground: Some("white"),
            }),
            TimeContext::Afternoon | TimeContext::Evening => None,
        }
    }
}

/// Everything a renderer needs for one page.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub title: &'static str,
    pub time: TimeContext,
    pub location: LocationContext,
    pub device: String,
    pub network: String,
    pub role: Role,
    pub service: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleHint>,
    pub knowledge: Vec<KnowledgeTriple>,
    pub graph: OntologyGraph,
    pub tourism: TouristRecommendation,
}

/// Compute the page for a clock reading, a role and the detected facts.
pub fn compute_view_model<T: Timelike>(
    now: &T,
    role: Role,
    facts: &EnvironmentFacts,
    kb: &KnowledgeBase,
    catalog: &TouristCatalog,
) -> ViewModel {
    let time = resolve_time_context(now);

    ViewModel {
        title: TITLE,
        time,
        location: facts.location.clone(),
        device: facts.device.clone(),
        network: facts.network.clone(),
        role,
        service: resolve_service(role, time, kb),
        style: StyleHint::for_time(time),
        knowledge: kb.triples().to_vec(),
        graph: OntologyGraph::from_knowledge_base(kb),
        tourism: recommend_spots(&facts.location.city, time, catalog),
    }
}
