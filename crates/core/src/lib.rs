//! # Contextwise Core
//!
//! Domain types, lookup tables, and the view model for the Contextwise
//! context-aware assistant. This crate has **zero framework dependencies**:
//! it defines the domain model that the detector, gateway, and CLI crates
//! implement against.
//!
//! ## Design Philosophy
//!
//! Every live collaborator (geolocation, host introspection) is defined as a
//! trait here. Implementations live in `contextwise-detectors`. This enables:
//! - Deterministic tests with scripted fakes instead of real networks
//! - A pure view-model computation with no rendering framework attached
//! - Clean dependency graph (all crates depend inward on core)

pub mod context;
pub mod error;
pub mod graph;
pub mod knowledge;
pub mod probe;
pub mod tourism;
pub mod view;

// Re-export key types at crate root for ergonomics
pub use context::{EnvironmentFacts, LocationContext, Role, TimeContext};
pub use error::{Error, LookupError, Result};
pub use graph::{GraphEdge, GraphNode, NodeKind, OntologyGraph};
pub use knowledge::{ContextPattern, KnowledgeBase, KnowledgeTriple, resolve_service};
pub use probe::{GeoFix, GeoLookup, SystemInfo};
pub use tourism::{TouristCatalog, TouristRecommendation, recommend_spots};
pub use view::{StyleHint, ViewModel, compute_view_model};
