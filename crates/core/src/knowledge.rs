//! The ontology-like knowledge base and its resolver.
//!
//! The knowledge base is a flat, ordered list of (role, context, service)
//! triples. Order is significant: the resolver returns the *first* triple
//! whose role matches and whose context is either the exact time bucket or
//! the wildcard `Any`. The wildcard only spans the time column, never roles.

use serde::Serialize;

use crate::context::{Role, TimeContext};
use ContextPattern::{Any, Exact};
use TimeContext::{Morning, Night};

/// Returned when no triple matches the (role, time) pair.
pub const NO_SERVICE: &str = "🤔 No defined service for this role/context.";

/// The context column of a triple: an exact bucket or the `Any` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum ContextPattern {
    Exact(TimeContext),
    Any,
}

impl ContextPattern {
    pub fn matches(&self, time: TimeContext) -> bool {
        match self {
            ContextPattern::Exact(t) => *t == time,
            ContextPattern::Any => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContextPattern::Exact(t) => t.as_str(),
            ContextPattern::Any => "Any",
        }
    }
}

impl From<TimeContext> for ContextPattern {
    fn from(time: TimeContext) -> Self {
        ContextPattern::Exact(time)
    }
}

impl From<ContextPattern> for String {
    fn from(pattern: ContextPattern) -> Self {
        pattern.as_str().to_string()
    }
}

impl std::fmt::Display for ContextPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One association in the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeTriple {
    pub role: Role,
    pub context: ContextPattern,
    pub service: &'static str,
}

impl KnowledgeTriple {
    pub const fn new(role: Role, context: ContextPattern, service: &'static str) -> Self {
        Self {
            role,
            context,
            service,
        }
    }
}

const BUILTIN_TRIPLES: [KnowledgeTriple; 7] = [
    KnowledgeTriple::new(Role::Student, Exact(Morning), "📖 Review notes before class."),
    KnowledgeTriple::new(
        Role::Student,
        Exact(Night),
        "😴 Time to rest, tomorrow’s lectures await.",
    ),
    KnowledgeTriple::new(
        Role::Professor,
        Exact(Morning),
        "👩‍🏫 Prepare and deliver lectures.",
    ),
    KnowledgeTriple::new(
        Role::Professor,
        Exact(Night),
        "📊 Review submissions and plan classes.",
    ),
    KnowledgeTriple::new(
        Role::Developer,
        Exact(Morning),
        "⚡ Start coding sprints with fresh energy.",
    ),
    KnowledgeTriple::new(
        Role::Developer,
        Exact(Night),
        "🛠 Debug and commit code before sleeping.",
    ),
    KnowledgeTriple::new(
        Role::Guest,
        Any,
        "👋 Welcome! Explore context-aware computing.",
    ),
];

/// An immutable, ordered sequence of knowledge triples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    triples: Vec<KnowledgeTriple>,
}

impl KnowledgeBase {
    /// The table the assistant ships with.
    pub fn builtin() -> Self {
        Self::from_triples(BUILTIN_TRIPLES.to_vec())
    }

    /// Build a knowledge base from triples, preserving their order.
    pub fn from_triples(triples: Vec<KnowledgeTriple>) -> Self {
        Self { triples }
    }

    pub fn triples(&self) -> &[KnowledgeTriple] {
        &self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// First triple matching `role` whose context covers `time`.
    pub fn find_service(&self, role: Role, time: TimeContext) -> Option<&KnowledgeTriple> {
        self.triples
            .iter()
            .find(|t| t.role == role && t.context.matches(time))
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve the service text for a role at a time of day.
///
/// Falls back to [`NO_SERVICE`] when nothing matches; absence is a value,
/// not an error.
pub fn resolve_service(role: Role, time: TimeContext, table: &KnowledgeBase) -> &'static str {
    table
        .find_service(role, time)
        .map(|t| t.service)
        .unwrap_or(NO_SERVICE)
}
