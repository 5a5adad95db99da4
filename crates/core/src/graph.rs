//! Node-link projection of the knowledge base.
//!
//! The graph carries no state of its own: it is rebuilt from the triples
//! whenever a renderer needs it. Nodes are keyed by label, so the same text
//! appearing in two columns is a single node.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::knowledge::KnowledgeBase;

/// Which column of the knowledge base a node came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Role,
    Context,
    Service,
}

impl NodeKind {
    /// Fill colour used by every renderer.
    pub fn color(&self) -> &'static str {
        match self {
            NodeKind::Role => "lightblue",
            NodeKind::Context => "lightgreen",
            NodeKind::Service => "lightyellow",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: usize,
    pub label: String,
    pub kind: NodeKind,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
}

/// Role -> Context -> Service diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OntologyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl OntologyGraph {
    /// Project the triples into nodes (first-appearance order) and
    /// deduplicated edges.
    pub fn from_knowledge_base(kb: &KnowledgeBase) -> Self {
        let mut builder = GraphBuilder::default();

        for triple in kb.triples() {
            let role = builder.node(triple.role.as_str(), NodeKind::Role);
            let context = builder.node(triple.context.as_str(), NodeKind::Context);
            let service = builder.node(triple.service, NodeKind::Service);
            builder.edge(role, context);
            builder.edge(context, service);
        }

        builder.graph
    }

    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    /// Graphviz DOT source, left to right.
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        dot.push_str("digraph Ontology {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=ellipse, style=filled, fontname=Helvetica];\n");
        dot.push_str("  edge [color=gray];\n\n");

        for node in &self.nodes {
            dot.push_str(&format!(
                "  n{} [label=\"{}\", fillcolor={}];\n",
                node.id,
                escape_dot(&node.label),
                node.color
            ));
        }
        dot.push('\n');

        for edge in &self.edges {
            dot.push_str(&format!("  n{} -> n{};\n", edge.from, edge.to));
        }

        dot.push_str("}\n");
        dot
    }
}

#[derive(Default)]
struct GraphBuilder {
    graph: OntologyGraph,
    index: HashMap<String, usize>,
    seen_edges: HashSet<GraphEdge>,
}

impl GraphBuilder {
    fn node(&mut self, label: &str, kind: NodeKind) -> usize {
        if let Some(&id) = self.index.get(label) {
            // Re-adding a node restyles it.
            let node = &mut self.graph.nodes[id];
            node.kind = kind;
            node.color = kind.color();
            return id;
        }

        let id = self.graph.nodes.len();
        self.graph.nodes.push(GraphNode {
            id,
            label: label.to_string(),
            kind,
            color: kind.color(),
        });
        self.index.insert(label.to_string(), id);
        id
    }

    fn edge(&mut self, from: usize, to: usize) {
        let edge = GraphEdge { from, to };
        if self.seen_edges.insert(edge) {
            self.graph.edges.push(edge);
        }
    }
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
