//! `contextwise graph` — Export the Role → Context → Service graph.

use clap::ValueEnum;
use contextwise_core::{KnowledgeBase, OntologyGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    /// Graphviz DOT
    Dot,
    /// Standalone SVG
    Svg,
    /// Node-link JSON
    Json,
}

pub fn run(format: GraphFormat) -> Result<(), Box<dyn std::error::Error>> {
    let graph = OntologyGraph::from_knowledge_base(&KnowledgeBase::builtin());
    print!("{}", export(&graph, format)?);
    Ok(())
}

pub fn export(graph: &OntologyGraph, format: GraphFormat) -> Result<String, serde_json::Error> {
    Ok(match format {
        GraphFormat::Dot => graph.to_dot(),
        GraphFormat::Svg => contextwise_gateway::render::graph_svg(graph),
        GraphFormat::Json => serde_json::to_string_pretty(graph)? + "\n",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> OntologyGraph {
        OntologyGraph::from_knowledge_base(&KnowledgeBase::builtin())
    }

    #[test]
    fn dot_export_is_a_digraph() {
        let dot = export(&builtin(), GraphFormat::Dot).unwrap();
        assert!(dot.starts_with("digraph"));
    }

    #[test]
    fn svg_export_is_standalone() {
        let svg = export(&builtin(), GraphFormat::Svg).unwrap();
        assert!(svg.starts_with("<svg xmlns="));
    }

    #[test]
    fn json_export_round_trips_counts() {
        let json = export(&builtin(), GraphFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 14);
        assert_eq!(value["edges"].as_array().unwrap().len(), 14);
    }
}
