//! HTML and SVG rendering of a [`ViewModel`].
//!
//! Rendering is string assembly only. Every decision (which service, which
//! spots, which style) was already made by `compute_view_model`.

use contextwise_core::graph::{NodeKind, OntologyGraph};
use contextwise_core::view::{ViewModel, headings};
use contextwise_core::Role;

/// Browser tab title.
const PAGE_TITLE: &str = "Context-Aware Smart Assistant";

const BASE_CSS: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; display: flex; }
aside { width: 220px; padding: 1.5rem; background: rgba(0,0,0,0.05); min-height: 100vh; }
main { flex: 1; padding: 1.5rem 2.5rem; max-width: 1100px; }
.success { background: #d4edda; color: #155724; padding: 0.75rem 1rem; border-radius: 6px; }
.info { background: #d1ecf1; color: #0c5460; padding: 0.75rem 1rem; border-radius: 6px; }
table { border-collapse: collapse; margin-top: 0.5rem; }
th, td { border: 1px solid #ccc; padding: 0.4rem 0.8rem; text-align: left; }
figure { margin: 0; overflow-x: auto; }
";

/// Render the full dashboard page.
pub fn dashboard_html(vm: &ViewModel) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{PAGE_TITLE}</title>\n"));
    html.push_str(&format!("<style>\n{BASE_CSS}</style>\n"));
    html.push_str("</head>\n");

    match &vm.style {
        Some(style) => {
            let mut css = format!("background-color:{};", style.background);
            if let Some(fg) = style.foreground {
                css.push_str(&format!(" color:{fg};"));
            }
            html.push_str(&format!("<body style=\"{css}\">\n"));
        }
        None => html.push_str("<body>\n"),
    }

    // Sidebar: the only input control.
    html.push_str("<aside>\n<form method=\"get\" action=\"/\">\n");
    html.push_str("<label for=\"role\">Select your role</label><br>\n");
    html.push_str("<select id=\"role\" name=\"role\" onchange=\"this.form.submit()\">\n");
    for role in Role::ALL {
        let selected = if role == vm.role { " selected" } else { "" };
        html.push_str(&format!("<option value=\"{role}\"{selected}>{role}</option>\n"));
    }
    html.push_str("</select>\n<noscript><button type=\"submit\">Apply</button></noscript>\n");
    html.push_str("</form>\n</aside>\n");

    html.push_str("<main>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(vm.title)));

    html.push_str(&format!("<h2>{}</h2>\n", headings::CONTEXTS));
    for (key, value) in [
        ("Time Context", vm.time.to_string()),
        ("Location Context", vm.location.to_string()),
        ("Device Context", vm.device.clone()),
        ("Network Context", vm.network.clone()),
        ("Role Context", vm.role.to_string()),
    ] {
        html.push_str(&format!(
            "<p><strong>{key}:</strong> {}</p>\n",
            escape_html(&value)
        ));
    }

    html.push_str(&format!("<h2>{}</h2>\n", headings::SERVICES));
    html.push_str(&format!(
        "<div class=\"success\">{}</div>\n",
        escape_html(vm.service)
    ));

    html.push_str(&format!(
        "<details>\n<summary>{}</summary>\n<table>\n",
        headings::KNOWLEDGE
    ));
    html.push_str("<thead><tr><th>Role</th><th>Context</th><th>Service</th></tr></thead>\n<tbody>\n");
    for triple in &vm.knowledge {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            triple.role,
            triple.context,
            escape_html(triple.service)
        ));
    }
    html.push_str("</tbody>\n</table>\n</details>\n");

    html.push_str(&format!("<h2>{}</h2>\n", headings::GRAPH));
    html.push_str("<figure>\n");
    html.push_str(&graph_svg(&vm.graph));
    html.push_str("</figure>\n");

    html.push_str(&format!("<h2>{}</h2>\n", headings::TOURISM));
    html.push_str(&format!(
        "<div class=\"info\">{}</div>\n",
        escape_html(&vm.tourism.message)
    ));
    html.push_str("<p>Recommended spots:</p>\n<ul>\n");
    for spot in &vm.tourism.spots {
        html.push_str(&format!("<li>{}</li>\n", escape_html(spot)));
    }
    html.push_str("</ul>\n</main>\n</body>\n</html>\n");

    html
}

// ── Diagram ───────────────────────────────────────────────────────────────

const ROW_HEIGHT: f32 = 56.0;
const NODE_HEIGHT: f32 = 36.0;
const PADDING: f32 = 24.0;

/// Column centre and box width per node kind.
fn column(kind: NodeKind) -> (f32, f32) {
    match kind {
        NodeKind::Role => (100.0, 150.0),
        NodeKind::Context => (320.0, 150.0),
        NodeKind::Service => (650.0, 380.0),
    }
}

/// Render the ontology graph as a layered SVG: roles, contexts, services.
pub fn graph_svg(graph: &OntologyGraph) -> String {
    let kinds = [NodeKind::Role, NodeKind::Context, NodeKind::Service];
    let tallest = kinds
        .iter()
        .map(|k| graph.nodes_of(*k).count())
        .max()
        .unwrap_or(0);
    let height = PADDING * 2.0 + tallest as f32 * ROW_HEIGHT;
    let width = 860.0;

    // Centre of each node, indexed by node id.
    let mut centres = vec![(0.0f32, 0.0f32); graph.nodes.len()];
    for kind in kinds {
        let members: Vec<_> = graph.nodes_of(kind).collect();
        let offset = (tallest - members.len()) as f32 * ROW_HEIGHT / 2.0;
        let (cx, _) = column(kind);
        for (row, node) in members.iter().enumerate() {
            let cy = PADDING + offset + row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0;
            centres[node.id] = (cx, cy);
        }
    }

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\" font-family=\"Helvetica, sans-serif\" font-size=\"12\">\n"
    ));
    svg.push_str(
        "<defs><marker id=\"arrow\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" \
         markerWidth=\"6\" markerHeight=\"6\" orient=\"auto\">\
         <path d=\"M0,0 L10,5 L0,10 z\" fill=\"gray\"/></marker></defs>\n",
    );

    for edge in &graph.edges {
        let (from, to) = (&graph.nodes[edge.from], &graph.nodes[edge.to]);
        let (x1, y1) = centres[from.id];
        let (x2, y2) = centres[to.id];
        let x1 = x1 + column(from.kind).1 / 2.0;
        let x2 = x2 - column(to.kind).1 / 2.0;
        svg.push_str(&format!(
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"gray\" marker-end=\"url(#arrow)\"/>\n"
        ));
    }

    for node in &graph.nodes {
        let (cx, cy) = centres[node.id];
        let (_, w) = column(node.kind);
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{w}\" height=\"{NODE_HEIGHT}\" rx=\"18\" fill=\"{}\" stroke=\"#888\"/>\n",
            cx - w / 2.0,
            cy - NODE_HEIGHT / 2.0,
            node.color
        ));
        svg.push_str(&format!(
            "<text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" font-weight=\"bold\">{}</text>\n",
            cy + 4.0,
            escape_html(&node.label)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape text for HTML/XML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use contextwise_core::{
        EnvironmentFacts, KnowledgeBase, LocationContext, TouristCatalog, compute_view_model,
    };

    fn view(hour: u32, role: Role, city: &str) -> ViewModel {
        let facts = EnvironmentFacts {
            location: LocationContext::new(city, "IN"),
            device: "Linux - 6.8.0".into(),
            network: "10.0.0.2".into(),
        };
        compute_view_model(
            &NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            role,
            &facts,
            &KnowledgeBase::builtin(),
            &TouristCatalog::builtin(),
        )
    }

    #[test]
    fn dashboard_contains_every_section() {
        let html = dashboard_html(&view(9, Role::Student, "Chennai"));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Context-Aware Smart Workspace Assistant + Tourist Guide"));
        assert!(html.contains("<strong>Time Context:</strong> Morning"));
        assert!(html.contains("<strong>Location Context:</strong> Chennai, IN"));
        assert!(html.contains("<div class=\"success\">📖 Review notes before class.</div>"));
        assert!(html.contains("<details>"));
        assert!(html.contains("<svg"));
        assert!(html.contains("🌅 Great time to explore outdoors in Chennai!"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn selector_marks_current_role() {
        let html = dashboard_html(&view(9, Role::Developer, "Delhi"));
        assert!(html.contains("<option value=\"Developer\" selected>"));
        assert_eq!(html.matches("<option ").count(), 4);
    }

    #[test]
    fn body_style_follows_time_bucket() {
        assert!(dashboard_html(&view(9, Role::Guest, "Delhi")).contains("background-color:#FFFACD;"));
        assert!(
            dashboard_html(&view(22, Role::Guest, "Delhi"))
                .contains("background-color:#2F4F4F; color:white;")
        );
        assert!(dashboard_html(&view(15, Role::Guest, "Delhi")).contains("<body>\n"));
    }

    #[test]
    fn untrusted_text_is_escaped() {
        let html = dashboard_html(&view(19, Role::Guest, "<script>alert(1)</script>"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn svg_draws_each_node_and_edge() {
        let graph = OntologyGraph::from_knowledge_base(&KnowledgeBase::builtin());
        let svg = graph_svg(&graph);
        assert_eq!(svg.matches("<rect ").count(), graph.nodes.len());
        assert_eq!(svg.matches("<line ").count(), graph.edges.len());
        assert!(svg.contains("fill=\"lightyellow\""));
    }

    #[test]
    fn empty_graph_renders() {
        let svg = graph_svg(&OntologyGraph::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
