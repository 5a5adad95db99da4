//! `contextwise knowledge` — Print the ontology knowledge base.

use contextwise_core::KnowledgeBase;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let kb = KnowledgeBase::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(&kb)?);
    } else {
        print!("{}", render_table(&kb));
    }

    Ok(())
}

/// Role | Context | Service, in match order.
pub fn render_table(kb: &KnowledgeBase) -> String {
    let role_width = kb
        .triples()
        .iter()
        .map(|t| t.role.as_str().len())
        .chain(["Role".len()])
        .max()
        .unwrap_or(0);
    let context_width = kb
        .triples()
        .iter()
        .map(|t| t.context.as_str().len())
        .chain(["Context".len()])
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<role_width$}  {:<context_width$}  Service\n", "Role", "Context");
    for triple in kb.triples() {
        out.push_str(&format!(
            "{:<role_width$}  {:<context_width$}  {}\n",
            triple.role.as_str(),
            triple.context.as_str(),
            triple.service
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_header_and_every_triple() {
        let table = render_table(&KnowledgeBase::builtin());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Role"));
        assert!(lines[1].starts_with("Student"));
        assert!(lines[7].starts_with("Guest"));
        assert!(lines[7].contains("Any"));
    }

    #[test]
    fn empty_table_is_header_only() {
        let table = render_table(&KnowledgeBase::from_triples(Vec::new()));
        assert_eq!(table.lines().count(), 1);
    }
}
