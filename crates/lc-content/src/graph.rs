use lc_core::entities::{EdgeKind, Graph, GraphEdge, GraphNode};

fn node(id: &str, label: &str, stage: &str, domain: &str) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        label: label.to_string(),
        stage: stage.to_string(),
        domain: domain.to_string(),
    }
}

fn edge(source: &str, target: &str, kind: EdgeKind) -> GraphEdge {
    GraphEdge {
        source: source.to_string(),
        target: target.to_string(),
        kind,
    }
}

pub(crate) fn graph() -> Graph {
    Graph {
        nodes: vec![
            node("s1", "Childcare enrolment", "early", "family"),
            node("s2", "Maths score", "childhood", "education"),
            node("s3", "AI literacy", "ai_future", "education"),
            node("s4", "Graduate employment", "tertiary", "work"),
            node("s5", "Healthy life expectancy", "senior", "health"),
        ],
        edges: vec![
            edge("s1", "s2", EdgeKind::Correlation),
            edge("s2", "s3", EdgeKind::Trend),
            edge("s2", "s4", EdgeKind::Correlation),
            edge("s4", "s5", EdgeKind::Trend),
        ],
    }
}
