use serde::{Serialize, Serializer};

use crate::map_ast::ConceptMap;

/// `{"nodes": {id: label, ...}, "edges": [{source, target, label}, ...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonView {
    #[serde(serialize_with = "serialize_nodes")]
    pub nodes: Vec<(String, String)>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub label: String,
}

// A map keyed by id, kept in document order.
fn serialize_nodes<S: Serializer>(nodes: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(nodes.iter().map(|(id, label)| (id, label)))
}

pub fn export(map: &ConceptMap) -> JsonView {
    JsonView {
        nodes: map
            .nodes()
            .iter()
            .map(|n| (n.id.clone(), n.label.clone()))
            .collect(),
        edges: map
            .edges()
            .iter()
            .map(|e| EdgeRecord {
                source: e.source.clone(),
                target: e.target.clone(),
                label: e.label.clone(),
            })
            .collect(),
    }
}

impl JsonView {
    pub fn label(&self, id: &str) -> Option<&str> {
        self.nodes
            .iter()
            .find(|(node_id, _)| node_id == id)
            .map(|(_, label)| label.as_str())
    }

    pub fn to_json_string(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
