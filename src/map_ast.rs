use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    /// Empty when the connector carries no text of its own.
    pub label: String,
}

/// A parsed concept map. Nodes keep document order; every edge endpoint
/// names a node in `nodes`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptMap {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
}

impl ConceptMap {
    /// Builds a map, returning the first edge endpoint that names no node.
    pub(crate) fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, (String, String)> {
        let index: HashMap<String, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        for edge in &edges {
            for end in [&edge.source, &edge.target] {
                if !index.contains_key(end) {
                    let concept = if end == &edge.source { &edge.target } else { &edge.source };
                    return Err((concept.clone(), end.clone()));
                }
            }
        }
        Ok(ConceptMap { nodes, edges, index })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Dense row/column position of a node id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }
}
