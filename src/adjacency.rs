use serde::Serialize;

use crate::map_ast::ConceptMap;

/// Directed adjacency matrix of a concept map. `matrix[i][j] == 1` when an
/// edge runs from node `i` to node `j`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjacency {
    pub matrix: Vec<Vec<u8>>,
    /// Index-aligned with the rows and columns of `matrix`.
    pub node_labels: Vec<String>,
    /// One per nonzero cell, in row-major order.
    pub edge_labels: Vec<String>,
}

pub fn export(map: &ConceptMap) -> Adjacency {
    let n = map.nodes().len();
    let mut matrix = vec![vec![0u8; n]; n];
    let mut cell_labels: Vec<Vec<Option<&str>>> = vec![vec![None; n]; n];

    for edge in map.edges() {
        let (Some(i), Some(j)) = (map.index_of(&edge.source), map.index_of(&edge.target)) else {
            continue;
        };
        matrix[i][j] = 1;
        cell_labels[i][j] = Some(edge.label.as_str());
    }

    let edge_labels = cell_labels
        .into_iter()
        .flatten()
        .flatten()
        .map(str::to_string)
        .collect();

    Adjacency {
        matrix,
        node_labels: map.nodes().iter().map(|n| n.label.clone()).collect(),
        edge_labels,
    }
}

impl Adjacency {
    /// Number of nodes (rows and columns).
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// `(row, column)` of every nonzero cell, row-major.
    pub fn nonzero_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.matrix.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell != 0)
                .map(move |(j, _)| (i, j))
        })
    }

    /// Label of the edge from node `i` to node `j`, if there is one.
    pub fn edge_label(&self, i: usize, j: usize) -> Option<&str> {
        if *self.matrix.get(i)?.get(j)? == 0 {
            return None;
        }
        let k = self.nonzero_cells().position(|cell| cell == (i, j))?;
        self.edge_labels.get(k).map(String::as_str)
    }
}
