use crate::adjacency::Adjacency;
use crate::display_width::{max_width, pad_left, pad_right};

const INDEX_HEADER: &str = "#";
const LABEL_HEADER: &str = "concept";

/// Renders the matrix as an aligned table followed by the edge list.
pub fn render(adj: &Adjacency) -> String {
    let indices: Vec<String> = (0..adj.len()).map(|i| i.to_string()).collect();
    let index_w = max_width(indices.iter().map(String::as_str), INDEX_HEADER.len());
    let label_w = max_width(adj.node_labels.iter().map(String::as_str), LABEL_HEADER.len());

    let mut lines: Vec<String> = Vec::with_capacity(adj.len() + adj.edge_labels.len() + 3);

    let mut header = format!("{}  {}", pad_right(INDEX_HEADER, index_w), pad_right(LABEL_HEADER, label_w));
    for index in &indices {
        header.push_str("  ");
        header.push_str(index);
    }
    lines.push(header);

    for (i, row) in adj.matrix.iter().enumerate() {
        let label = adj.node_labels.get(i).map(String::as_str).unwrap_or("");
        let mut line = format!("{}  {}", pad_right(&indices[i], index_w), pad_right(label, label_w));
        for (j, cell) in row.iter().enumerate() {
            line.push_str("  ");
            line.push_str(&pad_left(&cell.to_string(), indices[j].len()));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("edges:".to_string());
    if adj.edge_labels.is_empty() {
        lines.push("  (none)".to_string());
    }
    for ((i, j), label) in adj.nonzero_cells().zip(&adj.edge_labels) {
        let mut line = format!("  {} -> {}", adj.node_labels[i], adj.node_labels[j]);
        if !label.is_empty() {
            line.push_str(": ");
            line.push_str(label);
        }
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn adjacency(labels: &[&str], matrix: Vec<Vec<u8>>, edge_labels: &[&str]) -> Adjacency {
        Adjacency {
            matrix,
            node_labels: labels.iter().map(|s| s.to_string()).collect(),
            edge_labels: edge_labels.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn render_cat_is_an_animal() {
        let adj = adjacency(&["Cat", "Animal"], vec![vec![0, 1], vec![0, 0]], &["is a"]);
        let expected = "\
#  concept  0  1
0  Cat      0  1
1  Animal   0  0

edges:
  Cat -> Animal: is a";
        assert_eq!(render(&adj), expected);
    }

    #[test]
    fn render_unlabeled_edge_and_no_edges() {
        let adj = adjacency(&["A"], vec![vec![1]], &[""]);
        assert!(render(&adj).ends_with("edges:\n  A -> A"));

        let adj = adjacency(&["A"], vec![vec![0]], &[]);
        assert!(render(&adj).ends_with("edges:\n  (none)"));
    }

    #[test]
    fn render_aligns_wide_labels_and_two_digit_columns() {
        let n = 11;
        let labels: Vec<String> = (0..n).map(|i| if i == 0 { "猫猫猫猫".to_string() } else { format!("n{i}") }).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        let adj = adjacency(&labels, vec![vec![0; n]; n], &[]);
        let output = render(&adj);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "#   concept   0  1  2  3  4  5  6  7  8  9  10");
        assert_eq!(lines[1], "0   猫猫猫猫  0  0  0  0  0  0  0  0  0  0   0");
        assert_eq!(lines[11], "10  n10       0  0  0  0  0  0  0  0  0  0   0");
    }
}
