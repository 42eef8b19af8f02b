use std::collections::HashSet;

use tracing::{debug, warn};

use crate::dom::{Document, Element, Pattern};
use crate::error::ParseError;
use crate::map_ast::*;
use crate::style_parser::parse_position;

const CONCEPT: Pattern = Pattern::new("div", &["bubble", "root", "pinned"]);
const CONCEPT_TEXT: Pattern = Pattern::new("div", &["bubble-text"]);
const LINES_INCOMING: Pattern = Pattern::new("div", &["lines-incoming"]);
const LINES_OUTGOING: Pattern = Pattern::new("div", &["lines-outgoing"]);
const CONNECTOR: Pattern = Pattern::new("a", &["line"]);

/// Extracts the concept map from a bubbl.us HTML export.
pub fn parse_bubbl(html: &str) -> Result<ConceptMap, ParseError> {
    let document = Document::parse(html);
    let concepts = document.find_all(&CONCEPT)?;
    if concepts.is_empty() {
        return Err(ParseError::NoConcepts);
    }

    let mut nodes: Vec<Node> = Vec::with_capacity(concepts.len());
    let mut edges: Vec<Edge> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for concept in &concepts {
        let node = concept_node(concept)?;
        if !seen_ids.insert(node.id.clone()) {
            return Err(ParseError::DuplicateNode { id: node.id });
        }

        for connector in section(concept, &node.id, &LINES_INCOMING)? {
            let (other, label) = connector_parts(&connector)?;
            add_edge(&mut edges, other, node.id.clone(), label);
        }
        for connector in section(concept, &node.id, &LINES_OUTGOING)? {
            let (other, label) = connector_parts(&connector)?;
            add_edge(&mut edges, node.id.clone(), other, label);
        }

        nodes.push(node);
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "extracted concept map");

    ConceptMap::new(nodes, edges)
        .map_err(|(concept, target)| ParseError::DanglingEdge { concept, target })
}

fn concept_node(concept: &Element<'_>) -> Result<Node, ParseError> {
    let id = required_attr(concept, "id")?.to_string();
    let text = concept
        .find(&CONCEPT_TEXT)?
        .ok_or_else(|| ParseError::MissingElement {
            concept: id.clone(),
            element: CONCEPT_TEXT.to_string(),
        })?;

    let position = match concept.attr("style") {
        Some(style) => parse_position(style).unwrap_or_else(|e| {
            warn!(concept = %id, "ignoring node position: {e}");
            None
        }),
        None => None,
    };

    Ok(Node {
        label: collapse_whitespace(&text.text()),
        id,
        position,
    })
}

fn section<'a>(
    concept: &Element<'a>,
    id: &str,
    pattern: &Pattern,
) -> Result<Vec<Element<'a>>, ParseError> {
    let lines = concept.find(pattern)?.ok_or_else(|| ParseError::MissingElement {
        concept: id.to_string(),
        element: pattern.to_string(),
    })?;
    lines.find_all(&CONNECTOR)
}

/// The concept at the other end of a connector and the connector's label.
fn connector_parts(connector: &Element<'_>) -> Result<(String, String), ParseError> {
    let href = required_attr(connector, "href")?;
    let other = href.strip_prefix('#').unwrap_or(href).to_string();

    let title = ascii_only(required_attr(connector, "title")?);
    let text = ascii_only(&connector.text());

    // The title repeats the linked concept's name; text that differs from it
    // is a label drawn on the diagram.
    let label = if title != text { text } else { String::new() };
    Ok((other, label))
}

fn required_attr<'a>(element: &Element<'a>, attribute: &'static str) -> Result<&'a str, ParseError> {
    element.attr(attribute).ok_or_else(|| ParseError::MissingAttribute {
        element: element.describe(),
        attribute,
    })
}

/// Replaces non-ASCII characters (the tool's arrow glyphs) with spaces, then
/// collapses whitespace.
fn ascii_only(s: &str) -> String {
    let blanked: String = s
        .chars()
        .map(|c| if c.is_ascii() { c } else { ' ' })
        .collect();
    collapse_whitespace(&blanked)
}

/// Trims and folds every whitespace run, line breaks included, into one space.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Each connector shows up on both of its ends; the first occurrence wins
/// unless it is unlabeled and a later one is not.
fn add_edge(edges: &mut Vec<Edge>, source: String, target: String, label: String) {
    match edges
        .iter_mut()
        .find(|e| e.source == source && e.target == target)
    {
        Some(existing) => {
            if existing.label.is_empty() && !label.is_empty() {
                existing.label = label;
            }
        }
        None => edges.push(Edge {
            source,
            target,
            label,
        }),
    }
}
