use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The document does not look like a bubbl.us concept map export.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("no concept bubbles found (expected `div.bubble.root.pinned`)")]
    NoConcepts,

    #[error("`{element}` is missing its `{attribute}` attribute")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    #[error("concept `{concept}` has no `{element}` element")]
    MissingElement {
        concept: String,
        element: String,
    },

    #[error("concept `{concept}` links to unknown concept `{target}`")]
    DanglingEdge { concept: String, target: String },

    #[error("concept id `{id}` appears more than once")]
    DuplicateNode { id: String },

    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
