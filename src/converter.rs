use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adjacency::{self, Adjacency};
use crate::bubbl_parser::parse_bubbl;
use crate::error::{Error, Result};
use crate::json_export::{self, JsonView};
use crate::map_ast::ConceptMap;

/// A parsed bubbl.us export and the views derived from it.
///
/// Both views are projections of the same [`ConceptMap`], which is built once
/// and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Converter {
    source: Option<PathBuf>,
    map: ConceptMap,
}

impl Converter {
    /// Reads and parses the export at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = html.len(), "read export");

        let mut converter = Self::from_html(&html)?;
        converter.source = Some(path.to_path_buf());
        Ok(converter)
    }

    pub fn from_html(html: &str) -> Result<Self> {
        Ok(Converter {
            source: None,
            map: parse_bubbl(html)?,
        })
    }

    /// The file this converter was opened from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn concept_map(&self) -> &ConceptMap {
        &self.map
    }

    pub fn as_json(&self) -> JsonView {
        json_export::export(&self.map)
    }

    pub fn as_adj(&self) -> Adjacency {
        adjacency::export(&self.map)
    }
}
