pub mod adjacency;
pub mod bubbl_parser;
pub mod converter;
pub mod display_width;
pub mod dom;
pub mod error;
pub mod json_export;
pub mod map_ast;
pub mod style_parser;
pub mod table_renderer;

use std::path::Path;

pub use adjacency::Adjacency;
pub use converter::Converter;
pub use error::{Error, ParseError, Result};
pub use json_export::JsonView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Adj,
    Table,
}

pub fn convert(path: impl AsRef<Path>, format: Format) -> Result<String> {
    convert_with_options(path, format, false)
}

pub fn convert_with_options(path: impl AsRef<Path>, format: Format, pretty: bool) -> Result<String> {
    let converter = Converter::open(path)?;
    render(&converter, format, pretty)
}

/// Renders one view of an already parsed map as text.
pub fn render(converter: &Converter, format: Format, pretty: bool) -> Result<String> {
    match format {
        Format::Json => Ok(converter.as_json().to_json_string(pretty)?),
        Format::Adj => {
            let adj = converter.as_adj();
            Ok(if pretty {
                serde_json::to_string_pretty(&adj)?
            } else {
                serde_json::to_string(&adj)?
            })
        }
        Format::Table => Ok(table_renderer::render(&converter.as_adj())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOG: &str = r#"
        <div id="3" class="bubble root pinned">
          <div class="bubble-text">Dog</div>
          <div class="lines-incoming"></div>
          <div class="lines-outgoing"></div>
        </div>"#;

    #[test]
    fn render_json() {
        let converter = Converter::from_html(DOG).unwrap();
        let output = render(&converter, Format::Json, false).unwrap();
        assert_eq!(output, r#"{"nodes":{"3":"Dog"},"edges":[]}"#);
    }

    #[test]
    fn render_adj() {
        let converter = Converter::from_html(DOG).unwrap();
        let output = render(&converter, Format::Adj, false).unwrap();
        assert_eq!(output, r#"{"matrix":[[0]],"node_labels":["Dog"],"edge_labels":[]}"#);
    }

    #[test]
    fn render_table() {
        let converter = Converter::from_html(DOG).unwrap();
        let output = render(&converter, Format::Table, false).unwrap();
        assert!(output.starts_with("#  concept  0\n0  Dog      0"), "got: {output}");
    }

    #[test]
    fn convert_missing_file_returns_error() {
        let err = convert("/nonexistent/map.html", Format::Json).unwrap_err();
        assert!(err.to_string().contains("failed to read"), "got: {err}");
    }
}
