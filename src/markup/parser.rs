use roxmltree::{Node, ParsingOptions};

use super::element::{Document, Element};

/// Deepest element nesting accepted when building a tree.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Elements nested deeper than {limit} levels at line {line}")]
    TooDeep { limit: usize, line: u32 },
    #[error("Unsupported document encoding {0:?}")]
    UnsupportedEncoding(String),
    #[error("Document is not valid {0}")]
    InvalidEncoding(&'static str),
}

/// Parse XML text into a document tree.
///
/// Comments and processing instructions are dropped. An element's text is the
/// concatenation of its character data and CDATA sections, or `None` if that is
/// only whitespace.
pub fn parse(input: &str) -> Result<Document, MarkupError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;

    let xml = roxmltree::Document::parse_with_options(input, options)?;
    let root = build_element(&xml, xml.root_element(), 0)?;
    Ok(Document { root })
}

fn build_element(
    xml: &roxmltree::Document<'_>,
    node: Node<'_, '_>,
    depth: usize,
) -> Result<Element, MarkupError> {
    if depth >= MAX_DEPTH {
        return Err(MarkupError::TooDeep {
            limit: MAX_DEPTH,
            line: xml.text_pos_at(node.range().start).row,
        });
    }

    let mut element = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        element.push_attribute(attr.name(), attr.value());
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            element.push_child(build_element(xml, child, depth + 1)?);
        } else if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        }
    }

    if !text.trim().is_empty() {
        element.text = Some(text);
    }
    Ok(element)
}
