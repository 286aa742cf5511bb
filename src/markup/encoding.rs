//! Byte decoding according to the XML declaration's `encoding` attribute.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

use super::parser::MarkupError;

/// Decode raw document bytes to text.
///
/// A byte order mark wins over the declaration. Without either, UTF-8 is assumed.
pub fn decode(bytes: &[u8]) -> Result<Cow<'_, str>, MarkupError> {
    let encoding = match declared_encoding(bytes) {
        Some(label) => Encoding::for_label(label.as_bytes())
            .ok_or_else(|| MarkupError::UnsupportedEncoding(label.to_string()))?,
        None => UTF_8,
    };
    // A declaration readable as ASCII means the bytes are not UTF-16 without a BOM
    let encoding = if encoding == UTF_16LE || encoding == UTF_16BE {
        UTF_8
    } else {
        encoding
    };

    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(MarkupError::InvalidEncoding(actual.name()));
    }
    Ok(text)
}

fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let head = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if !head.starts_with(b"<?xml") {
        return None;
    }

    let end = head.windows(2).position(|w| w == b"?>")?;
    let declaration = std::str::from_utf8(&head[..end]).ok()?;
    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();

    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    value.find(quote).map(|end| &value[..end])
}
