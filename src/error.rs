use std::io;
use std::path::PathBuf;

use crate::markup::MarkupError;

#[derive(Debug, thiserror::Error)]
pub enum SchemaXmlError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Malformed schema document {}: {source}", .path.display())]
    Malformed { path: PathBuf, source: MarkupError },
}
