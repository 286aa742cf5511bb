//! Generic markup tree: nodes with ordered attributes, ordered children and
//! optional text, plus an XML reader and writer for it.

mod element;
mod encoding;
mod memory;
mod node;
mod parser;
mod writer;

pub use element::{Attribute, Document, Element};
pub use encoding::decode;
pub use memory::MemoryNode;
pub use node::MarkupNode;
pub use parser::{MAX_DEPTH, MarkupError, parse};
pub use writer::{WriteOptions, XmlWriter};
