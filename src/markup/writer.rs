use super::element::{Document, Element};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level
    pub indent: usize,
    /// Emit the `<?xml ...?>` declaration
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}

#[derive(Default)]
pub struct XmlWriter {
    options: WriteOptions,
}

impl XmlWriter {
    pub fn new(options: WriteOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, document: &Document) -> String {
        let mut output = String::new();

        if self.options.declaration {
            output.push_str(DECLARATION);
            output.push('\n');
        }
        self.write_element(&mut output, &document.root, 0);

        output
    }

    fn write_element(&self, output: &mut String, element: &Element, depth: usize) {
        let pad = " ".repeat(self.options.indent * depth);

        output.push_str(&pad);
        output.push('<');
        output.push_str(&element.name);
        for attr in &element.attributes {
            output.push_str(&format!(
                " {}=\"{}\"",
                attr.name,
                escape_attribute(&attr.value)
            ));
        }

        if element.children.is_empty() {
            match &element.text {
                Some(text) => {
                    output.push_str(&format!(">{}</{}>\n", escape_text(text), element.name));
                }
                None => output.push_str(" />\n"),
            }
            return;
        }

        output.push_str(">\n");
        if let Some(text) = &element.text {
            output.push_str(&" ".repeat(self.options.indent * (depth + 1)));
            output.push_str(&escape_text(text));
            output.push('\n');
        }
        for child in &element.children {
            self.write_element(output, child, depth + 1);
        }
        output.push_str(&format!("{}</{}>\n", pad, element.name));
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(s: &str) -> String {
    escape_text(s)
        .replace('"', "&quot;")
        .replace('\t', "&#9;")
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
}
