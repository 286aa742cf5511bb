use super::node::MarkupNode;

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Owned markup element, produced by the XML parser and consumed by the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Element,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Leaf element carrying only text content.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(name)
        }
    }

    pub fn push_attribute(&mut self, name: &str, value: impl ToString) {
        self.attributes.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    pub fn push_attribute_if_not_empty(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.push_attribute(name, value);
        }
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn push_text_child_if_not_empty(&mut self, name: &str, text: &str) {
        if !text.is_empty() {
            self.children.push(Element::with_text(name, text));
        }
    }
}

impl MarkupNode for Element {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
