//! Borrowed in-memory markup tree, built without any parsing.

use super::node::MarkupNode;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryNode<'a> {
    name: &'a str,
    attributes: Vec<(&'a str, &'a str)>,
    children: Vec<MemoryNode<'a>>,
    text: Option<&'a str>,
}

impl<'a> MemoryNode<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: &'a str, value: &'a str) -> Self {
        self.attributes.push((name, value));
        self
    }

    pub fn with_text(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_child(mut self, child: MemoryNode<'a>) -> Self {
        self.children.push(child);
        self
    }

    /// Shorthand for a child carrying only text.
    pub fn with_text_child(self, name: &'a str, text: &'a str) -> Self {
        self.with_child(MemoryNode::new(name).with_text(text))
    }
}

impl MarkupNode for MemoryNode<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn text(&self) -> Option<&str> {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let node = MemoryNode::new("View")
            .with_attr("Name", "active_users")
            .with_attr("Updatable", "true")
            .with_text_child("Definition", "SELECT * FROM users")
            .with_child(MemoryNode::new("Field").with_attr("Name", "id"));

        assert_eq!(node.name(), "View");
        assert_eq!(node.attribute("Updatable"), Some("true"));
        assert_eq!(node.child_text("Definition"), Some("SELECT * FROM users"));
        assert_eq!(node.children_named("Field").count(), 1);
        assert_eq!(node.text(), None);
    }
}
