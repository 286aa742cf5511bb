/// Read access to a markup tree node.
///
/// Lookups by name return the first match in document order. Absence is a
/// normal result, never an error.
pub trait MarkupNode: Sized {
    fn name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    fn children(&self) -> &[Self];

    fn text(&self) -> Option<&str>;

    fn child(&self, name: &str) -> Option<&Self> {
        self.children().iter().find(|c| c.name() == name)
    }

    fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.text())
    }

    fn children_named<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Self> {
        self.children().iter().filter(move |c| c.name() == name)
    }
}
