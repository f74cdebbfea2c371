//! Open/closed elements and the section lists that contain them.
//!
//! A disclosure is anything with an open flag that can hide content. Section
//! bodies may contain further disclosures, to any depth. The layout stabilizer
//! walks this tree through the two traits below, which is also where tests plug
//! in fake layouts.

/// An element that can be opened or closed and may contain nested disclosures.
pub trait DisclosureNode {
    /// Current open attribute.
    fn is_open(&self) -> bool;

    /// Set the open attribute directly, without animating.
    fn set_open(&mut self, open: bool);

    /// Directly nested disclosures, in a stable order.
    fn nested_mut(&mut self) -> Vec<&mut dyn DisclosureNode>;
}

/// An ordered list of top-level sections whose outer width can be measured.
pub trait SectionTree {
    fn section_count(&self) -> usize;

    fn section_mut(&mut self, index: usize) -> Option<&mut dyn DisclosureNode>;

    /// Outer width of a top-level section in its current open/closed configuration.
    fn outer_width(&mut self, index: usize) -> f32;
}

/// Set the open attribute of the node at `path` below `node`.
///
/// Returns `false` when the path does not resolve.
pub(crate) fn set_open_at(node: &mut dyn DisclosureNode, path: &[usize], open: bool) -> bool {
    match path.split_first() {
        None => {
            node.set_open(open);
            true
        }
        Some((&index, rest)) => match node.nested_mut().into_iter().nth(index) {
            Some(child) => set_open_at(child, rest, open),
            None => false,
        },
    }
}
