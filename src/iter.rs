use crate::fibrope::{Node, Rope};
use crate::fragment::Fragment;

/// An iterator over the leaf fragments of a rope, in sequence order.
pub struct Chunks<'a, F> {
    // Subtrees still to visit; the nearest chunk is on top.
    stack: Vec<&'a Node<F>>,
}

impl<'a, F: Fragment> Iterator for Chunks<'a, F> {
    type Item = &'a F;

    fn next(&mut self) -> Option<&'a F> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf(fragment) => {
                    if !fragment.is_empty() {
                        return Some(fragment);
                    }
                }
                Node::Internal { left, right, .. } => {
                    self.stack.push(&**right);
                    self.stack.push(&**left);
                }
            }
        }
        None
    }
}

impl<F: Fragment> Rope<F> {
    /// Iterate over the rope's fragments without flattening it.
    pub fn chunks(&self) -> Chunks<'_, F> {
        Chunks {
            stack: self.root.iter().map(|node| &**node).collect(),
        }
    }
}

impl Rope<String> {
    /// Iterate over the rope's characters, in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chunks().flat_map(|chunk| chunk.chars())
    }
}
