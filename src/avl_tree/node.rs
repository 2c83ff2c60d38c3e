use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
///
/// A missing subtree has height -1, so a freshly created leaf has height 0.
pub struct Node<T> {
    pub value: T,
    pub height: i32,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    /// Recomputes the cached height from the children's cached heights.
    pub fn update(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }
}
