//! Height-balanced binary search tree collections.
//!
//! The centerpiece is [`AvlSet`](avl_tree::AvlSet), an ordered set of unique
//! values backed by an AVL tree: a self-balancing binary search tree where the
//! heights of the two child subtrees of any node differ by at most one, giving
//! logarithmic insertion, removal, and lookup.

extern crate serde;

pub mod avl_tree;
