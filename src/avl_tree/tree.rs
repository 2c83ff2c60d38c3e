use crate::avl_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Returns the cached height of a subtree, where a missing subtree has height -1.
pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

/// Recomputes the height of the subtree root and restores the AVL invariant with at most two
/// rotations. A zig-zag shape is straightened by first rotating the heavy child in the opposite
/// direction, then the subtree root rotates towards the lighter side.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance_factor() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance_factor() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance_factor() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance_factor() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
//
// Every frame on the way back up rebalances, so detaching the minimum leaves the subtree with the
// AVL invariant intact.
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let has_left = match tree {
        Some(ref node) => node.left.is_some(),
        None => unreachable!(),
    };

    if has_left {
        let min = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance(tree);
        min
    } else {
        match tree.take() {
            Some(mut node) => {
                *tree = node.right.take();
                node
            },
            None => unreachable!(),
        }
    }
}

/// Inserts a value into the subtree, returning `true` if the value was not already present.
/// Inserting a value that already exists leaves the subtree untouched.
pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

/// Removes a value from the subtree, returning the value that was stored in the tree. A node with
/// two children takes its in-order successor, the leftmost value of its right subtree, which is in
/// turn removed from the right subtree with rebalancing along that path as well.
pub fn remove<T, V>(tree: &mut Tree<T>, value: &V) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => match value.cmp(node.value.borrow()) {
            Ordering::Less => {
                let ret = remove(&mut node.left, value);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, value);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let unboxed_node = *node;
                let Node { value, left, right, .. } = unboxed_node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, mut right) => {
                        let mut successor = remove_min(&mut right);
                        successor.left = left;
                        successor.right = right;
                        *tree = Some(successor);
                    },
                }
                Some(value)
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn get<'a, T, V>(tree: &'a Tree<T>, value: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(node.value.borrow()) {
            Ordering::Less => get(&node.left, value),
            Ordering::Greater => get(&node.right, value),
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

pub fn pre_order<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        values.push(&node.value);
        pre_order(&node.left, values);
        pre_order(&node.right, values);
    }
}

pub fn in_order<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        in_order(&node.left, values);
        values.push(&node.value);
        in_order(&node.right, values);
    }
}

pub fn post_order<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        post_order(&node.left, values);
        post_order(&node.right, values);
        values.push(&node.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_of_empty_tree() {
        let tree: Tree<u32> = None;
        assert_eq!(height(&tree), -1);
    }

    #[test]
    fn test_single_insert_creates_root_with_height_zero() {
        let mut tree = None;
        assert!(insert(&mut tree, 1));
        assert_eq!(height(&tree), 0);
    }

    #[test]
    fn test_left_heavy_chain_triggers_right_rotation() {
        let mut tree = None;
        insert(&mut tree, 3);
        insert(&mut tree, 2);
        insert(&mut tree, 1);

        let mut values = Vec::new();
        pre_order(&tree, &mut values);
        assert_eq!(values, [&2, &1, &3]);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_right_heavy_chain_triggers_left_rotation() {
        let mut tree = None;
        insert(&mut tree, 1);
        insert(&mut tree, 2);
        insert(&mut tree, 3);

        let mut values = Vec::new();
        pre_order(&tree, &mut values);
        assert_eq!(values, [&2, &1, &3]);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_zig_zag_triggers_double_rotation() {
        let mut tree = None;
        insert(&mut tree, 1);
        insert(&mut tree, 3);
        insert(&mut tree, 2);

        let mut values = Vec::new();
        pre_order(&tree, &mut values);
        assert_eq!(values, [&2, &1, &3]);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_remove_rebalances_on_the_way_up() {
        let mut tree = None;
        for value in &[4, 2, 6, 1, 3, 5, 7, 8] {
            insert(&mut tree, *value);
        }

        // Draining the left side forces a rotation at the old root to keep the tree
        // height-balanced.
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(remove(&mut tree, &2), Some(2));
        assert_eq!(remove(&mut tree, &3), Some(3));

        let mut values = Vec::new();
        in_order(&tree, &mut values);
        assert_eq!(values, [&4, &5, &6, &7, &8]);
        assert_eq!(height(&tree), 2);
    }
}
