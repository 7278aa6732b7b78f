//! A BST whose nodes live in a growable slot table instead of individual
//! heap allocations. Children are referenced by index, and slots freed by
//! deletion go on a free list so later insertions reuse them. The index
//! links never leave this module, so the table is observably identical to
//! the [`boxed`][crate::boxed] representation.
//!
//! # Examples
//!
//! ```
//! use ordtree::arena::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [50, 30, 70, 20] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.min(), Some(&20));
//! assert_eq!(tree.max(), Some(&70));
//!
//! tree.delete(&30);
//!
//! let mut values = Vec::new();
//! tree.for_each_inorder(|v| values.push(*v));
//! assert_eq!(values, [20, 50, 70]);
//! ```

use std::cmp::Ordering;

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant,
}

/// A Binary Search Tree storing values of type `T` in an index-based
/// arena. The API and observable behavior match
/// [`boxed::Tree`][crate::boxed::Tree]; only the storage differs.
///
/// Duplicate values are retained: inserting a value equal to one already
/// present adds a second occurrence, and [`delete`][Tree::delete] removes
/// one occurrence at a time.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    root: Option<usize>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Returns how many values are in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the given value into the tree as a new leaf, reusing a
    /// freed slot when one is available. Values equal to one already
    /// present are routed into the right subtree and retained.
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let root = self.root;
        let root = self.insert_at(root, value);
        self.root = Some(root);
        self.len += 1;
    }

    /// Returns whether the given value exists anywhere in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.contains_at(self.root, value)
    }

    /// Returns the smallest value in the tree, or `None` if it is empty.
    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.root.map(|root| &self.node(self.min_at(root)).value)
    }

    /// Returns the largest value in the tree, or `None` if it is empty.
    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.root.map(|root| {
            let mut idx = root;
            while let Some(right) = self.node(idx).right {
                idx = right;
            }
            &self.node(idx).value
        })
    }

    /// Deletes one occurrence of the given value from the tree, returning
    /// its slot to the free list. If the value is not present, nothing
    /// happens.
    ///
    /// A node with two children is relabeled with a clone of its in-order
    /// successor's value and the successor's original value is then
    /// deleted from the right subtree; see
    /// [`boxed::Tree::delete`][crate::boxed::Tree::delete].
    pub fn delete(&mut self, value: &T)
    where
        T: Ord + Clone,
    {
        let root = self.root;
        let (root, removed) = self.delete_at(root, value);
        self.root = root;
        if removed {
            self.len -= 1;
        }
    }

    /// Visits every value in ascending order: left subtree, then the node,
    /// then the right subtree.
    pub fn for_each_inorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.inorder_at(self.root, &mut visit);
    }

    /// Visits every value in preorder: the node, then its left subtree,
    /// then its right subtree.
    pub fn for_each_preorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.preorder_at(self.root, &mut visit);
    }

    /// Visits every value in postorder: the left subtree, then the right
    /// subtree, then the node.
    pub fn for_each_postorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.postorder_at(self.root, &mut visit);
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("tree link points at a vacant slot"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("tree link points at a vacant slot"),
        }
    }

    fn alloc(&mut self, value: T) -> usize {
        let node = Node {
            value,
            left: None,
            right: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn dealloc(&mut self, idx: usize) {
        self.slots[idx] = Slot::Vacant;
        self.free.push(idx);
    }

    fn insert_at(&mut self, link: Option<usize>, value: T) -> usize
    where
        T: Ord,
    {
        match link {
            None => self.alloc(value),
            Some(idx) => {
                if value < self.node(idx).value {
                    let left = self.node(idx).left;
                    let new_left = self.insert_at(left, value);
                    self.node_mut(idx).left = Some(new_left);
                } else {
                    let right = self.node(idx).right;
                    let new_right = self.insert_at(right, value);
                    self.node_mut(idx).right = Some(new_right);
                }
                idx
            }
        }
    }

    fn contains_at(&self, link: Option<usize>, value: &T) -> bool
    where
        T: Ord,
    {
        match link {
            None => false,
            Some(idx) => {
                let node = self.node(idx);
                match value.cmp(&node.value) {
                    Ordering::Less => self.contains_at(node.left, value),
                    Ordering::Equal => true,
                    Ordering::Greater => self.contains_at(node.right, value),
                }
            }
        }
    }

    fn min_at(&self, mut idx: usize) -> usize {
        while let Some(left) = self.node(idx).left {
            idx = left;
        }
        idx
    }

    /// Deletes the first node equal to `value` on the descent from `link`
    /// and returns the rebuilt link along with whether a node was removed.
    fn delete_at(&mut self, link: Option<usize>, value: &T) -> (Option<usize>, bool)
    where
        T: Ord + Clone,
    {
        let idx = match link {
            None => return (None, false),
            Some(idx) => idx,
        };
        match value.cmp(&self.node(idx).value) {
            Ordering::Less => {
                let left = self.node(idx).left;
                let (new_left, removed) = self.delete_at(left, value);
                self.node_mut(idx).left = new_left;
                (Some(idx), removed)
            }
            Ordering::Greater => {
                let right = self.node(idx).right;
                let (new_right, removed) = self.delete_at(right, value);
                self.node_mut(idx).right = new_right;
                (Some(idx), removed)
            }
            Ordering::Equal => {
                let (left, right) = {
                    let node = self.node(idx);
                    (node.left, node.right)
                };
                match (left, right) {
                    (None, None) => {
                        self.dealloc(idx);
                        (None, true)
                    }
                    (None, Some(child)) | (Some(child), None) => {
                        self.dealloc(idx);
                        (Some(child), true)
                    }
                    (Some(_), Some(right)) => {
                        // Same relabeling as the boxed representation: the
                        // successor's value replaces this node's and its
                        // original position is deleted from the right
                        // subtree.
                        let successor = self.node(self.min_at(right)).value.clone();
                        let (new_right, _) = self.delete_at(Some(right), &successor);
                        let node = self.node_mut(idx);
                        node.value = successor;
                        node.right = new_right;
                        (Some(idx), true)
                    }
                }
            }
        }
    }

    fn inorder_at<F>(&self, link: Option<usize>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(idx) = link {
            let node = self.node(idx);
            self.inorder_at(node.left, visit);
            visit(&node.value);
            self.inorder_at(node.right, visit);
        }
    }

    fn preorder_at<F>(&self, link: Option<usize>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(idx) = link {
            let node = self.node(idx);
            visit(&node.value);
            self.preorder_at(node.left, visit);
            self.preorder_at(node.right, visit);
        }
    }

    fn postorder_at<F>(&self, link: Option<usize>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(idx) = link {
            let node = self.node(idx);
            self.postorder_at(node.left, visit);
            self.postorder_at(node.right, visit);
            visit(&node.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inorder(tree: &Tree<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        tree.for_each_inorder(|v| out.push(*v));
        out
    }

    fn preorder(tree: &Tree<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        tree.for_each_preorder(|v| out.push(*v));
        out
    }

    fn postorder(tree: &Tree<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        tree.for_each_postorder(|v| out.push(*v));
        out
    }

    fn sample_tree() -> Tree<i32> {
        let mut tree = Tree::new();
        for value in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(value);
        }
        tree
    }

    #[test]
    fn empty_tree() {
        let tree: Tree<i32> = Tree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert!(!tree.contains(&1));
    }

    #[test]
    fn traversal_orders() {
        let tree = sample_tree();

        assert_eq!(inorder(&tree), [20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(preorder(&tree), [50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(postorder(&tree), [20, 40, 30, 60, 80, 70, 50]);
    }

    #[test]
    fn min_max_and_contains() {
        let tree = sample_tree();

        assert_eq!(tree.min(), Some(&20));
        assert_eq!(tree.max(), Some(&80));
        assert!(tree.contains(&40));
        assert!(!tree.contains(&90));
    }

    #[test]
    fn delete_cases() {
        // Leaf.
        let mut tree = sample_tree();
        tree.delete(&20);
        assert_eq!(inorder(&tree), [30, 40, 50, 60, 70, 80]);

        // One child.
        let mut tree = sample_tree();
        tree.delete(&20);
        tree.delete(&30);
        assert_eq!(inorder(&tree), [40, 50, 60, 70, 80]);

        // Two children at the root; the successor takes its place.
        let mut tree = sample_tree();
        tree.delete(&50);
        assert_eq!(inorder(&tree), [20, 30, 40, 60, 70, 80]);
        assert_eq!(preorder(&tree), [60, 30, 20, 40, 70, 80]);
    }

    #[test]
    fn delete_absent_value_is_a_no_op() {
        let mut tree = sample_tree();
        tree.delete(&90);

        assert_eq!(inorder(&tree), [20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn duplicates_are_retained_and_deleted_one_at_a_time() {
        let mut tree = Tree::new();
        tree.insert(5);
        tree.insert(3);
        tree.insert(5);

        assert_eq!(inorder(&tree), [3, 5, 5]);

        tree.delete(&5);
        assert_eq!(inorder(&tree), [3, 5]);

        tree.delete(&5);
        assert_eq!(inorder(&tree), [3]);
    }

    #[test]
    fn deletion_frees_slots_and_insertion_reuses_them() {
        let mut tree = sample_tree();
        assert_eq!(tree.slots.len(), 7);
        assert!(tree.free.is_empty());

        tree.delete(&20);
        tree.delete(&40);
        assert_eq!(tree.slots.len(), 7);
        assert_eq!(tree.free.len(), 2);

        // The table must not grow while freed slots remain.
        tree.insert(45);
        tree.insert(25);
        assert_eq!(tree.slots.len(), 7);
        assert!(tree.free.is_empty());

        tree.insert(65);
        assert_eq!(tree.slots.len(), 8);

        assert_eq!(inorder(&tree), [25, 30, 45, 50, 60, 65, 70, 80]);
    }

    #[test]
    fn two_children_delete_frees_the_relocated_slot() {
        let mut tree = sample_tree();
        tree.delete(&50);

        // One node was physically removed even though the root was only
        // relabeled.
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.free.len(), 1);
    }
}
