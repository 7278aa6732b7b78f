//! A BST whose nodes exclusively own their children through `Box`es. The
//! tree owns an optional root and each node owns its optional left and
//! right subtrees, so dropping the tree drops every node it contains.
//!
//! # Examples
//!
//! ```
//! use ordtree::boxed::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.min(), None);
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert!(tree.contains(&2));
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.max(), Some(&3));
//!
//! // Deleting a value that isn't there does nothing.
//! tree.delete(&4);
//! assert_eq!(tree.len(), 3);
//!
//! tree.delete(&2);
//! assert!(!tree.contains(&2));
//! ```

use std::cmp::Ordering;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A Binary Search Tree storing values of type `T`. This can be used for
/// inserting, searching, and deleting values, looking up the minimum and
/// maximum, and visiting every value in inorder, preorder, or postorder.
///
/// Duplicate values are retained: inserting a value equal to one already
/// present adds a second occurrence, and [`delete`][Tree::delete] removes
/// one occurrence at a time.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
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
        Self { root: None, len: 0 }
    }

    /// Returns how many values are in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the given value into the tree as a new leaf. An empty tree
    /// gets a root.
    ///
    /// Values equal to one already present are routed into the right
    /// subtree and retained, so inserting the same value twice leaves two
    /// occurrences in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        Self::insert_into(&mut self.root, value);
        self.len += 1;
    }

    /// Returns whether the given value exists anywhere in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        Self::contains_in(&self.root, value)
    }

    /// Returns the smallest value in the tree, found by following left
    /// children from the root. Returns `None` on an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.root.as_deref().map(Self::min_value)
    }

    /// Returns the largest value in the tree, found by following right
    /// children from the root. Returns `None` on an empty tree.
    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.root.as_deref().map(|mut node| {
            while let Some(right) = node.right.as_deref() {
                node = right;
            }
            &node.value
        })
    }

    /// Deletes one occurrence of the given value from the tree. If the
    /// value is not present, nothing happens.
    ///
    /// A node with two children is not physically removed. Its value is
    /// overwritten with a clone of its in-order successor (the minimum of
    /// its right subtree) and the successor's original value is then
    /// deleted from the right subtree, which bottoms out in a leaf or
    /// single-child removal. The `Clone` bound exists for that value copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// // Deleting the root promotes its in-order successor.
    /// tree.delete(&2);
    ///
    /// assert!(!tree.contains(&2));
    /// assert!(tree.contains(&1));
    /// assert!(tree.contains(&3));
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord + Clone,
    {
        let (root, removed) = Self::delete_from(self.root.take(), value);
        self.root = root;
        if removed {
            self.len -= 1;
        }
    }

    /// Visits every value in ascending order: left subtree, then the node,
    /// then the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 1, 3] {
    ///     tree.insert(value);
    /// }
    ///
    /// let mut values = Vec::new();
    /// tree.for_each_inorder(|v| values.push(*v));
    ///
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn for_each_inorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        Self::inorder(&self.root, &mut visit);
    }

    /// Visits every value in preorder: the node, then its left subtree,
    /// then its right subtree.
    pub fn for_each_preorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        Self::preorder(&self.root, &mut visit);
    }

    /// Visits every value in postorder: the left subtree, then the right
    /// subtree, then the node.
    pub fn for_each_postorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        Self::postorder(&self.root, &mut visit);
    }

    fn insert_into(link: &mut Link<T>, value: T)
    where
        T: Ord,
    {
        match link {
            None => *link = Some(Box::new(Node::new(value))),
            Some(node) => {
                if value < node.value {
                    Self::insert_into(&mut node.left, value);
                } else {
                    Self::insert_into(&mut node.right, value);
                }
            }
        }
    }

    fn contains_in(link: &Link<T>, value: &T) -> bool
    where
        T: Ord,
    {
        match link {
            None => false,
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::contains_in(&node.left, value),
                Ordering::Equal => true,
                Ordering::Greater => Self::contains_in(&node.right, value),
            },
        }
    }

    fn min_value(mut node: &Node<T>) -> &T {
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        &node.value
    }

    /// Deletes the first node equal to `value` on the descent from `link`
    /// and returns the rebuilt subtree along with whether a node was
    /// removed.
    fn delete_from(link: Link<T>, value: &T) -> (Link<T>, bool)
    where
        T: Ord + Clone,
    {
        let mut node = match link {
            None => return (None, false),
            Some(node) => node,
        };
        match value.cmp(&node.value) {
            Ordering::Less => {
                let (new_left, removed) = Self::delete_from(node.left.take(), value);
                node.left = new_left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (new_right, removed) = Self::delete_from(node.right.take(), value);
                node.right = new_right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => (None, true),
                (None, Some(child)) | (Some(child), None) => (Some(child), true),
                (Some(left), Some(right)) => {
                    // Relabel this node with its in-order successor and
                    // delete the successor's original value from the right
                    // subtree. The successor has no left child, so that
                    // inner deletion cannot reach this case again on the
                    // same node.
                    let successor = Self::min_value(&right).clone();
                    let (new_right, _) = Self::delete_from(Some(right), &successor);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = new_right;
                    (Some(node), true)
                }
            },
        }
    }

    fn inorder<F>(link: &Link<T>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = link {
            Self::inorder(&node.left, visit);
            visit(&node.value);
            Self::inorder(&node.right, visit);
        }
    }

    fn preorder<F>(link: &Link<T>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = link {
            visit(&node.value);
            Self::preorder(&node.left, visit);
            Self::preorder(&node.right, visit);
        }
    }

    fn postorder<F>(link: &Link<T>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = link {
            Self::postorder(&node.left, visit);
            Self::postorder(&node.right, visit);
            visit(&node.value);
        }
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `Vec` standing in for a
    /// multiset. This way we can ensure that after a random smattering of
    /// inserts and deletes the tree holds exactly the modeled values.
    fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Vec<i8>) {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    tree.insert(*v);
                    model.push(*v);
                }
                Op::Delete(v) => {
                    tree.delete(v);
                    if let Some(pos) = model.iter().position(|x| x == v) {
                        model.remove(pos);
                    }
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn matches_multiset_model(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();
            do_ops(&ops, &mut tree, &mut model);
            model.sort_unstable();

            let mut inorder = Vec::new();
            tree.for_each_inorder(|v| inorder.push(*v));
            inorder == model && tree.len() == model.len()
        }
    }

    quickcheck::quickcheck! {
        fn min_and_max_match_inorder_ends(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();
            do_ops(&ops, &mut tree, &mut model);

            let mut inorder = Vec::new();
            tree.for_each_inorder(|v| inorder.push(*v));
            tree.min() == inorder.first() && tree.max() == inorder.last()
        }
    }
}
