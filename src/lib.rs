//! This crate exposes ordered, mutable Binary Search Trees (BSTs) in two
//! interchangeable representations.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search for, and delete stored values, look up the minimum and
//! maximum, and walk all values in a chosen order. BSTs are typically
//! defined recursively using the notion of a `Node`. A `Node` stores a
//! value and sometimes has child `Node`s. The most important invariants
//! of the trees in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    strictly less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than *or equal to* its own value. Duplicates are retained,
//!    not merged: inserting an equal value routes it into the right
//!    subtree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). No rebalancing is
//! performed, so inserting values in sorted order degenerates the tree
//! into a list and `height` becomes `O(N)`. BSTs naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then
//! the right subtree; that walk and the two other classic orders are
//! exposed as visitor-style traversals.
//!
//! ## Representations
//!
//! * [`boxed`] — each node exclusively owns its children through `Box`es.
//! * [`arena`] — nodes live in a growable slot table and reference their
//!   children by index; deleted slots are recycled through a free list.
//!
//! Both expose the same API with the same observable behavior.

#![deny(missing_docs)]

pub mod arena;
pub mod boxed;
