//! Ordered map and set on a plain binary search tree, with an internal
//! visitor walk and resumable external in-order cursors. See [`BstMap`] for
//! the container itself and [`Cursor`] for the traversal machinery.

pub mod iter;
mod node;
pub mod set;
pub mod tree;

pub use compare::{natural, Compare, Natural};
pub use iter::{Cursor, IntoIter, Iter, Keys, Values};
pub use set::BstSet;
pub use tree::BstMap;
