//! Link flat, parent-referencing records into ordered trees and forests.
//!
//! Caller types implement [`TreeRecord`]; [`build`] consumes a collection of
//! them and returns a [`TreeArena`] with parent/child indices wired and
//! siblings ascending by their order key. With the single-tree check enabled,
//! disconnected leftover groups fail the build instead of forming a forest.

pub mod arena;
pub mod builder;
pub mod errors;
pub mod record;

pub use arena::{Index, TreeArena, TreeNode};
pub use builder::build;
pub use errors::{TreeError, TreeResult};
pub use record::{compare, TreeRecord};
