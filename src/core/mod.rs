//! Core data types: the in-memory table abstraction and the output tree.

pub mod table;
pub mod tree;
