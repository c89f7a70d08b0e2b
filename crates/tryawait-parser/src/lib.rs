//! Syntax tree types for the tryawait transform.
//!
//! This crate provides the data-oriented tree the transform operates on:
//! - `NodeArena` / `NodeIndex` / `NodeList` (pooled node storage)
//! - Node kind constants (`syntax_kind_ext`) and flags (`node_flags`)
//! - A node factory (`add_*`) and typed accessors (`get_*`)
//! - Transform utilities shared by rewriting passes
//!
//! There is no source text parser here; hosts build trees with the factory.

pub mod parser;
pub use parser::{NodeArena, NodeIndex, NodeList};

pub mod syntax;
