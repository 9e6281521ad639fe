//! Common utilities for marktree.
//!
//! This crate provides shared infrastructure used by the parser crates:
//! - **Warning System** - deduplicated, colored diagnostics for lenient parse paths

pub mod warning;
