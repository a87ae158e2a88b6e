//! gridatlas (workspace facade crate).
//!
//! This package keeps the `gridatlas::{core,term,types,world}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use gridatlas_core as core;
pub use gridatlas_term as term;
pub use gridatlas_types as types;
pub use gridatlas_world as world;

pub mod probe;
