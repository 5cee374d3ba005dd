//! Domain types and rules for the rashguard designer backend.
//!
//! Nothing in this crate performs I/O. Storage lives in `rashguard-db`,
//! the HTTP surface in `rashguard-api`.

pub mod error;
pub mod project;
pub mod types;
