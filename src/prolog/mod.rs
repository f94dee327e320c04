//! In-tree Prolog-style reference backend
//!
//! Implements the generic KR contracts for a concrete term family. Serves as
//! the conformance reference for backend adapters and as the term family the
//! crate's own tests run on.

pub mod ops;
pub mod term;

pub use ops::is_reserved;
pub use term::{Term, Var};
