//! Unification for backend-agnostic KR terms

pub mod mgu;

#[cfg(test)]
mod proptest_tests;

pub use mgu::{unify, unify_with_config, UnificationResult, UnifyConfig};
