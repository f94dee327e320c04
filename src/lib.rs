//! termgraph: a backend-agnostic knowledge representation core
//!
//! This library provides the algorithmic substrate shared by logic-programming
//! backends: a generic term/substitution model, most-general-unifier
//! computation with occurs check, and a static dependency-graph analysis that
//! detects predicates which are defined but unused or queried but undefined.
//!
//! Concrete inference engines plug in by implementing the term contracts in
//! [`kr`]; the unifier and the analysis then work on their terms unchanged.
//! The [`prolog`] module ships a reference term family used by the crate's
//! own tests.

pub mod analysis;
pub mod error;
pub mod kr;
pub mod prolog;
pub mod unification;

// Re-export commonly used types
pub use analysis::{DependencyGraph, Node};
pub use error::{FormulaError, GraphError};
pub use kr::{
    combine, Construct, DatabaseFormula, Expression, ProgramTerm, Query, Signature, Substitution,
    Term, TermView, Update, Variable,
};
pub use unification::{unify, unify_with_config, UnificationResult, UnifyConfig};
