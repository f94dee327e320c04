//! Backend-agnostic knowledge representation contracts
//!
//! This module defines the term/substitution model every concrete backend
//! implements: the [`Expression`]/[`Term`]/[`ProgramTerm`] capability traits,
//! predicate [`Signature`]s, [`Substitution`]s, and the formula wrappers
//! ([`DatabaseFormula`], [`Query`], [`Update`]) consumed by knowledge bases.

pub mod expression;
pub mod formula;
pub mod signature;
pub mod substitution;

pub use expression::{Construct, Expression, ProgramTerm, Term, TermView, Variable};
pub use formula::{DatabaseFormula, Query, Update};
pub use signature::Signature;
pub use substitution::{combine, Substitution};
