//! Error types for termgraph

use crate::kr::Signature;
use thiserror::Error;

/// Structural violations raised while building a dependency graph.
///
/// Fatal only for the offending `add` call; the graph retains all
/// previously added nodes unchanged. Unification failure is not an error
/// (it is the `None` sentinel of the unifier).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("an implication cannot be posed as a query: {0}")]
    QueriedImplication(Signature),

    #[error("illegal redefinition of reserved operator {0}")]
    ReservedRedefinition(Signature),
}

/// Violations of the formula wrappers' structural invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("formula {0} decomposes into further database formulas")]
    Composite(Signature),

    #[error("goal {0} is not part of a conjunction of signed literals")]
    NotALiteralConjunction(Signature),
}
