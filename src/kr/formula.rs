//! Database formulas, queries, and updates

use crate::error::FormulaError;
use crate::kr::expression::{Construct, Expression, ProgramTerm};
use crate::kr::signature::Signature;
use crate::kr::substitution::Substitution;
use indexmap::IndexSet;
use std::fmt;

/// An expression insertable into a knowledge base.
///
/// A database formula never decomposes into further insertable formulas:
/// conjunctions and disjunctions must be split before insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseFormula<T: ProgramTerm>(T);

impl<T: ProgramTerm> DatabaseFormula<T> {
    pub fn new(term: T) -> Result<Self, FormulaError> {
        match term.construct() {
            Construct::Conjunction(..) | Construct::Disjunction(..) => {
                Err(FormulaError::Composite(term.signature()))
            }
            _ => Ok(DatabaseFormula(term)),
        }
    }

    pub fn term(&self) -> &T {
        &self.0
    }

    pub fn into_term(self) -> T {
        self.0
    }
}

impl<T: ProgramTerm> Expression for DatabaseFormula<T> {
    type Var = T::Var;
    type Term = T;

    fn signature(&self) -> Signature {
        self.0.signature()
    }

    fn free_variables(&self) -> IndexSet<T::Var> {
        self.0.free_variables()
    }

    fn apply_substitution(&self, subst: &Substitution<T>) -> Self {
        DatabaseFormula(self.0.apply_substitution(subst))
    }
}

impl<T: ProgramTerm> fmt::Display for DatabaseFormula<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An expression posed for evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query<T: ProgramTerm>(T);

impl<T: ProgramTerm> Query<T> {
    pub fn new(goal: T) -> Self {
        Query(goal)
    }

    pub fn goal(&self) -> &T {
        &self.0
    }

    pub fn into_goal(self) -> T {
        self.0
    }

    /// Split a conjunction of signed literals into an update: positive
    /// literals go to the add list, negated literals to the delete list.
    pub fn to_update(&self) -> Result<Update<T>, FormulaError> {
        let mut update = Update::new();
        split_literals(&self.0, &mut update)?;
        Ok(update)
    }
}

fn split_literals<T: ProgramTerm>(goal: &T, update: &mut Update<T>) -> Result<(), FormulaError> {
    match goal.construct() {
        Construct::Conjunction(left, right) => {
            split_literals(left, update)?;
            split_literals(right, update)?;
            Ok(())
        }
        Construct::Negation(inner) => {
            update.deletions.push(DatabaseFormula::new(inner.clone())?);
            Ok(())
        }
        Construct::Leaf => {
            update.additions.push(DatabaseFormula::new(goal.clone())?);
            Ok(())
        }
        _ => Err(FormulaError::NotALiteralConjunction(goal.signature())),
    }
}

impl<T: ProgramTerm> Expression for Query<T> {
    type Var = T::Var;
    type Term = T;

    fn signature(&self) -> Signature {
        self.0.signature()
    }

    fn free_variables(&self) -> IndexSet<T::Var> {
        self.0.free_variables()
    }

    fn apply_substitution(&self, subst: &Substitution<T>) -> Self {
        Query(self.0.apply_substitution(subst))
    }
}

impl<T: ProgramTerm> fmt::Display for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A conjunction of signed literals, split into an add list and a delete
/// list of database formulas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update<T: ProgramTerm> {
    pub additions: Vec<DatabaseFormula<T>>,
    pub deletions: Vec<DatabaseFormula<T>>,
}

impl<T: ProgramTerm> Update<T> {
    pub fn new() -> Self {
        Update {
            additions: Vec::new(),
            deletions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty()
    }

    /// Rebuild the conjunction of signed literals this update was split
    /// from. `None` when the update is empty.
    pub fn to_query(&self) -> Option<Query<T>> {
        let mut goals: Vec<T> = self.additions.iter().map(|f| f.term().clone()).collect();
        goals.extend(
            self.deletions
                .iter()
                .map(|f| T::negate(f.term().clone())),
        );

        let mut iter = goals.into_iter();
        let first = iter.next()?;
        Some(Query::new(iter.fold(first, T::conjoin)))
    }
}

impl<T: ProgramTerm> Default for Update<T> {
    fn default() -> Self {
        Update::new()
    }
}
