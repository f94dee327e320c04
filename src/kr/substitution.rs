//! Variable substitutions

use crate::kr::expression::Term;
use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// A finite mapping from variables to terms.
///
/// A substitution never binds one variable to two different terms; the
/// [`bind`](Substitution::bind) and [`combine`](Substitution::combine)
/// operations enforce this. Bindings iterate in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution<T: Term> {
    map: IndexMap<T::Var, T>,
}

impl<T: Term> Substitution<T> {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Get the term bound to a variable, if any.
    pub fn get(&self, var: &T::Var) -> Option<&T> {
        self.map.get(var)
    }

    pub fn contains(&self, var: &T::Var) -> bool {
        self.map.contains_key(var)
    }

    /// Bind a variable to a term. First binding wins: if the variable is
    /// already bound the call is a no-op and returns `false`.
    ///
    /// Callers rely on re-application not clobbering earlier bindings, so
    /// this must stay idempotent.
    pub fn bind(&mut self, var: T::Var, term: T) -> bool {
        if self.map.contains_key(&var) {
            return false;
        }
        self.map.insert(var, term);
        true
    }

    /// Bind a variable with eager propagation: the new term is dereferenced
    /// through the existing bindings, and the new binding is applied to every
    /// existing bound term.
    ///
    /// Keeps the substitution idempotent (no bound term mentions a domain
    /// variable), which the unifier depends on. The caller is responsible for
    /// the occurs check.
    pub fn insert_normalized(&mut self, var: T::Var, term: T) {
        let term = term.apply_substitution(self);
        let mut single = Substitution::new();
        single.bind(var.clone(), term.clone());
        for bound in self.map.values_mut() {
            *bound = bound.apply_substitution(&single);
        }
        self.map.insert(var, term);
    }

    /// Union of the bindings of `self` and `other`, or `None` when the two
    /// operands bind some variable to different terms after dereferencing
    /// both terms through both operands.
    pub fn combine(&self, other: &Substitution<T>) -> Option<Substitution<T>> {
        for (var, term) in other.iter() {
            if let Some(existing) = self.get(var) {
                let lhs = existing.apply_substitution(self).apply_substitution(other);
                let rhs = term.apply_substitution(other).apply_substitution(self);
                if lhs != rhs {
                    return None;
                }
            }
        }
        let mut result = self.clone();
        for (var, term) in other.iter() {
            result.bind(var.clone(), term.clone());
        }
        Some(result)
    }

    /// Remove the binding for a variable; returns whether one existed.
    pub fn remove(&mut self, var: &T::Var) -> bool {
        self.map.shift_remove(var).is_some()
    }

    /// Drop every binding whose variable is not in `keep`. Never adds
    /// bindings; returns whether anything was removed.
    pub fn retain_all(&mut self, keep: &IndexSet<T::Var>) -> bool {
        let before = self.map.len();
        self.map.retain(|var, _| keep.contains(var));
        self.map.len() != before
    }

    /// The bound variables, in insertion order.
    pub fn domain(&self) -> impl Iterator<Item = &T::Var> {
        self.map.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T::Var, &T)> {
        self.map.iter()
    }
}

impl<T: Term> Default for Substitution<T> {
    fn default() -> Self {
        Substitution::new()
    }
}

impl<T: Term> fmt::Display for Substitution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} -> {}", var, term)?;
        }
        write!(f, "}}")
    }
}

/// Combine two possibly-failed substitutions.
///
/// A `None` operand is a prior unification failure; it propagates through
/// chains of `combine` calls without explicit short-circuit checks at every
/// call site.
pub fn combine<T: Term>(
    left: Option<Substitution<T>>,
    right: Option<Substitution<T>>,
) -> Option<Substitution<T>> {
    match (left, right) {
        (Some(left), Some(right)) => left.combine(&right),
        _ => None,
    }
}
