//! Most general unifier (mgu) computation
//!
//! Robinson-style structural unification with occurs check over the generic
//! [`TermView`] shape. Works for any backend term family implementing the
//! [`Term`] contract.

use crate::kr::{Substitution, Term, TermView};

/// Result of a unification attempt. `None` is the failure sentinel;
/// failure is expected and frequent, never an error condition.
pub type UnificationResult<T> = Option<Substitution<T>>;

/// Limits for a unification run.
#[derive(Debug, Clone)]
pub struct UnifyConfig {
    /// Recursion bound for pathological, very deeply nested terms. The
    /// occurs check already rules out infinite terms; this guards the stack
    /// against legitimate but extreme nesting. Exceeding it fails the
    /// unification.
    pub max_depth: usize,
}

impl Default for UnifyConfig {
    fn default() -> Self {
        UnifyConfig { max_depth: 2048 }
    }
}

/// Unify two terms, returning a most general unifier if one exists.
pub fn unify<T: Term>(left: &T, right: &T) -> UnificationResult<T> {
    unify_with_config(left, right, &UnifyConfig::default())
}

/// Unify two terms under an explicit recursion bound.
pub fn unify_with_config<T: Term>(
    left: &T,
    right: &T,
    config: &UnifyConfig,
) -> UnificationResult<T> {
    let mut subst = Substitution::new();
    if unify_step(left, right, &mut subst, config.max_depth) {
        Some(subst)
    } else {
        None
    }
}

/// Unify two terms on top of the substitution accumulated so far.
///
/// Both operands are dereferenced first, so an argument unified here
/// observes every binding established by earlier arguments.
fn unify_step<T: Term>(left: &T, right: &T, subst: &mut Substitution<T>, depth: usize) -> bool {
    if depth == 0 {
        return false;
    }
    let left = left.apply_substitution(subst);
    let right = right.apply_substitution(subst);

    // Identical terms unify without a new binding; this also covers
    // self-unification of a variable and equal constants.
    if left == right {
        return true;
    }

    match (left.view(), right.view()) {
        (TermView::Variable(var), _) => {
            if right.free_variables().contains(var) {
                return false; // occurs check
            }
            subst.insert_normalized(var.clone(), right.clone());
            true
        }
        (_, TermView::Variable(var)) => {
            if left.free_variables().contains(var) {
                return false; // occurs check
            }
            subst.insert_normalized(var.clone(), left.clone());
            true
        }
        (TermView::Compound(left_args), TermView::Compound(right_args)) => {
            if left.signature() != right.signature() {
                return false;
            }
            // Strictly left to right: later arguments must see bindings
            // fixed by earlier ones.
            for (l, r) in left_args.iter().zip(right_args.iter()) {
                if !unify_step(l, r, subst, depth - 1) {
                    return false;
                }
            }
            true
        }
        // Kind mismatch, or two distinct constants.
        _ => false,
    }
}
