//! Property-based tests for unification and substitution using proptest.

use super::unify;
use crate::kr::{combine, Expression, Substitution};
use crate::prolog::Term;
use proptest::prelude::*;

/// Generate a random term of bounded depth from a small fixed symbol pool.
fn arb_term(max_depth: u32) -> BoxedStrategy<Term> {
    if max_depth == 0 {
        prop_oneof![
            (0..4u8).prop_map(|i| Term::var(format!("X{}", i))),
            (0..4u8).prop_map(|i| Term::atom(format!("c{}", i))),
        ]
        .boxed()
    } else {
        prop_oneof![
            3 => (0..4u8).prop_map(|i| Term::var(format!("X{}", i))),
            3 => (0..4u8).prop_map(|i| Term::atom(format!("c{}", i))),
            2 => (0..2u8, proptest::collection::vec(arb_term(max_depth - 1), 1..=2))
                .prop_map(|(f, args)| Term::compound(format!("f{}", f), args)),
        ]
        .boxed()
    }
}

proptest! {
    /// Soundness: if unify(s, t) = sigma, then s sigma = t sigma
    #[test]
    fn unification_soundness(t1 in arb_term(3), t2 in arb_term(3)) {
        if let Some(sigma) = unify(&t1, &t2) {
            let t1_sigma = t1.apply_substitution(&sigma);
            let t2_sigma = t2.apply_substitution(&sigma);
            prop_assert_eq!(t1_sigma, t2_sigma, "unifier must make terms equal");
        }
        // If unification fails, that's fine — no property to check
    }

    /// Symmetry: unify(s, t) succeeds iff unify(t, s) succeeds, and either
    /// result identifies the two terms.
    #[test]
    fn unification_symmetry(t1 in arb_term(3), t2 in arb_term(3)) {
        let r1 = unify(&t1, &t2);
        let r2 = unify(&t2, &t1);
        prop_assert_eq!(r1.is_some(), r2.is_some(), "unification should be symmetric");
        if let Some(sigma) = r2 {
            prop_assert_eq!(
                t1.apply_substitution(&sigma),
                t2.apply_substitution(&sigma),
                "the flipped unifier must also identify both terms"
            );
        }
    }

    /// Idempotence: re-applying the returned substitution changes nothing.
    #[test]
    fn unifier_is_idempotent(t1 in arb_term(3), t2 in arb_term(3)) {
        if let Some(sigma) = unify(&t1, &t2) {
            for (_, bound) in sigma.iter() {
                prop_assert_eq!(
                    &bound.apply_substitution(&sigma),
                    bound,
                    "no bound term may mention a domain variable"
                );
            }
            let once = t1.apply_substitution(&sigma);
            prop_assert_eq!(once.apply_substitution(&sigma), once);
        }
    }

    /// Occurs check: unify(X, f(...X...)) always fails.
    #[test]
    fn unification_occurs_check(func_idx in 0..2u8, depth in 1..4u32) {
        let x = Term::var("X");
        let mut term = x.clone();
        for _ in 0..depth {
            term = Term::compound(format!("f{}", func_idx), vec![term]);
        }
        prop_assert!(unify(&x, &term).is_none(), "occurs check should prevent X = f(...X...)");
    }

    /// Identity: unify(t, t) succeeds and its unifier leaves t unchanged.
    #[test]
    fn unification_identity(t in arb_term(3)) {
        let result = unify(&t, &t);
        prop_assert!(result.is_some(), "term should unify with itself");
        if let Some(sigma) = result {
            prop_assert_eq!(t.apply_substitution(&sigma), t);
        }
    }
}

proptest! {
    /// Empty substitution is identity.
    #[test]
    fn substitution_identity(t in arb_term(3)) {
        let empty: Substitution<Term> = Substitution::new();
        prop_assert_eq!(t.apply_substitution(&empty), t);
    }

    /// Combining a unifier with the empty substitution is the unifier.
    #[test]
    fn combine_with_empty_is_identity(t1 in arb_term(3), t2 in arb_term(3)) {
        if let Some(sigma) = unify(&t1, &t2) {
            let combined = sigma.combine(&Substitution::new());
            prop_assert_eq!(combined, Some(sigma));
        }
    }

    /// A failed operand poisons any combine chain.
    #[test]
    fn combine_failure_propagates(t1 in arb_term(3), t2 in arb_term(3)) {
        let sigma = unify(&t1, &t2);
        prop_assert_eq!(combine(sigma, None), None);
    }

    /// A substitution combined with itself is itself.
    #[test]
    fn combine_is_reflexive(t1 in arb_term(3), t2 in arb_term(3)) {
        if let Some(sigma) = unify(&t1, &t2) {
            prop_assert_eq!(sigma.combine(&sigma), Some(sigma));
        }
    }
}
