//! Reserved operators and control-construct classification

use crate::kr::{Construct, ProgramTerm, Signature};
use crate::prolog::term::Term;

/// Whether a signature belongs to the built-in operator table.
///
/// Reserved signatures dispatch to the engine itself, never to user
/// predicates: they are filtered during unpacking and may not be redefined.
pub fn is_reserved(signature: &Signature) -> bool {
    // call/N is reserved for every arity
    if signature.name == "call" {
        return true;
    }
    matches!(
        (signature.name.as_str(), signature.arity),
        ("true", 0)
            | ("fail", 0)
            | ("false", 0)
            | ("!", 0)
            | ("nl", 0)
            | ("halt", 0)
            | ("var", 1)
            | ("nonvar", 1)
            | ("atom", 1)
            | ("number", 1)
            | ("write", 1)
            | ("=", 2)
            | ("\\=", 2)
            | ("==", 2)
            | ("\\==", 2)
            | ("is", 2)
            | ("<", 2)
            | (">", 2)
            | ("=<", 2)
            | (">=", 2)
            | ("=:=", 2)
            | ("=\\=", 2)
            | (":-", 2)
            | (",", 2)
            | (";", 2)
            | ("->", 2)
            | ("\\+", 1)
            | ("not", 1)
            | ("forall", 2)
            | ("findall", 3)
            | ("bagof", 3)
            | ("setof", 3)
    )
}

impl ProgramTerm for Term {
    fn construct(&self) -> Construct<'_, Term> {
        if let Term::Compound { functor, args } = self {
            match (functor.as_str(), args.len()) {
                (":-", 2) => Construct::Implication {
                    head: &args[0],
                    body: &args[1],
                },
                (",", 2) => Construct::Conjunction(&args[0], &args[1]),
                (";", 2) => Construct::Disjunction(&args[0], &args[1]),
                // if-then evaluates both sides, like a conjunction
                ("->", 2) => Construct::Conjunction(&args[0], &args[1]),
                ("\\+", 1) | ("not", 1) => Construct::Negation(&args[0]),
                ("forall", 2) => Construct::ForAll {
                    condition: &args[0],
                    action: &args[1],
                },
                ("findall", 3) | ("bagof", 3) | ("setof", 3) => Construct::Aggregate {
                    generator: &args[1],
                },
                ("call", n) if n >= 1 => Construct::MetaCall {
                    goal: &args[0],
                    extra_args: n - 1,
                },
                _ => Construct::Leaf,
            }
        } else {
            Construct::Leaf
        }
    }

    fn is_reserved(signature: &Signature) -> bool {
        is_reserved(signature)
    }

    fn conjoin(left: Term, right: Term) -> Term {
        Term::conj(left, right)
    }

    fn negate(goal: Term) -> Term {
        Term::neg(goal)
    }
}
