//! The capability contracts every concrete KR backend implements.
//!
//! A backend supplies one term family (variables, constants, compounds) and
//! plugs it into the generic unifier and dependency analysis by implementing
//! [`Expression`], [`Term`] and [`ProgramTerm`]. The generic code only ever
//! sees terms through these traits, so one analysis implementation serves
//! every backend.

use crate::kr::signature::Signature;
use crate::kr::substitution::Substitution;
use indexmap::IndexSet;
use std::fmt;
use std::hash::Hash;

/// A variable symbol of some term family.
pub trait Variable: Clone + Eq + Hash + fmt::Debug + fmt::Display {
    /// Produce a variant of this variable that is disjoint from `used`.
    ///
    /// Returns `self` unchanged when it is already outside the set. Used for
    /// capture avoidance when terms from different clauses are brought into
    /// the same scope.
    fn fresh_variant(&self, used: &IndexSet<Self>) -> Self;
}

/// An abstract unit of KR syntax.
///
/// Every instance is immutable; transformations return new values.
pub trait Expression: Clone + Eq + Hash + fmt::Debug + fmt::Display + Sized {
    /// The variable symbol type of this expression family.
    type Var: Variable;
    /// The term type substitutions of this family bind variables to.
    type Term: Term<Var = Self::Var>;

    /// The `name/arity` signature of the expression's head.
    fn signature(&self) -> Signature;

    /// The complete set of free variables, including those nested inside
    /// compound sub-terms.
    fn free_variables(&self) -> IndexSet<Self::Var>;

    /// Whether the expression contains no free variables.
    fn is_closed(&self) -> bool {
        self.free_variables().is_empty()
    }

    /// Return a copy with every bound free variable replaced by its binding.
    fn apply_substitution(&self, subst: &Substitution<Self::Term>) -> Self;
}

/// A borrowed view of a term's generic shape.
///
/// The unifier never inspects a backend term directly; it unifies over this
/// view. Constants carry no payload because constant equality is delegated to
/// the term type's `Eq`.
pub enum TermView<'a, T: Term> {
    Variable(&'a T::Var),
    Constant,
    Compound(&'a [T]),
}

/// An expression that participates in unification.
pub trait Term: Expression<Term = Self> {
    /// Expose the generic {variable, constant, compound} shape of this term.
    fn view(&self) -> TermView<'_, Self>;

    fn is_var(&self) -> bool {
        matches!(self.view(), TermView::Variable(_))
    }

    /// Most general unifier of `self` and `other`.
    ///
    /// `None` is the failure sentinel; unification failure is an expected,
    /// frequent outcome rather than an error. `x.mgu(&x)` succeeds with the
    /// empty substitution.
    fn mgu(&self, other: &Self) -> Option<Substitution<Self>> {
        crate::unification::unify(self, other)
    }
}

/// Classification of a program term's top-level construct.
///
/// Drives unpacking in the dependency graph: control constructs are
/// decomposed until only leaves remain that would actually trigger
/// evaluation in the underlying engine.
pub enum Construct<'a, T: ProgramTerm> {
    /// `head :- body`
    Implication { head: &'a T, body: &'a T },
    Negation(&'a T),
    Conjunction(&'a T, &'a T),
    Disjunction(&'a T, &'a T),
    /// Both the condition and the action are evaluated.
    ForAll { condition: &'a T, action: &'a T },
    /// Collect-into-set forms; only the generator sub-goal is evaluated
    /// as a predicate call.
    Aggregate { generator: &'a T },
    /// A call whose first argument names a predicate without its full
    /// argument list; `extra_args` arguments are appended at call time.
    MetaCall { goal: &'a T, extra_args: usize },
    /// A plain goal that dispatches to a predicate of its own signature.
    Leaf,
}

/// A term family with the control/structural operators of a logic program.
pub trait ProgramTerm: Term {
    /// Classify the top-level operator of this term.
    fn construct(&self) -> Construct<'_, Self>;

    /// Whether a signature belongs to the backend's reserved/built-in
    /// operator table. Reserved signatures never become graph nodes and may
    /// not be redefined.
    fn is_reserved(signature: &Signature) -> bool;

    /// Build the conjunction of two goals.
    fn conjoin(left: Self, right: Self) -> Self;

    /// Build the negation of a goal.
    fn negate(goal: Self) -> Self;
}
