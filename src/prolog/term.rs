//! Prolog-style reference terms
//!
//! The in-tree backend used to exercise the generic contracts. A real
//! engine adapter would supply its own term family the same way.

use crate::kr::{Expression, Signature, Substitution, Term as TermContract, TermView, Variable};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named logic variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Var {
    pub name: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Var { name: name.into() }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Variable for Var {
    fn fresh_variant(&self, used: &IndexSet<Var>) -> Var {
        if !used.contains(self) {
            return self.clone();
        }
        let mut counter = 0usize;
        loop {
            let candidate = Var::new(format!("{}_{}", self.name, counter));
            if !used.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// A Prolog-style term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Var(Var),
    Atom(String),
    Int(i64),
    Compound { functor: String, args: Vec<Term> },
}

impl Term {
    pub fn var(name: impl Into<String>) -> Term {
        Term::Var(Var::new(name))
    }

    pub fn atom(name: impl Into<String>) -> Term {
        Term::Atom(name.into())
    }

    pub fn int(value: i64) -> Term {
        Term::Int(value)
    }

    /// A compound term; zero arguments collapse to an atom.
    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Term {
        let functor = functor.into();
        if args.is_empty() {
            Term::Atom(functor)
        } else {
            Term::Compound { functor, args }
        }
    }

    /// `head :- body`
    pub fn clause(head: Term, body: Term) -> Term {
        Term::compound(":-", vec![head, body])
    }

    pub fn conj(left: Term, right: Term) -> Term {
        Term::compound(",", vec![left, right])
    }

    pub fn disj(left: Term, right: Term) -> Term {
        Term::compound(";", vec![left, right])
    }

    pub fn neg(goal: Term) -> Term {
        Term::compound("\\+", vec![goal])
    }

    pub fn forall(condition: Term, action: Term) -> Term {
        Term::compound("forall", vec![condition, action])
    }

    pub fn findall(template: Term, generator: Term, bag: Term) -> Term {
        Term::compound("findall", vec![template, generator, bag])
    }

    /// `call(Goal, Extra...)`
    pub fn call(goal: Term, extra: Vec<Term>) -> Term {
        let mut args = vec![goal];
        args.extend(extra);
        Term::Compound {
            functor: "call".to_string(),
            args,
        }
    }

    fn collect_variables(&self, vars: &mut IndexSet<Var>) {
        match self {
            Term::Var(v) => {
                vars.insert(v.clone());
            }
            Term::Atom(_) | Term::Int(_) => {}
            Term::Compound { args, .. } => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }
}

impl Expression for Term {
    type Var = Var;
    type Term = Term;

    fn signature(&self) -> Signature {
        match self {
            Term::Var(v) => Signature::new(v.name.clone(), 0),
            Term::Atom(name) => Signature::new(name.clone(), 0),
            Term::Int(value) => Signature::new(value.to_string(), 0),
            Term::Compound { functor, args } => Signature::new(functor.clone(), args.len()),
        }
    }

    fn free_variables(&self) -> IndexSet<Var> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn apply_substitution(&self, subst: &Substitution<Term>) -> Term {
        match self {
            Term::Var(v) => subst.get(v).cloned().unwrap_or_else(|| self.clone()),
            Term::Atom(_) | Term::Int(_) => self.clone(),
            Term::Compound { functor, args } => Term::Compound {
                functor: functor.clone(),
                args: args.iter().map(|a| a.apply_substitution(subst)).collect(),
            },
        }
    }
}

impl TermContract for Term {
    fn view(&self) -> TermView<'_, Term> {
        match self {
            Term::Var(v) => TermView::Variable(v),
            Term::Atom(_) | Term::Int(_) => TermView::Constant,
            Term::Compound { args, .. } => TermView::Compound(args),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{}", v),
            Term::Atom(name) => write!(f, "{}", name),
            Term::Int(value) => write!(f, "{}", value),
            Term::Compound { functor, args } => match (functor.as_str(), args.len()) {
                (":-", 2) => write!(f, "{} :- {}", args[0], args[1]),
                ("," | ";", 2) => write!(f, "({}{} {})", args[0], functor, args[1]),
                _ => {
                    write!(f, "{}(", functor)?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ")")
                }
            },
        }
    }
}
