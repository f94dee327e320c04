//! Predicate signatures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A predicate or operator signature: name plus arity.
///
/// Signatures are the sole key of the dependency graph, so two expressions
/// with the same logical head and arity must produce equal signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub arity: usize,
}

impl Signature {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Signature {
            name: name.into(),
            arity,
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    #[test]
    fn test_display() {
        assert_eq!(Signature::new("parent", 2).to_string(), "parent/2");
        assert_eq!(Signature::new("true", 0).to_string(), "true/0");
    }

    #[test]
    fn test_equality_is_name_and_arity() {
        assert_eq!(Signature::new("p", 1), Signature::new("p", 1));
        assert_ne!(Signature::new("p", 1), Signature::new("p", 2));
        assert_ne!(Signature::new("p", 1), Signature::new("q", 1));
    }

    #[test]
    fn test_usable_as_set_key() {
        let mut set = IndexSet::new();
        set.insert(Signature::new("p", 1));
        set.insert(Signature::new("p", 1));
        set.insert(Signature::new("q", 1));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Signature::new("p", 1)));
    }
}
