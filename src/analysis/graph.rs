//! Static dependency analysis over a logic program
//!
//! A [`DependencyGraph`] ingests the definitions and queries of one program
//! or module and answers which predicates are defined but never queried,
//! queried but never defined, and which leaf predicates a given predicate
//! ultimately depends on. Nodes are created lazily on first reference and
//! keyed by signature; one graph covers one analysis pass.

use crate::analysis::node::Node;
use crate::error::GraphError;
use crate::kr::{Construct, ProgramTerm, Query, Signature};
use indexmap::{IndexMap, IndexSet};

#[derive(Debug, Clone)]
pub struct DependencyGraph<T: ProgramTerm> {
    nodes: IndexMap<Signature, Node<T>>,
}

impl<T: ProgramTerm> DependencyGraph<T> {
    pub fn new() -> Self {
        DependencyGraph {
            nodes: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, signature: &Signature) -> Option<&Node<T>> {
        self.nodes.get(signature)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.values()
    }

    /// Ingest one formula.
    ///
    /// An implication `head :- body` records a definition of the head and a
    /// dependency edge to every leaf unpacked from the body; it can never be
    /// marked `queried`. Any other formula is unpacked and every leaf records
    /// a definition and/or query occurrence according to the flags.
    ///
    /// Structural errors abort only this call; the graph is left unchanged.
    pub fn add(&mut self, formula: &T, defined: bool, queried: bool) -> Result<(), GraphError> {
        if let Construct::Implication { head, body } = formula.construct() {
            if queried {
                return Err(GraphError::QueriedImplication(formula.signature()));
            }
            let head_sig = head.signature();
            if T::is_reserved(&head_sig) {
                return Err(GraphError::ReservedRedefinition(head_sig));
            }

            let goals = unpack(body);
            for (sig, _) in &goals {
                self.touch(sig.clone());
            }
            let head_node = self.touch(head_sig);
            head_node.record_definition(formula.clone());
            for (sig, _) in goals {
                head_node.add_dependency(sig);
            }
            return Ok(());
        }

        if defined && T::is_reserved(&formula.signature()) {
            return Err(GraphError::ReservedRedefinition(formula.signature()));
        }

        for (sig, occurrence) in unpack(formula) {
            let node = self.touch(sig);
            if defined {
                node.record_definition(occurrence.clone());
            }
            if queried {
                node.record_use(occurrence);
            }
        }
        Ok(())
    }

    /// Ingest a posed query. A bare implication cannot be queried.
    pub fn add_query(&mut self, query: &Query<T>) -> Result<(), GraphError> {
        self.add(query.goal(), false, true)
    }

    /// Signatures that are defined but never directly queried.
    pub fn unused_definitions(&self) -> Vec<&Signature> {
        self.nodes
            .values()
            .filter(|node| node.is_defined() && !node.is_used())
            .map(Node::signature)
            .collect()
    }

    /// Signatures that are queried but never defined.
    pub fn undefined_queries(&self) -> Vec<&Signature> {
        self.nodes
            .values()
            .filter(|node| node.is_used() && !node.is_defined())
            .map(Node::signature)
            .collect()
    }

    /// The leaf signatures reachable from `signature`: predicates that have
    /// no further dependencies of their own.
    ///
    /// The visiting set is threaded through the recursion, so the traversal
    /// terminates on mutually recursive predicates and the graph stays
    /// freely re-traversable afterwards.
    pub fn basic_dependencies(&self, signature: &Signature) -> IndexSet<Signature> {
        let mut visiting = IndexSet::new();
        self.collect_basic(signature, &mut visiting)
    }

    fn collect_basic(
        &self,
        signature: &Signature,
        visiting: &mut IndexSet<Signature>,
    ) -> IndexSet<Signature> {
        // A node already on the current chain contributes nothing.
        if !visiting.insert(signature.clone()) {
            return IndexSet::new();
        }

        let mut basic = IndexSet::new();
        match self.nodes.get(signature) {
            Some(node) if node.has_dependencies() => {
                for dependency in node.dependencies() {
                    basic.extend(self.collect_basic(dependency, visiting));
                }
            }
            _ => {
                basic.insert(signature.clone());
            }
        }

        visiting.swap_remove(signature);
        basic
    }

    fn touch(&mut self, signature: Signature) -> &mut Node<T> {
        self.nodes
            .entry(signature.clone())
            .or_insert_with(|| Node::new(signature))
    }
}

impl<T: ProgramTerm> Default for DependencyGraph<T> {
    fn default() -> Self {
        DependencyGraph::new()
    }
}

/// Decompose a goal through the control constructs until only leaves that
/// would actually trigger evaluation remain, paired with their signatures.
///
/// Reserved signatures and bare variables are filtered at every step and
/// never become nodes. Meta-calls contribute a synthetic stub signature with
/// the call-time arity.
fn unpack<T: ProgramTerm>(goal: &T) -> Vec<(Signature, T)> {
    let mut leaves = Vec::new();
    unpack_into(goal, &mut leaves);
    leaves
}

fn unpack_into<T: ProgramTerm>(goal: &T, leaves: &mut Vec<(Signature, T)>) {
    match goal.construct() {
        Construct::Negation(inner) => unpack_into(inner, leaves),
        Construct::Conjunction(left, right) | Construct::Disjunction(left, right) => {
            unpack_into(left, leaves);
            unpack_into(right, leaves);
        }
        Construct::ForAll { condition, action } => {
            unpack_into(condition, leaves);
            unpack_into(action, leaves);
        }
        Construct::Aggregate { generator } => unpack_into(generator, leaves),
        Construct::MetaCall { goal, extra_args } => {
            // The first argument names the predicate without its call-time
            // argument list; record a stub with the effective arity.
            if !goal.is_var() {
                let base = goal.signature();
                let stub = Signature::new(base.name.clone(), base.arity + extra_args);
                if !T::is_reserved(&stub) {
                    leaves.push((stub, goal.clone()));
                }
            }
        }
        // A nested implication never triggers evaluation directly.
        Construct::Implication { .. } => {}
        Construct::Leaf => {
            if goal.is_var() {
                return;
            }
            let sig = goal.signature();
            if !T::is_reserved(&sig) {
                leaves.push((sig, goal.clone()));
            }
        }
    }
}
