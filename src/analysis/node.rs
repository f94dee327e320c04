//! Dependency graph nodes

use crate::kr::Signature;
use indexmap::IndexSet;

/// A vertex of the dependency graph, keyed by predicate signature.
///
/// The same signature may recur across many occurrences (e.g. multiple
/// clauses of one predicate); each occurrence is recorded.
#[derive(Debug, Clone)]
pub struct Node<T> {
    signature: Signature,
    definitions: Vec<T>,
    uses: Vec<T>,
    dependencies: IndexSet<Signature>,
}

impl<T> Node<T> {
    pub(crate) fn new(signature: Signature) -> Self {
        Node {
            signature,
            definitions: Vec::new(),
            uses: Vec::new(),
            dependencies: IndexSet::new(),
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Occurrences introducing this signature into the knowledge base.
    pub fn definitions(&self) -> &[T] {
        &self.definitions
    }

    /// Direct query occurrences of this signature.
    pub fn uses(&self) -> &[T] {
        &self.uses
    }

    /// Signatures this node's definitions depend on.
    pub fn dependencies(&self) -> &IndexSet<Signature> {
        &self.dependencies
    }

    pub fn is_defined(&self) -> bool {
        !self.definitions.is_empty()
    }

    pub fn is_used(&self) -> bool {
        !self.uses.is_empty()
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    pub(crate) fn record_definition(&mut self, occurrence: T) {
        self.definitions.push(occurrence);
    }

    pub(crate) fn record_use(&mut self, occurrence: T) {
        self.uses.push(occurrence);
    }

    pub(crate) fn add_dependency(&mut self, signature: Signature) {
        self.dependencies.insert(signature);
    }
}
