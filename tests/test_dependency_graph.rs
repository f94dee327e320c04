//! Integration tests for the dependency-graph analysis

use termgraph::prolog::Term;
use termgraph::{DependencyGraph, GraphError, Query, Signature};

fn sig(name: &str, arity: usize) -> Signature {
    Signature::new(name, arity)
}

#[test]
fn test_clause_fact_query_end_to_end() {
    // p :- q.   q.   ?- p.
    let mut graph = DependencyGraph::new();
    graph
        .add(&Term::clause(Term::atom("p"), Term::atom("q")), true, false)
        .unwrap();
    graph.add(&Term::atom("q"), true, false).unwrap();
    graph.add_query(&Query::new(Term::atom("p"))).unwrap();

    let p = graph.node(&sig("p", 0)).unwrap();
    assert!(p.is_defined());
    assert!(p.is_used());
    assert!(p.dependencies().contains(&sig("q", 0)));

    let q = graph.node(&sig("q", 0)).unwrap();
    assert!(q.is_defined());

    assert!(graph.undefined_queries().is_empty());
    // "used" does not propagate along dependency edges: q is only
    // referenced from p's body, never queried directly
    assert_eq!(graph.unused_definitions(), vec![&sig("q", 0)]);
}

#[test]
fn test_family_program() {
    let parent = |a: Term, b: Term| Term::compound("parent", vec![a, b]);
    let grandparent = |a: Term, b: Term| Term::compound("grandparent", vec![a, b]);

    let mut graph = DependencyGraph::new();
    graph
        .add(&parent(Term::atom("tom"), Term::atom("bob")), true, false)
        .unwrap();
    graph
        .add(&parent(Term::atom("bob"), Term::atom("ann")), true, false)
        .unwrap();
    // grandparent(X, Z) :- parent(X, Y), parent(Y, Z).
    graph
        .add(
            &Term::clause(
                grandparent(Term::var("X"), Term::var("Z")),
                Term::conj(
                    parent(Term::var("X"), Term::var("Y")),
                    parent(Term::var("Y"), Term::var("Z")),
                ),
            ),
            true,
            false,
        )
        .unwrap();
    graph
        .add_query(&Query::new(grandparent(Term::atom("tom"), Term::var("Who"))))
        .unwrap();

    // two facts plus one clause head occurrence
    assert_eq!(graph.node(&sig("parent", 2)).unwrap().definitions().len(), 2);
    assert_eq!(
        graph.node(&sig("grandparent", 2)).unwrap().definitions().len(),
        1
    );

    assert!(graph.undefined_queries().is_empty());
    assert_eq!(graph.unused_definitions(), vec![&sig("parent", 2)]);

    let basic = graph.basic_dependencies(&sig("grandparent", 2));
    assert_eq!(basic.len(), 1);
    assert!(basic.contains(&sig("parent", 2)));
}

#[test]
fn test_undefined_query_reported() {
    let mut graph: DependencyGraph<Term> = DependencyGraph::new();
    graph
        .add_query(&Query::new(Term::compound("r", vec![Term::var("X")])))
        .unwrap();

    assert_eq!(graph.undefined_queries(), vec![&sig("r", 1)]);
    assert!(graph.unused_definitions().is_empty());
}

#[test]
fn test_query_unpacks_conjunction_and_negation() {
    let mut graph: DependencyGraph<Term> = DependencyGraph::new();
    // ?- p(X), \+ q(X).
    let goal = Term::conj(
        Term::compound("p", vec![Term::var("X")]),
        Term::neg(Term::compound("q", vec![Term::var("X")])),
    );
    graph.add_query(&Query::new(goal)).unwrap();

    let undefined = graph.undefined_queries();
    assert_eq!(undefined.len(), 2);
    assert!(undefined.contains(&&sig("p", 1)));
    assert!(undefined.contains(&&sig("q", 1)));
}

#[test]
fn test_queried_implication_rejected_and_graph_survives() {
    let mut graph = DependencyGraph::new();
    graph.add(&Term::atom("q"), true, false).unwrap();

    let clause = Term::clause(Term::atom("p"), Term::atom("q"));
    let err = graph.add_query(&Query::new(clause)).unwrap_err();
    assert!(matches!(err, GraphError::QueriedImplication(_)));

    // the graph is still usable and unchanged
    assert_eq!(graph.len(), 1);
    assert!(graph.node(&sig("q", 0)).unwrap().is_defined());
    graph.add_query(&Query::new(Term::atom("q"))).unwrap();
    assert!(graph.unused_definitions().is_empty());
}

#[test]
fn test_reserved_redefinition_creates_no_node() {
    let mut graph: DependencyGraph<Term> = DependencyGraph::new();
    let formula = Term::compound("=", vec![Term::var("X"), Term::var("X")]);
    let err = graph.add(&formula, true, false).unwrap_err();
    assert_eq!(err, GraphError::ReservedRedefinition(sig("=", 2)));
    assert!(graph.node(&sig("=", 2)).is_none());
    assert!(graph.is_empty());
}

#[test]
fn test_mutual_recursion_terminates() {
    let mut graph = DependencyGraph::new();
    let p = Term::compound("p", vec![Term::var("X")]);
    let q = Term::compound("q", vec![Term::var("X")]);
    graph
        .add(&Term::clause(p.clone(), q.clone()), true, false)
        .unwrap();
    graph.add(&Term::clause(q, p), true, false).unwrap();

    let first = graph.basic_dependencies(&sig("p", 1));
    assert!(first.is_empty());
    let second = graph.basic_dependencies(&sig("p", 1));
    assert_eq!(first, second);
    // the sibling entry point behaves the same
    assert!(graph.basic_dependencies(&sig("q", 1)).is_empty());
}

#[test]
fn test_meta_call_and_aggregate_dispatch() {
    let mut graph = DependencyGraph::new();
    // collector(Bag) :- findall(X, item(X), Bag).
    graph
        .add(
            &Term::clause(
                Term::compound("collector", vec![Term::var("Bag")]),
                Term::findall(
                    Term::var("X"),
                    Term::compound("item", vec![Term::var("X")]),
                    Term::var("Bag"),
                ),
            ),
            true,
            false,
        )
        .unwrap();
    // apply(X) :- call(check(strict), X).
    graph
        .add(
            &Term::clause(
                Term::compound("apply", vec![Term::var("X")]),
                Term::call(
                    Term::compound("check", vec![Term::atom("strict")]),
                    vec![Term::var("X")],
                ),
            ),
            true,
            false,
        )
        .unwrap();

    let collector = graph.node(&sig("collector", 1)).unwrap();
    assert_eq!(collector.dependencies().len(), 1);
    assert!(collector.dependencies().contains(&sig("item", 1)));

    // the meta-call stub carries the call-time arity check/2
    let apply = graph.node(&sig("apply", 1)).unwrap();
    assert!(apply.dependencies().contains(&sig("check", 2)));
    assert!(graph.node(&sig("check", 2)).is_some());
}
