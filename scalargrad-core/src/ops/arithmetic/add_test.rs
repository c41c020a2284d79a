use crate::autograd::{Graph, OpKind};
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-3.5);
    let c = graph.add(a, b);
    assert_relative_eq!(graph.value(c), -1.5);
    assert_eq!(graph.op(c).kind(), OpKind::Add);
    assert_eq!(graph.operands(c), vec![a, b]);
}

#[test]
fn test_add_backward() {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-3.5);
    let c = graph.add(a, b);
    graph.backward(c);
    assert_relative_eq!(graph.grad(c), 1.0);
    assert_relative_eq!(graph.grad(a), 1.0);
    assert_relative_eq!(graph.grad(b), 1.0);
}

#[test]
fn test_add_literal_either_side() {
    let mut graph = Graph::new();
    let a = graph.leaf(4.0);
    let left = graph.add(a, 1.0);
    let right = graph.add(1.0, a);
    assert_relative_eq!(graph.value(left), 5.0);
    assert_relative_eq!(graph.value(right), 5.0);
    // Each literal became its own leaf.
    assert!(graph.is_leaf(graph.operands(left)[1]));
    assert!(graph.is_leaf(graph.operands(right)[0]));
}

#[test]
fn test_add_same_operand_twice() {
    let mut graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.add(a, a);
    graph.backward(b);
    assert_relative_eq!(graph.value(b), 6.0);
    assert_relative_eq!(graph.grad(a), 2.0);
}
