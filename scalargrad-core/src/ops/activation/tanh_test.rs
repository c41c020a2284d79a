use crate::autograd::grad_check::check_grad;
use crate::autograd::Graph;
use approx::assert_relative_eq;

#[test]
fn test_tanh_matches_exponential_identity() {
    let mut graph = Graph::new();
    for &x in &[-2.0_f64, -0.3, 0.0, 0.8, 3.0] {
        let a = graph.leaf(x);
        let t = graph.tanh(a);
        let e = (2.0 * x).exp();
        assert_relative_eq!(graph.value(t), (e - 1.0) / (e + 1.0), epsilon = 1e-12);
    }
}

#[test]
fn test_tanh_backward() {
    let mut graph = Graph::new();
    let a = graph.leaf(0.8814);
    let t = graph.tanh(a);
    graph.backward(t);
    let value = graph.value(t);
    assert_relative_eq!(graph.grad(a), 1.0 - value * value);
}

#[test]
fn test_tanh_at_zero() {
    let mut graph = Graph::new();
    let a = graph.leaf(0.0);
    let t = graph.tanh(a);
    graph.backward(t);
    assert_relative_eq!(graph.value(t), 0.0);
    assert_relative_eq!(graph.grad(a), 1.0);
}

#[test]
fn test_tanh_saturates_without_nan() {
    let mut graph = Graph::new();
    let a = graph.leaf(500.0);
    let t = graph.tanh(a);
    graph.backward(t);
    assert_relative_eq!(graph.value(t), 1.0);
    assert_relative_eq!(graph.grad(a), 0.0);
}

#[test]
fn test_tanh_grad_check() {
    let mut graph = Graph::new();
    let a = graph.leaf(-0.6);
    let result = check_grad(
        &mut graph,
        |g, inputs| Ok(g.tanh(inputs[0])),
        &[a],
        1e-6,
        1e-6,
        1e-5,
    );
    assert!(result.is_ok(), "Tanh grad check failed: {:?}", result.err());
}
