use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::init::{ones_, uniform_, uniform_leaves, zeros_};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_uniform_leaves_in_range() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(7);
    let params = uniform_leaves(&mut graph, 500, &mut rng);
    assert_eq!(params.len(), 500);
    assert!(params.iter().all(|&p| graph.is_leaf(p)));
    assert!(params
        .iter()
        .all(|&p| (-1.0..=1.0).contains(&graph.value(p))));
    // Not degenerate.
    assert!(params.iter().any(|&p| graph.value(p) < 0.0));
    assert!(params.iter().any(|&p| graph.value(p) > 0.0));
}

#[test]
fn test_uniform_leaves_reproducible_with_seed() {
    let mut graph = Graph::new();
    let first = uniform_leaves(&mut graph, 10, &mut StdRng::seed_from_u64(42));
    let second = uniform_leaves(&mut graph, 10, &mut StdRng::seed_from_u64(42));
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(graph.value(*a), graph.value(*b));
    }
}

#[test]
fn test_zeros_and_ones() {
    let mut graph = Graph::new();
    let params: Vec<_> = (0..4).map(|i| graph.leaf(i as f64 + 0.5)).collect();
    zeros_(&mut graph, &params);
    assert!(params.iter().all(|&p| graph.value(p) == 0.0));
    ones_(&mut graph, &params);
    assert!(params.iter().all(|&p| graph.value(p) == 1.0));
}

#[test]
fn test_uniform_custom_range() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let params: Vec<_> = (0..50).map(|_| graph.leaf(0.0)).collect();
    uniform_(&mut graph, &params, 2.0, 3.0, &mut StdRng::seed_from_u64(1))?;
    assert!(params
        .iter()
        .all(|&p| (2.0..=3.0).contains(&graph.value(p))));
    Ok(())
}

#[test]
fn test_uniform_rejects_inverted_range() {
    let mut graph = Graph::new();
    let params = vec![graph.leaf(0.0)];
    let result = uniform_(&mut graph, &params, 1.0, -1.0, &mut StdRng::seed_from_u64(1));
    assert!(matches!(
        result,
        Err(ScalarGradError::InvalidHyperparameter { .. })
    ));
    assert_eq!(graph.value(params[0]), 0.0);
}
