use crate::autograd::graph::{Checkpoint, Graph, Value};
use crate::error::ScalarGradError;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Gradient check input {input_index} is not a node of the graph.")]
    InputNotInGraph { input_index: usize },
    #[error("Gradient check input must be a leaf node. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Finite difference step must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks backward-pass gradients against central finite differences.
///
/// `func` must build its output from `inputs` (leaf nodes of `graph`).
/// For every input the analytical gradient of the output is compared with
/// `(f(x + epsilon) - f(x - epsilon)) / (2 * epsilon)`; the check passes when
/// `|analytical - numerical| <= abs_tolerance + rel_tolerance * |numerical|`.
///
/// Whatever the outcome, the graph is left as it was found: nodes built by
/// `func` are dropped, input values are restored, and gradients that existed
/// before the call are put back.
pub fn check_grad<F>(
    graph: &mut Graph,
    func: F,
    inputs: &[Value],
    epsilon: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[Value]) -> Result<Value, ScalarGradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }
    for (i, &input) in inputs.iter().enumerate() {
        if !graph.contains(input) {
            return Err(GradCheckError::InputNotInGraph { input_index: i });
        }
        if !graph.is_leaf(input) {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    let checkpoint = graph.checkpoint();
    let saved_grads: Vec<f64> = (0..checkpoint.position())
        .map(|i| graph.grad(Value(i)))
        .collect();

    let result = compare_gradients(
        graph,
        &func,
        inputs,
        checkpoint,
        epsilon,
        abs_tolerance,
        rel_tolerance,
    );

    graph.rewind(checkpoint);
    for (i, grad) in saved_grads.into_iter().enumerate() {
        graph.set_grad(Value(i), grad);
    }
    result
}

fn compare_gradients<F>(
    graph: &mut Graph,
    func: &F,
    inputs: &[Value],
    checkpoint: Checkpoint,
    epsilon: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[Value]) -> Result<Value, ScalarGradError>,
{
    // --- 1. Analytical gradients from a clean backward pass ---
    for i in 0..checkpoint.position() {
        graph.set_grad(Value(i), 0.0);
    }
    let output = func(graph, inputs)?;
    graph.backward(output);
    let analytical: Vec<f64> = inputs.iter().map(|&input| graph.grad(input)).collect();
    graph.rewind(checkpoint);

    // --- 2. Numerical gradients, one input at a time ---
    for (i, &input) in inputs.iter().enumerate() {
        let original = graph.value(input);

        graph.set_value(input, original + epsilon);
        let loss_plus = evaluate(graph, func, inputs, checkpoint);
        graph.set_value(input, original - epsilon);
        let loss_minus = evaluate(graph, func, inputs, checkpoint);
        graph.set_value(input, original);

        let (loss_plus, loss_minus) = (loss_plus?, loss_minus?);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        let analytical_grad = analytical[i];

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "[check_grad] input {}: analytical={:e} numerical={:e} diff={:e}",
            i, analytical_grad, numerical_grad, difference
        );
        if difference > abs_tolerance + rel_tolerance * numerical_grad.abs() {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// Forward value of `func(inputs)`; the nodes it builds are discarded.
fn evaluate<F>(
    graph: &mut Graph,
    func: &F,
    inputs: &[Value],
    checkpoint: Checkpoint,
) -> Result<f64, ScalarGradError>
where
    F: Fn(&mut Graph, &[Value]) -> Result<Value, ScalarGradError>,
{
    let output = func(graph, inputs)?;
    let value = graph.value(output);
    graph.rewind(checkpoint);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_passes_for_polynomial() {
        let mut graph = Graph::new();
        let x = graph.leaf(1.3);
        let y = graph.leaf(-0.7);
        let result = check_grad(
            &mut graph,
            |g, inputs| {
                let xy = g.mul(inputs[0], inputs[1]);
                let x_cubed = g.pow(inputs[0], 3)?;
                Ok(g.add(xy, x_cubed))
            },
            &[x, y],
            1e-6,
            1e-6,
            1e-5,
        );
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn test_check_grad_restores_graph() {
        let mut graph = Graph::new();
        let x = graph.leaf(2.0);
        graph.set_grad(x, 5.0);
        let len_before = graph.len();

        check_grad(&mut graph, |g, inputs| Ok(g.mul(inputs[0], 3.0)), &[x], 1e-6, 1e-6, 1e-5)
            .expect("grad check should pass");

        assert_eq!(graph.len(), len_before);
        assert_eq!(graph.value(x), 2.0);
        assert_eq!(graph.grad(x), 5.0);
    }

    #[test]
    fn test_check_grad_rejects_interior_input() {
        let mut graph = Graph::new();
        let x = graph.leaf(2.0);
        let y = graph.tanh(x);
        let result = check_grad(&mut graph, |g, inputs| Ok(g.exp(inputs[0])), &[y], 1e-6, 1e-6, 1e-5);
        assert_eq!(result, Err(GradCheckError::InputNotLeaf { input_index: 0 }));
    }

    #[test]
    fn test_check_grad_rejects_bad_epsilon() {
        let mut graph = Graph::new();
        let x = graph.leaf(2.0);
        let result = check_grad(&mut graph, |g, inputs| Ok(g.exp(inputs[0])), &[x], 0.0, 1e-6, 1e-5);
        assert_eq!(result, Err(GradCheckError::InvalidEpsilon(0.0)));
    }

    #[test]
    fn test_check_grad_propagates_forward_error() {
        let mut graph = Graph::new();
        let x = graph.leaf(2.0);
        let result = check_grad(
            &mut graph,
            |g, inputs| g.pow(inputs[0], f64::NAN),
            &[x],
            1e-6,
            1e-6,
            1e-5,
        );
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(ScalarGradError::InvalidExponent { .. }))
        ));
    }

    #[test]
    fn test_check_grad_detects_nan_at_singularity() {
        let mut graph = Graph::new();
        let x = graph.leaf(0.0);
        let result = check_grad(&mut graph, |g, inputs| g.pow(inputs[0], -1), &[x], 1e-6, 1e-6, 1e-5);
        assert!(result.is_err());
    }
}
