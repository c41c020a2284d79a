use crate::autograd::{Graph, Value};
use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update parameter leaves in place from their accumulated
/// gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads `graph.grad(p)` for every managed parameter and writes the new
    /// value with `graph.set_value`. Gradients are left untouched.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidParameter`] if a managed handle is not a
    /// leaf of `graph`. No parameter is updated in that case.
    fn step(&mut self, graph: &mut Graph) -> Result<(), ScalarGradError>;

    /// Sets the gradient of every managed parameter to 0.0.
    ///
    /// Typically called before the backward pass of a new training
    /// iteration, since `backward` accumulates.
    fn zero_grad(&self, graph: &mut Graph) {
        for &param in self.params() {
            graph.set_grad(param, 0.0);
        }
    }

    /// Parameters managed by the optimizer, in update order.
    fn params(&self) -> &[Value];
}

/// Checks that every handle is a live leaf of `graph`, the only nodes an
/// optimizer may overwrite.
pub(crate) fn check_params(graph: &Graph, params: &[Value]) -> Result<(), ScalarGradError> {
    for (index, &param) in params.iter().enumerate() {
        if !graph.contains(param) {
            return Err(ScalarGradError::InvalidParameter {
                index,
                reason: format!("{:?} is not a node of this graph", param),
            });
        }
        if !graph.is_leaf(param) {
            return Err(ScalarGradError::InvalidParameter {
                index,
                reason: format!("{:?} is an interior node, not a leaf", param),
            });
        }
    }
    Ok(())
}
