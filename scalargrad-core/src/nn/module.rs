use crate::autograd::{Graph, Operand, Value};
use crate::error::ScalarGradError;

/// Result of a module's forward pass.
///
/// Layers with a single output collapse to `Scalar`; wider layers return
/// `Vector` in neuron order.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Scalar(Value),
    Vector(Vec<Value>),
}

impl Output {
    /// Number of values carried.
    pub fn len(&self) -> usize {
        match self {
            Output::Scalar(_) => 1,
            Output::Vector(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value, if this output was collapsed to a scalar.
    pub fn scalar(&self) -> Option<Value> {
        match self {
            Output::Scalar(value) => Some(*value),
            Output::Vector(_) => None,
        }
    }

    /// Like [`scalar`](Output::scalar), but an error for vector outputs.
    pub fn into_scalar(self) -> Result<Value, ScalarGradError> {
        match self {
            Output::Scalar(value) => Ok(value),
            Output::Vector(values) => Err(ScalarGradError::LengthMismatch {
                expected: 1,
                actual: values.len(),
                operation: "Output::into_scalar".to_string(),
            }),
        }
    }

    /// All values in order; a scalar becomes a one-element vector.
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Output::Scalar(value) => vec![value],
            Output::Vector(values) => values,
        }
    }

    /// The values as operands, ready to feed the next module.
    pub fn to_operands(&self) -> Vec<Operand> {
        match self {
            Output::Scalar(value) => vec![Operand::Node(*value)],
            Output::Vector(values) => values.iter().map(Operand::from).collect(),
        }
    }
}

/// The base trait for all network modules (neurons, layers, models).
///
/// Parameters are leaf nodes living in the caller's [`Graph`]; a module only
/// holds their handles. Forward passes append new nodes to the same graph.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass over `input`.
    ///
    /// # Errors
    /// [`ScalarGradError::InputSizeMismatch`] if `input` does not have the
    /// module's input width.
    fn forward(&self, graph: &mut Graph, input: &[Operand]) -> Result<Output, ScalarGradError>;

    /// All trainable leaves, flattened in a deterministic order.
    fn parameters(&self) -> Vec<Value>;

    /// Parameters with hierarchical names (e.g. `"layers.0.neurons.2.w1"`),
    /// in the same order as [`parameters`](Module::parameters).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Direct sub-modules. Empty for modules that do not contain others.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Sets the gradient of every parameter to 0.0.
    ///
    /// `backward` only ever adds to gradients, so call this before each
    /// training step's backward pass.
    fn zero_grad(&self, graph: &mut Graph) {
        for param in self.parameters() {
            graph.set_grad(param, 0.0);
        }
    }

    /// Forward pass over plain literals or handles.
    fn call<X>(&self, graph: &mut Graph, input: &[X]) -> Result<Output, ScalarGradError>
    where
        X: Into<Operand> + Copy,
        Self: Sized,
    {
        let operands: Vec<Operand> = input.iter().map(|&x| x.into()).collect();
        self.forward(graph, &operands)
    }
}
