use crate::autograd::{Graph, Operand, Value};
use crate::error::ScalarGradError;
use crate::nn::init::uniform_leaves;
use crate::nn::layers::Activation;
use crate::nn::module::{Module, Output};
use crate::ops::arithmetic::{add_op, mul_op};
use crate::ops::reduction::sum_op;
use rand::Rng;

/// A single unit: `activation(sum(w_i * x_i) + b)`.
///
/// Weights and bias are leaves of the graph passed to the constructor, drawn
/// uniformly from `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a tanh neuron with `n_inputs` weights.
    pub fn new<R>(graph: &mut Graph, n_inputs: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::with_activation(graph, n_inputs, Activation::Tanh, rng)
    }

    pub fn with_activation<R>(
        graph: &mut Graph,
        n_inputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let weights = uniform_leaves(graph, n_inputs, rng);
        let bias = uniform_leaves(graph, 1, rng)[0];
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> Value {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Forward pass returning the activated node directly.
    pub fn activate(&self, graph: &mut Graph, input: &[Operand]) -> Result<Value, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }

        let mut products = Vec::with_capacity(self.weights.len());
        for (&weight, &x) in self.weights.iter().zip(input) {
            let x = graph.promote(x);
            products.push(mul_op(graph, weight, x));
        }
        let weighted_sum = sum_op(graph, &products);
        let pre_activation = add_op(graph, weighted_sum, self.bias);
        Ok(self.activation.apply(graph, pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, input: &[Operand]) -> Result<Output, ScalarGradError> {
        self.activate(graph, input).map(Output::Scalar)
    }

    /// Weights followed by the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w{}", i), w))
            .collect();
        params.push(("b".to_string(), self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
