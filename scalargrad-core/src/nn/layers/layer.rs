use crate::autograd::{Graph, Operand, Value};
use crate::error::ScalarGradError;
use crate::nn::layers::{Activation, Neuron};
use crate::nn::module::{Module, Output};
use rand::Rng;

/// A row of neurons sharing the same input.
///
/// Forward maps every neuron over the input. A layer with a single neuron
/// returns [`Output::Scalar`] instead of a one-element vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    n_inputs: usize,
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `n_outputs` tanh neurons, each with `n_inputs` weights.
    pub fn new<R>(graph: &mut Graph, n_inputs: usize, n_outputs: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::with_activation(graph, n_inputs, n_outputs, Activation::Tanh, rng)
    }

    pub fn with_activation<R>(
        graph: &mut Graph,
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::with_activation(graph, n_inputs, activation, rng))
            .collect();
        Layer { n_inputs, neurons }
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, input: &[Operand]) -> Result<Output, ScalarGradError> {
        if input.len() != self.n_inputs {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.n_inputs,
                actual: input.len(),
            });
        }
        // Literals are promoted once and shared by every neuron.
        let input: Vec<Operand> = input
            .iter()
            .map(|&x| Operand::Node(graph.promote(x)))
            .collect();

        let mut outputs = Vec::with_capacity(self.neurons.len());
        for neuron in &self.neurons {
            outputs.push(neuron.activate(graph, &input)?);
        }
        if outputs.len() == 1 {
            Ok(Output::Scalar(outputs[0]))
        } else {
            Ok(Output::Vector(outputs))
        }
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
