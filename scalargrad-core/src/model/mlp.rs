use crate::autograd::{Graph, Operand, Value};
use crate::error::ScalarGradError;
use crate::nn::layers::{Activation, Layer};
use crate::nn::module::{Module, Output};
use log::debug;
use rand::Rng;

/// Shape and activations of a multi-layer perceptron.
#[derive(Debug, Clone, PartialEq)]
pub struct MlpConfig {
    pub n_inputs: usize,
    /// Width of every layer, the last one being the output width.
    pub layer_sizes: Vec<usize>,
    /// Nonlinearity of the hidden layers.
    pub activation: Activation,
    /// Nonlinearity of the last layer.
    pub output_activation: Activation,
}

impl MlpConfig {
    pub fn new(n_inputs: usize, layer_sizes: &[usize]) -> Self {
        MlpConfig {
            n_inputs,
            layer_sizes: layer_sizes.to_vec(),
            activation: Activation::Tanh,
            output_activation: Activation::Tanh,
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_output_activation(mut self, activation: Activation) -> Self {
        self.output_activation = activation;
        self
    }

    /// Checks that there is at least one layer and that no width is zero.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if self.n_inputs == 0 {
            return Err(ScalarGradError::InvalidArchitecture(
                "input width must be non-zero".to_string(),
            ));
        }
        if let Some(position) = self.layer_sizes.iter().position(|&size| size == 0) {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "layer {} has zero width",
                position
            )));
        }
        Ok(())
    }

    /// Parameter count of the network this config builds:
    /// `(fan_in + 1) * fan_out` summed over the layers.
    pub fn num_parameters(&self) -> usize {
        let mut fan_in = self.n_inputs;
        let mut total = 0;
        for &fan_out in &self.layer_sizes {
            total += (fan_in + 1) * fan_out;
            fan_in = fan_out;
        }
        total
    }
}

/// Chain of fully-connected layers.
///
/// Layer `i` has `sizes[i - 1]` inputs (the network's input width for the
/// first one) and `sizes[i]` neurons. The forward pass feeds each layer's
/// output into the next and returns the last one, which collapses to
/// [`Output::Scalar`] when the output width is 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// All-tanh network with `n_inputs` inputs and the given layer widths.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidArchitecture`] for empty `layer_sizes` or a
    /// zero width.
    pub fn new<R>(
        graph: &mut Graph,
        n_inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError>
    where
        R: Rng + ?Sized,
    {
        Self::from_config(graph, &MlpConfig::new(n_inputs, layer_sizes), rng)
    }

    pub fn from_config<R>(
        graph: &mut Graph,
        config: &MlpConfig,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError>
    where
        R: Rng + ?Sized,
    {
        config.validate()?;

        let last = config.layer_sizes.len() - 1;
        let mut fan_in = config.n_inputs;
        let mut layers = Vec::with_capacity(config.layer_sizes.len());
        for (i, &fan_out) in config.layer_sizes.iter().enumerate() {
            let activation = if i == last {
                config.output_activation
            } else {
                config.activation
            };
            layers.push(Layer::with_activation(
                graph, fan_in, fan_out, activation, rng,
            ));
            fan_in = fan_out;
        }

        let mlp = Mlp { layers };
        debug!(
            "Built MLP {} -> {:?} ({} parameters)",
            config.n_inputs,
            config.layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, Layer::n_inputs)
    }

    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_outputs)
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, input: &[Operand]) -> Result<Output, ScalarGradError> {
        let mut current: Vec<Operand> = input.to_vec();
        let mut output = Output::Vector(Vec::new());
        for layer in &self.layers {
            output = layer.forward(graph, &current)?;
            current = output.to_operands();
        }
        Ok(output)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|l| l as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
