use crate::autograd::{Graph, Value};
use crate::error::ScalarGradError;
use crate::ops::activation::{relu_op, tanh_op};
use std::fmt;
use std::str::FromStr;

/// Nonlinearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// Identity: the weighted sum is returned as is.
    Linear,
}

impl Activation {
    pub fn apply(self, graph: &mut Graph, x: Value) -> Value {
        match self {
            Activation::Tanh => tanh_op(graph, x),
            Activation::Relu => relu_op(graph, x),
            Activation::Linear => x,
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Linear => "linear",
        };
        f.write_str(name)
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "linear" => Ok(Activation::Linear),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}
