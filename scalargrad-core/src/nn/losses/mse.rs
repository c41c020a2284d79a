// src/nn/losses/mse.rs

use crate::autograd::{Graph, Operand, Value};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::{div_op, pow_op, sub_op};
use crate::ops::reduction::sum_op;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean Squared Error between predictions and targets.
///
/// The loss is assembled from ordinary `sub`/`pow`/`add` nodes, so no
/// dedicated backward rule is needed: `graph.backward(loss)` reaches every
/// parameter the predictions depend on.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds `sum((p - t)^2)`, divided by the count for [`Reduction::Mean`].
    ///
    /// # Errors
    /// * [`ScalarGradError::LengthMismatch`] if the slices differ in length.
    /// * [`ScalarGradError::EmptyInput`] for a mean over no elements.
    pub fn calculate<T>(
        &self,
        graph: &mut Graph,
        predictions: &[Value],
        targets: &[T],
    ) -> Result<Value, ScalarGradError>
    where
        T: Into<Operand> + Copy,
    {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::LengthMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss calculate".to_string(),
            });
        }
        if predictions.is_empty() && self.reduction == Reduction::Mean {
            return Err(ScalarGradError::EmptyInput {
                operation: "MSELoss calculate (mean)".to_string(),
            });
        }

        let mut squared_errors = Vec::with_capacity(predictions.len());
        for (&prediction, &target) in predictions.iter().zip(targets) {
            let target = graph.promote(target);
            let diff = sub_op(graph, prediction, target);
            squared_errors.push(pow_op(graph, diff, 2.0));
        }
        let total = sum_op(graph, &squared_errors);

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let count = graph.leaf(predictions.len() as f64);
                Ok(div_op(graph, total, count))
            }
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
