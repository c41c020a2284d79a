use crate::autograd::{Graph, Value};
use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::{check_params, Optimizer};
use log::{debug, trace};

/// Hyperparameters of [`SgdOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    pub learning_rate: f64,
    /// Momentum factor; 0.0 disables the velocity buffer.
    pub momentum: f64,
    /// L2 penalty added to each gradient as `weight_decay * p`.
    pub weight_decay: f64,
    /// Nesterov momentum. Only meaningful with a non-zero momentum.
    pub nesterov: bool,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            learning_rate: 0.01,
            momentum: 0.0,
            weight_decay: 0.0,
            nesterov: false,
        }
    }
}

impl SgdConfig {
    pub fn new(learning_rate: f64) -> Self {
        SgdConfig {
            learning_rate,
            ..Self::default()
        }
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn with_nesterov(mut self, nesterov: bool) -> Self {
        self.nesterov = nesterov;
        self
    }

    /// Every hyperparameter must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        for (name, value) in [
            ("learning_rate", self.learning_rate),
            ("momentum", self.momentum),
            ("weight_decay", self.weight_decay),
        ] {
            check_hyperparameter(name, value)?;
        }
        Ok(())
    }
}

fn check_hyperparameter(name: &str, value: f64) -> Result<(), ScalarGradError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScalarGradError::InvalidHyperparameter {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// For each parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// v = momentum * v + d          (only when momentum != 0)
/// p = p - lr * v                (or d + momentum * v with nesterov)
/// ```
///
/// With the default config this is the plain `p -= lr * g` update.
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    config: SgdConfig,
    velocity: Vec<f64>,
    steps: usize,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer` over `params`.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidHyperparameter`] if the config holds a
    /// negative or non-finite value.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        config: SgdConfig,
    ) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let params: Vec<Value> = params.into_iter().collect();
        debug!(
            "SGD over {} parameters: lr={}, momentum={}, weight_decay={}, nesterov={}",
            params.len(),
            config.learning_rate,
            config.momentum,
            config.weight_decay,
            config.nesterov
        );
        Ok(SgdOptimizer {
            velocity: vec![0.0; params.len()],
            params,
            config,
            steps: 0,
        })
    }

    pub fn config(&self) -> &SgdConfig {
        &self.config
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    /// Changes the learning rate for subsequent steps (e.g. a decay schedule).
    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<(), ScalarGradError> {
        check_hyperparameter("learning_rate", learning_rate)?;
        self.config.learning_rate = learning_rate;
        Ok(())
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self, graph: &mut Graph) -> Result<(), ScalarGradError> {
        check_params(graph, &self.params)?;
        let SgdConfig {
            learning_rate,
            momentum,
            weight_decay,
            nesterov,
        } = self.config;

        for (param, velocity) in self.params.iter().zip(self.velocity.iter_mut()) {
            let value = graph.value(*param);
            let mut d_p = graph.grad(*param);
            if weight_decay != 0.0 {
                d_p += weight_decay * value;
            }

            let update = if momentum != 0.0 {
                *velocity = momentum * *velocity + d_p;
                if nesterov {
                    d_p + momentum * *velocity
                } else {
                    *velocity
                }
            } else {
                d_p
            };

            trace!("[sgd] {:?}: {} -> {}", param, value, value - learning_rate * update);
            graph.set_value(*param, value - learning_rate * update);
        }
        self.steps += 1;
        debug!("SGD step {} (lr={})", self.steps, learning_rate);
        Ok(())
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
