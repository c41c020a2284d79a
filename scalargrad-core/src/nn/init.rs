use crate::autograd::{Graph, Value};
use crate::error::ScalarGradError;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Range every fresh weight and bias is drawn from.
pub const DEFAULT_INIT_RANGE: (f64, f64) = (-1.0, 1.0);

/// Uniform distribution over `[low, high]`, validating the bounds.
fn uniform_distribution(low: f64, high: f64) -> Result<Uniform<f64>, ScalarGradError> {
    if !low.is_finite() {
        return Err(ScalarGradError::InvalidHyperparameter {
            name: "init low".to_string(),
            value: low,
        });
    }
    if !high.is_finite() || high < low {
        return Err(ScalarGradError::InvalidHyperparameter {
            name: "init high".to_string(),
            value: high,
        });
    }
    Ok(Uniform::new_inclusive(low, high))
}

/// Creates `count` parameter leaves drawn uniformly from [`DEFAULT_INIT_RANGE`].
pub(crate) fn uniform_leaves<R>(graph: &mut Graph, count: usize, rng: &mut R) -> Vec<Value>
where
    R: Rng + ?Sized,
{
    let (low, high) = DEFAULT_INIT_RANGE;
    let distribution = Uniform::new_inclusive(low, high);
    (0..count)
        .map(|_| graph.leaf(distribution.sample(rng)))
        .collect()
}

/// Re-draws each parameter uniformly from `[low, high]`.
///
/// Operates in-place on the leaves' values; gradients are untouched.
pub fn uniform_<R>(
    graph: &mut Graph,
    params: &[Value],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), ScalarGradError>
where
    R: Rng + ?Sized,
{
    let distribution = uniform_distribution(low, high)?;
    for &param in params {
        graph.set_value(param, distribution.sample(rng));
    }
    Ok(())
}

/// Sets every parameter to `value`.
pub fn fill_(graph: &mut Graph, params: &[Value], value: f64) {
    for &param in params {
        graph.set_value(param, value);
    }
}

/// Fills the parameters with 0.
pub fn zeros_(graph: &mut Graph, params: &[Value]) {
    fill_(graph, params, 0.0)
}

/// Fills the parameters with 1.
pub fn ones_(graph: &mut Graph, params: &[Value]) {
    fill_(graph, params, 1.0)
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
