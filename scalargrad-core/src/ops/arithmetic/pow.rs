use crate::autograd::{Graph, Op, Operand, Value};
use crate::error::ScalarGradError;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Raises a node to a fixed exponent.
///
/// Gradient rule: `base.grad += exponent * base^(exponent - 1) * out.grad`.
/// The exponent is trusted here; [`Graph::pow`] is the validating entry point.
pub fn pow_op(graph: &mut Graph, base: Value, exponent: f64) -> Value {
    let value = graph.value(base).powf(exponent);
    graph.push(value, Op::Pow { base, exponent })
}

/// Converts a numeric literal to a finite `f64` exponent.
fn exponent_to_f64<E>(exponent: E) -> Result<f64, ScalarGradError>
where
    E: ToPrimitive + Debug,
{
    match exponent.to_f64() {
        Some(p) if p.is_finite() => Ok(p),
        _ => Err(ScalarGradError::InvalidExponent {
            exponent: format!("{:?}", exponent),
        }),
    }
}

impl Graph {
    /// `base ^ exponent` for a literal exponent.
    ///
    /// The exponent is not a node and receives no gradient. Any primitive
    /// numeric type is accepted; NaN, infinities and values without an `f64`
    /// representation are rejected with
    /// [`ScalarGradError::InvalidExponent`] before anything is allocated.
    pub fn pow<E>(&mut self, base: impl Into<Operand>, exponent: E) -> Result<Value, ScalarGradError>
    where
        E: ToPrimitive + Debug,
    {
        let exponent = exponent_to_f64(exponent)?;
        let base = self.promote(base);
        Ok(pow_op(self, base, exponent))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
