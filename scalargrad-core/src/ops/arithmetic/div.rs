use crate::autograd::{Graph, Operand, Value};
use crate::ops::arithmetic::{mul_op, pow_op};

/// `a / b`, expressed as `a * b^-1`.
///
/// Division by an exact zero is not intercepted: the result is whatever
/// IEEE-754 gives for `0^-1` (infinity), and it propagates from there.
pub fn div_op(graph: &mut Graph, a: Value, b: Value) -> Value {
    let reciprocal = pow_op(graph, b, -1.0);
    mul_op(graph, a, reciprocal)
}

impl Graph {
    /// `a / b`. Literals on either side are promoted to leaves first.
    pub fn div(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
        let a = self.promote(a);
        let b = self.promote(b);
        div_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
