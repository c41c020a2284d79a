use crate::autograd::{Graph, Op, Operand, Value};

/// Hyperbolic tangent. Gradient rule: `a.grad += (1 - t^2) * out.grad` where
/// `t` is the node's own value.
///
/// Computed with [`f64::tanh`], which agrees with `(e^2x - 1) / (e^2x + 1)`
/// but saturates to ±1 for large |x| where the quotient form overflows to
/// `inf / inf = NaN`. The gradient there is 0.
pub fn tanh_op(graph: &mut Graph, a: Value) -> Value {
    let t = graph.value(a).tanh();
    graph.push(t, Op::Tanh(a))
}

impl Graph {
    pub fn tanh(&mut self, a: impl Into<Operand>) -> Value {
        let a = self.promote(a);
        tanh_op(self, a)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
