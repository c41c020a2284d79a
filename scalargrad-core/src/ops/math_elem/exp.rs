use crate::autograd::{Graph, Op, Operand, Value};

/// `e^a`. Gradient rule: `a.grad += out.value * out.grad`, since the
/// exponential is its own derivative.
///
/// Overflow is not intercepted: large inputs give `inf`.
pub fn exp_op(graph: &mut Graph, a: Value) -> Value {
    let value = graph.value(a).exp();
    graph.push(value, Op::Exp(a))
}

impl Graph {
    pub fn exp(&mut self, a: impl Into<Operand>) -> Value {
        let a = self.promote(a);
        exp_op(self, a)
    }
}
