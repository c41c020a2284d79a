use crate::autograd::{Graph, Op, Operand, Value};

/// Rectified Linear Unit: `max(a, 0)`.
///
/// Gradient rule: the output gradient passes through only when the output is
/// strictly positive. At exactly zero the contribution is 0. A NaN input
/// gives a NaN output.
pub fn relu_op(graph: &mut Graph, a: Value) -> Value {
    let x = graph.value(a);
    let value = if x < 0.0 { 0.0 } else { x };
    graph.push(value, Op::Relu(a))
}

impl Graph {
    pub fn relu(&mut self, a: impl Into<Operand>) -> Value {
        let a = self.promote(a);
        relu_op(self, a)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
