use crate::autograd::{Graph, Op, Operand, Value};

/// Multiplies two nodes. Gradient rule: each operand receives the other
/// operand's value times the output gradient.
pub fn mul_op(graph: &mut Graph, a: Value, b: Value) -> Value {
    let value = graph.value(a) * graph.value(b);
    graph.push(value, Op::Mul(a, b))
}

impl Graph {
    /// `a * b`. Literals on either side are promoted to leaves first.
    pub fn mul(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
        let a = self.promote(a);
        let b = self.promote(b);
        mul_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
