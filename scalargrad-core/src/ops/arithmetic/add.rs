use crate::autograd::{Graph, Op, Operand, Value};

/// Adds two nodes. Gradient rule: both operands receive the output gradient.
pub fn add_op(graph: &mut Graph, a: Value, b: Value) -> Value {
    let value = graph.value(a) + graph.value(b);
    graph.push(value, Op::Add(a, b))
}

impl Graph {
    /// `a + b`. Literals on either side are promoted to leaves first.
    pub fn add(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
        let a = self.promote(a);
        let b = self.promote(b);
        add_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
