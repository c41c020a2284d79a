use crate::autograd::{Graph, Operand, Value};
use crate::ops::arithmetic::mul_op;

/// `-a`, expressed as `a * -1`.
pub fn neg_op(graph: &mut Graph, a: Value) -> Value {
    let minus_one = graph.leaf(-1.0);
    mul_op(graph, a, minus_one)
}

impl Graph {
    pub fn neg(&mut self, a: impl Into<Operand>) -> Value {
        let a = self.promote(a);
        neg_op(self, a)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
