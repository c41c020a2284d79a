use crate::autograd::{Graph, Operand, Value};
use crate::ops::arithmetic::{add_op, neg_op};

/// `a - b`, expressed as `a + (-b)`.
pub fn sub_op(graph: &mut Graph, a: Value, b: Value) -> Value {
    let negated = neg_op(graph, b);
    add_op(graph, a, negated)
}

impl Graph {
    /// `a - b`. Literals on either side are promoted to leaves first.
    pub fn sub(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
        let a = self.promote(a);
        let b = self.promote(b);
        sub_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
