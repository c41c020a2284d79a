use crate::autograd::{Graph, Operand, Value};
use crate::ops::arithmetic::add_op;

/// Left fold of `values` with `add`. An empty slice yields a fresh `0.0` leaf.
pub fn sum_op(graph: &mut Graph, values: &[Value]) -> Value {
    match values.split_first() {
        None => graph.leaf(0.0),
        Some((&first, rest)) => rest
            .iter()
            .fold(first, |acc, &value| add_op(graph, acc, value)),
    }
}

impl Graph {
    /// Sum of any mix of nodes and literals, as a chain of `add` nodes.
    pub fn sum<I>(&mut self, operands: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let values: Vec<Value> = operands
            .into_iter()
            .map(|operand| self.promote(operand))
            .collect();
        sum_op(self, &values)
    }
}

#[cfg(test)]
mod tests {
    use crate::autograd::{Graph, Operand};
    use approx::assert_relative_eq;

    #[test]
    fn test_sum_mixed_operands() {
        let mut graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.leaf(2.5);
        let s = graph.sum([Operand::from(a), Operand::from(b), Operand::Literal(0.5)]);
        assert_relative_eq!(graph.value(s), 4.0);

        graph.backward(s);
        assert_relative_eq!(graph.grad(a), 1.0);
        assert_relative_eq!(graph.grad(b), 1.0);
    }

    #[test]
    fn test_sum_empty_is_zero_leaf() {
        let mut graph = Graph::new();
        let s = graph.sum(Vec::<f64>::new());
        assert!(graph.is_leaf(s));
        assert_relative_eq!(graph.value(s), 0.0);
    }

    #[test]
    fn test_sum_single_is_identity() {
        let mut graph = Graph::new();
        let a = graph.leaf(3.0);
        let s = graph.sum([a]);
        assert_eq!(s, a);
    }

    #[test]
    fn test_sum_long_chain_backward() {
        let mut graph = Graph::new();
        let leaves: Vec<_> = (0..100_000).map(|i| graph.leaf(i as f64)).collect();
        let s = graph.sum(leaves.iter().copied());
        graph.backward(s);
        assert!(leaves.iter().all(|&leaf| graph.grad(leaf) == 1.0));
    }
}
