use crate::autograd::graph::{Node, Value};
use std::fmt;

/// Operation that produced a node, together with the operand handles and
/// constants its gradient rule needs.
///
/// Every node created by an operation stores one of these. During
/// [`Graph::backward`](crate::autograd::Graph::backward) the variant is matched
/// to decide how the node's gradient flows into its operands: this match is
/// the chain rule for the whole engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Literal input or trainable parameter. No operands, no-op rule.
    Leaf,
    Add(Value, Value),
    Mul(Value, Value),
    /// `base ^ exponent` with a fixed literal exponent.
    Pow { base: Value, exponent: f64 },
    Exp(Value),
    Tanh(Value),
    Relu(Value),
}

/// Payload-free tag of an [`Op`], used for labels and graph dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    Pow,
    Exp,
    Tanh,
    Relu,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            OpKind::Leaf => "",
            OpKind::Add => "+",
            OpKind::Mul => "*",
            OpKind::Pow => "pow",
            OpKind::Exp => "exp",
            OpKind::Tanh => "tanh",
            OpKind::Relu => "relu",
        };
        f.write_str(symbol)
    }
}

impl Op {
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Leaf => OpKind::Leaf,
            Op::Add(..) => OpKind::Add,
            Op::Mul(..) => OpKind::Mul,
            Op::Pow { .. } => OpKind::Pow,
            Op::Exp(_) => OpKind::Exp,
            Op::Tanh(_) => OpKind::Tanh,
            Op::Relu(_) => OpKind::Relu,
        }
    }

    /// Operand handles in operation order (0, 1 or 2 of them).
    pub fn operands(&self) -> impl Iterator<Item = Value> {
        let slots = match *self {
            Op::Leaf => [None, None],
            Op::Add(a, b) | Op::Mul(a, b) => [Some(a), Some(b)],
            Op::Pow { base, .. } => [Some(base), None],
            Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) => [Some(a), None],
        };
        slots.into_iter().flatten()
    }

    /// Adds this node's contribution into its operands' gradients.
    ///
    /// `out_value` and `out_grad` are the value and the (fully accumulated)
    /// gradient of the node that owns this op. Contributions are always added,
    /// so an operand used several times (including `a * a`) receives the sum.
    pub(crate) fn propagate(self, nodes: &mut [Node], out_value: f64, out_grad: f64) {
        match self {
            Op::Leaf => {}
            Op::Add(a, b) => {
                nodes[a.0].grad += out_grad;
                nodes[b.0].grad += out_grad;
            }
            Op::Mul(a, b) => {
                let a_value = nodes[a.0].value;
                let b_value = nodes[b.0].value;
                nodes[a.0].grad += b_value * out_grad;
                nodes[b.0].grad += a_value * out_grad;
            }
            Op::Pow { base, exponent } => {
                let x = nodes[base.0].value;
                nodes[base.0].grad += exponent * x.powf(exponent - 1.0) * out_grad;
            }
            Op::Exp(a) => {
                // d/dx e^x = e^x, which is the node's own value.
                nodes[a.0].grad += out_value * out_grad;
            }
            Op::Tanh(a) => {
                nodes[a.0].grad += (1.0 - out_value * out_value) * out_grad;
            }
            Op::Relu(a) => {
                if out_value > 0.0 {
                    nodes[a.0].grad += out_grad;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operands_arity() {
        let a = Value(0);
        let b = Value(1);
        assert_eq!(Op::Leaf.operands().count(), 0);
        assert_eq!(Op::Add(a, b).operands().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(Op::Mul(b, a).operands().collect::<Vec<_>>(), vec![b, a]);
        assert_eq!(
            Op::Pow { base: a, exponent: 2.0 }.operands().collect::<Vec<_>>(),
            vec![a]
        );
        assert_eq!(Op::Relu(b).operands().collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Op::Add(Value(0), Value(1)).kind().to_string(), "+");
        assert_eq!(Op::Mul(Value(0), Value(1)).kind().to_string(), "*");
        assert_eq!(Op::Tanh(Value(0)).kind().to_string(), "tanh");
        assert_eq!(Op::Leaf.kind().to_string(), "");
    }
}
