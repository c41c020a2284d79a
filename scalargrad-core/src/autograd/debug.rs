// src/autograd/debug.rs
use crate::autograd::backward_op::OpKind;
use crate::autograd::graph::{Graph, Value};
use std::fmt;

/// Borrowed view of one node, for printing.
///
/// Displays as `Value(data=..., grad=...)`, followed by the label and the
/// producing operation when there are any.
#[derive(Clone, Copy)]
pub struct NodeView<'g> {
    graph: &'g Graph,
    value: Value,
}

impl NodeView<'_> {
    pub fn handle(&self) -> Value {
        self.value
    }
}

impl fmt::Display for NodeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value(data={}, grad={}",
            self.graph.value(self.value),
            self.graph.grad(self.value)
        )?;
        if let Some(label) = self.graph.label(self.value) {
            write!(f, ", label={}", label)?;
        }
        let kind = self.graph.op(self.value).kind();
        if kind != OpKind::Leaf {
            write!(f, ", op={}", kind)?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Graphviz rendering of the nodes reachable from a root.
///
/// Each node becomes a record `{ label | data | grad }`; every non-leaf also
/// gets a small op node feeding it, with edges from its operands.
pub struct Dot<'g> {
    graph: &'g Graph,
    root: Value,
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, "  rankdir=LR;")?;
        for node in self.graph.topological_order(self.root) {
            let id = node.index();
            writeln!(
                f,
                "  n{} [shape=record, label=\"{{ {} | data {:.4} | grad {:.4} }}\"];",
                id,
                escape_record_label(self.graph.label(node).unwrap_or("")),
                self.graph.value(node),
                self.graph.grad(node)
            )?;
            let kind = self.graph.op(node).kind();
            if kind == OpKind::Leaf {
                continue;
            }
            writeln!(f, "  n{}_op [label=\"{}\"];", id, kind)?;
            writeln!(f, "  n{}_op -> n{};", id, id)?;
            for operand in self.graph.operands(node) {
                writeln!(f, "  n{} -> n{}_op;", operand.index(), id)?;
            }
        }
        writeln!(f, "}}")
    }
}

/// Backslash-escapes the characters that are special inside a quoted
/// Graphviz record label.
fn escape_record_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '"' | '\\' | '|' | '{' | '}' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Graph {
    /// Printable view of a node.
    pub fn node(&self, value: Value) -> NodeView<'_> {
        NodeView { graph: self, value }
    }

    pub fn dot(&self, root: Value) -> Dot<'_> {
        Dot { graph: self, root }
    }

    /// Graphviz DOT source for the graph reachable from `root`.
    pub fn to_dot(&self, root: Value) -> String {
        self.dot(root).to_string()
    }
}
