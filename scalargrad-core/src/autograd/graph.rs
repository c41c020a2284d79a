use crate::autograd::backward_op::Op;
use log::{debug, trace};
use std::collections::HashSet;

/// Handle to a scalar node owned by a [`Graph`].
///
/// A `Value` is a plain index: it is `Copy`, compares by node identity (never
/// by the stored number) and is only meaningful for the graph that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Value(pub(crate) usize);

impl Value {
    /// Position of the node inside its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Either an existing node or a numeric literal that still has to be
/// promoted to a leaf.
///
/// Every operation on [`Graph`] takes `impl Into<Operand>`, so nodes and
/// literals can be mixed freely on both sides of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(Value),
    Literal(f64),
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(*value)
    }
}

impl From<f64> for Operand {
    fn from(literal: f64) -> Self {
        Operand::Literal(literal)
    }
}

impl From<i32> for Operand {
    fn from(literal: i32) -> Self {
        Operand::Literal(f64::from(literal))
    }
}

/// One entry of the arena.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

/// Recorded arena length, see [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
}

impl Checkpoint {
    /// Number of nodes that survive a rewind to this checkpoint.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Arena owning every node of a computation graph.
///
/// Nodes are appended by leaf constructors and by the operations in
/// [`crate::ops`]; an operation's operands always live at lower indices than
/// its result, so the graph is acyclic by construction. Dropping the `Graph`
/// drops every node at once.
///
/// Methods taking a [`Value`] panic if the handle does not belong to this
/// graph (or was invalidated by [`Graph::rewind`]), like slice indexing.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `value` addresses a live node of this graph.
    pub fn contains(&self, value: Value) -> bool {
        value.0 < self.nodes.len()
    }

    /// Creates a leaf node (no operands) holding `value`.
    pub fn leaf(&mut self, value: f64) -> Value {
        self.push(value, Op::Leaf)
    }

    /// Creates a leaf node carrying a diagnostic label.
    pub fn leaf_with_label(&mut self, value: f64, label: impl Into<String>) -> Value {
        let leaf = self.leaf(value);
        self.nodes[leaf.0].label = Some(label.into());
        leaf
    }

    /// Turns an operand into a node handle, allocating a fresh leaf for literals.
    pub fn promote(&mut self, operand: impl Into<Operand>) -> Value {
        match operand.into() {
            Operand::Node(value) => value,
            Operand::Literal(literal) => self.leaf(literal),
        }
    }

    /// Appends a node produced by `op`. Operands must already be in the arena.
    pub(crate) fn push(&mut self, value: f64, op: Op) -> Value {
        let handle = Value(self.nodes.len());
        debug_assert!(
            op.operands().all(|operand| operand.0 < handle.0),
            "operands must be allocated before the node consuming them"
        );
        self.nodes.push(Node {
            value,
            grad: 0.0,
            op,
            label: None,
        });
        handle
    }

    fn entry(&self, value: Value) -> &Node {
        &self.nodes[value.0]
    }

    fn entry_mut(&mut self, value: Value) -> &mut Node {
        &mut self.nodes[value.0]
    }

    /// Forward value of a node.
    pub fn value(&self, value: Value) -> f64 {
        self.entry(value).value
    }

    /// Accumulated gradient of a node.
    pub fn grad(&self, value: Value) -> f64 {
        self.entry(value).grad
    }

    /// Overwrites the value of a leaf (parameter updates, perturbations).
    ///
    /// Nodes already computed from this leaf keep their old value; rebuild the
    /// expression to see the change.
    ///
    /// # Panics
    /// Panics if `value` is not a leaf: interior values are fixed by their
    /// operation.
    pub fn set_value(&mut self, value: Value, new_value: f64) {
        let node = self.entry_mut(value);
        assert!(
            matches!(node.op, Op::Leaf),
            "set_value called on interior node {:?}",
            value
        );
        node.value = new_value;
    }

    pub fn set_grad(&mut self, value: Value, grad: f64) {
        self.entry_mut(value).grad = grad;
    }

    pub fn label(&self, value: Value) -> Option<&str> {
        self.entry(value).label.as_deref()
    }

    pub fn set_label(&mut self, value: Value, label: impl Into<String>) {
        self.entry_mut(value).label = Some(label.into());
    }

    /// Operation that produced the node, including its operand handles.
    pub fn op(&self, value: Value) -> Op {
        self.entry(value).op
    }

    /// Operand handles of the node, in operation order (empty for leaves).
    pub fn operands(&self, value: Value) -> Vec<Value> {
        self.entry(value).op.operands().collect()
    }

    pub fn is_leaf(&self, value: Value) -> bool {
        matches!(self.entry(value).op, Op::Leaf)
    }

    /// Records the current arena length.
    ///
    /// Create long-lived leaves (model parameters) first, take a checkpoint,
    /// then [`rewind`](Graph::rewind) after each training step to drop the
    /// step's intermediate nodes.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.nodes.len(),
        }
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Nodes before the checkpoint never reference later ones, so the
    /// remaining arena is still a closed graph. Handles to dropped nodes
    /// must not be used afterwards.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        if checkpoint.position < self.nodes.len() {
            debug!(
                "Rewinding graph from {} to {} nodes",
                self.nodes.len(),
                checkpoint.position
            );
            self.nodes.truncate(checkpoint.position);
        }
    }

    /// Nodes reachable from `root`, each placed after all of its operands.
    ///
    /// Post-order depth-first traversal over operand edges (operands in
    /// operation order), deduplicated by node identity. Iterative, so long
    /// chains do not exhaust the call stack.
    pub fn topological_order(&self, root: Value) -> Vec<Value> {
        let mut visited: HashSet<Value> = HashSet::new();
        let mut sorted_list: Vec<Value> = Vec::new();
        // (node, operands already scheduled)
        let mut stack: Vec<(Value, bool)> = vec![(root, false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                sorted_list.push(node);
                continue;
            }
            if !visited.insert(node) {
                continue;
            }
            stack.push((node, true));
            let operands: Vec<Value> = self.entry(node).op.operands().collect();
            // Reversed so the first operand is explored first.
            for operand in operands.into_iter().rev() {
                if !visited.contains(&operand) {
                    stack.push((operand, false));
                }
            }
        }
        sorted_list
    }

    /// Reverse-mode differentiation pass rooted at `root`.
    ///
    /// Seeds `root`'s gradient with 1.0 and applies every reachable node's
    /// local rule from the root down to the leaves. Gradients are added to,
    /// never reset: zero them (e.g. [`crate::nn::Module::zero_grad`]) before
    /// each pass, otherwise results accumulate onto the previous ones.
    pub fn backward(&mut self, root: Value) {
        let sorted_nodes = self.topological_order(root);
        debug!(
            "Backward pass from {:?}: {} reachable nodes",
            root,
            sorted_nodes.len()
        );

        self.entry_mut(root).grad = 1.0;

        for &node in sorted_nodes.iter().rev() {
            let Node {
                op, value, grad, ..
            } = *self.entry(node);
            trace!("[backward] {:?} {} grad={}", node, op.kind(), grad);
            op.propagate(&mut self.nodes, value, grad);
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
