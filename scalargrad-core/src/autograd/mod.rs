//! # Autograd
//!
//! Reverse-mode differentiation over scalar nodes stored in a [`Graph`] arena.
//!
//! Forward operations (see [`crate::ops`]) append nodes tagged with the
//! [`Op`] that produced them. [`Graph::backward`] sorts the nodes reachable
//! from a root topologically and walks them root-first, letting each node's
//! `Op` add its local contribution into its operands' gradients.

pub mod backward_op;
pub mod debug;
pub mod grad_check;
pub mod graph;

pub use backward_op::{Op, OpKind};
pub use debug::{Dot, NodeView};
pub use graph::{Checkpoint, Graph, Operand, Value};
