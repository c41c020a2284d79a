//! Scalar reverse-mode automatic differentiation, with a small neural
//! network library (neurons, layers, multi-layer perceptrons) on top.
//!
//! Every number taking part in a computation is a node of a [`Graph`]. Build
//! an expression through the graph's operations, call
//! [`Graph::backward`] on the result, then read each node's gradient.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let ab = graph.mul(a, b);
//! let y = graph.add(ab, 10.0);
//! graph.backward(y);
//!
//! assert_eq!(graph.value(y), 4.0);
//! assert_eq!(graph.grad(a), -3.0);
//! assert_eq!(graph.grad(b), 2.0);
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;

pub use autograd::{Graph, Operand, Value};
pub use error::ScalarGradError;
pub use model::{Mlp, MlpConfig};
pub use nn::{Module, Output};
// Re-export traits required by public functions (`Graph::pow`)
pub use num_traits;
