//! # Activation Functions
//!
//! Non-linearities applied to a single node:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent, the default neuron activation.
//! - [`relu`](relu/fn.relu_op.html): Rectified Linear Unit.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;
