//! # Scalar Operations Module (`ops`)
//!
//! Every operation that can appear in a computation graph lives here,
//! grouped by family.
//!
//! ## Structure:
//!
//! - **`_op` functions** (`add_op`, `tanh_op`, ...) take already-promoted
//!   [`Value`](crate::autograd::Value) handles, compute the forward value and
//!   push a node tagged with the matching [`Op`](crate::autograd::Op). The tag
//!   is what `backward` matches on later.
//! - **`Graph` methods** (`graph.add(a, 1.0)`, `graph.tanh(x)`, ...) are the
//!   public entry points. They accept `impl Into<Operand>`, promote literals to
//!   leaves, then delegate to the `_op` function.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, and the derived neg, sub, div.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh, relu.
//! - [`reduction`]: sum over many operands.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;
