//! Binary arithmetic on scalar nodes.
//!
//! `add`, `mul` and `pow` carry their own gradient rule (see
//! [`Op`](crate::autograd::Op)). `neg`, `sub` and `div` are built purely from
//! those three and get their gradients for free.

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;
