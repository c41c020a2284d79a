// Element-wise math functions on a single node.

pub mod exp;

pub use exp::exp_op;
