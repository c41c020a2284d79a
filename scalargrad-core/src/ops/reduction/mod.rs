// Reductions over many nodes.

pub mod sum;

pub use sum::sum_op;
