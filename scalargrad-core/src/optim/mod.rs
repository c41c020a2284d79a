// scalargrad-core/src/optim/mod.rs

//! Optimizers for training networks built on a [`Graph`](crate::autograd::Graph).
//!
//! An optimizer holds the handles of the leaves it updates; every call takes
//! the graph that owns them.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::{SgdConfig, SgdOptimizer};
