// src/nn/mod.rs
// Neural network building blocks: the Module trait, layers, losses, init.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

// Re-export common items
pub use layers::{Activation, Layer, Neuron};
pub use losses::{MSELoss, Reduction};
pub use module::{Module, Output};
