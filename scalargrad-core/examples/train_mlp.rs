//! # Training a small MLP
//!
//! Fits an MLP(3, [4, 4, 1]) to a four-sample toy dataset.
//!
//! ## Demonstrates:
//! 1.  Building the network's parameters as leaves of a `Graph`.
//! 2.  Taking a checkpoint after the parameters so each step's nodes can be
//!     dropped with `rewind`.
//! 3.  The training loop: forward, `MSELoss`, `zero_grad`, `backward`,
//!     `SgdOptimizer::step`.
//!
//! ## Running
//! `RUST_LOG=debug cargo run --example train_mlp`

use scalargrad_core::nn::{MSELoss, Reduction};
use scalargrad_core::optim::{Optimizer, SgdConfig, SgdOptimizer};
use scalargrad_core::{Graph, Mlp, Module, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut graph = Graph::new();
    let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], &mut rand::thread_rng())?;
    println!("MLP with {} parameters", mlp.num_parameters());

    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), SgdConfig::new(0.05))?;
    let checkpoint = graph.checkpoint();

    for epoch in 0..500 {
        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            preds.push(mlp.call(&mut graph, x)?.into_scalar()?);
        }
        let loss = loss_fn.calculate(&mut graph, &preds, &ys)?;
        let loss_value = graph.value(loss);

        optimizer.zero_grad(&mut graph);
        graph.backward(loss);
        optimizer.step(&mut graph)?;
        graph.rewind(checkpoint);

        if epoch % 50 == 0 {
            println!("epoch {:>3}: loss = {:.6}", epoch, loss_value);
        }
    }

    for (x, y) in xs.iter().zip(ys) {
        let pred = mlp.call(&mut graph, x)?.into_scalar()?;
        println!("{:?} -> {:+.4} (target {:+})", x, graph.value(pred), y);
    }
    graph.rewind(checkpoint);
    Ok(())
}
