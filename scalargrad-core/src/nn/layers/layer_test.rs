use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::layers::{Activation, Layer};
use crate::nn::module::{Module, Output};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_shapes_and_parameters() {
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, 3, 4, &mut StdRng::seed_from_u64(0));
    assert_eq!(layer.n_inputs(), 3);
    assert_eq!(layer.n_outputs(), 4);
    assert_eq!(layer.children().len(), 4);
    assert_eq!(layer.num_parameters(), 4 * (3 + 1));

    // Neuron order: all of neuron 0's weights and bias, then neuron 1, ...
    let params = layer.parameters();
    assert_eq!(&params[..4], layer.neurons()[0].parameters().as_slice());
    assert_eq!(&params[12..], layer.neurons()[3].parameters().as_slice());

    let named = layer.named_parameters();
    assert_eq!(named[0].0, "neurons.0.w0");
    assert_eq!(named[3].0, "neurons.0.b");
    assert_eq!(named[15].0, "neurons.3.b");
    assert!(named.iter().map(|(_, v)| *v).eq(params.into_iter()));
}

#[test]
fn test_layer_forward_vector() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, 2, 3, &mut StdRng::seed_from_u64(0));
    let out = layer.call(&mut graph, &[0.5, -1.5])?;
    match out {
        Output::Vector(values) => {
            assert_eq!(values.len(), 3);
            for (value, neuron) in values.iter().zip(layer.neurons()) {
                let w = neuron.weights();
                let expected =
                    (graph.value(w[0]) * 0.5 + graph.value(w[1]) * -1.5 + graph.value(neuron.bias())).tanh();
                assert_relative_eq!(graph.value(*value), expected, epsilon = 1e-12);
            }
        }
        Output::Scalar(_) => panic!("three neurons must produce a vector"),
    }
    Ok(())
}

#[test]
fn test_layer_single_output_collapses() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, 2, 1, &mut StdRng::seed_from_u64(0));
    let out = layer.call(&mut graph, &[1.0, 2.0])?;
    assert!(matches!(out, Output::Scalar(_)));
    Ok(())
}

#[test]
fn test_layer_shares_promoted_inputs() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let layer = Layer::with_activation(&mut graph, 1, 2, Activation::Linear, &mut StdRng::seed_from_u64(0));
    let before = graph.len();
    layer.call(&mut graph, &[1.0])?;
    // 1 input leaf, then per neuron: mul + add (the single product is the sum itself).
    assert_eq!(graph.len() - before, 1 + 2 * 2);
    Ok(())
}

#[test]
fn test_layer_input_size_mismatch() {
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, 3, 2, &mut StdRng::seed_from_u64(0));
    assert_eq!(
        layer.call(&mut graph, &[1.0]),
        Err(ScalarGradError::InputSizeMismatch {
            expected: 3,
            actual: 1
        })
    );
}
