use crate::layer::Layer;
use crate::prelude::*;

use rand::Rng;

/// Layers ordered from input (index 0) to output, with forward evaluation
/// driven layer by layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from a topology descriptor. `nodes_per_layer` covers
    /// every layer, input and output included, so its length must be
    /// `hidden_layer_count + 2`. Each layer's fan-in is the size of its
    /// predecessor; the input layer has fan-in 0.
    pub fn new(hidden_layer_count: usize, nodes_per_layer: &[usize]) -> Result<Self> {
        if nodes_per_layer.len() != hidden_layer_count + 2 {
            return Err(Error::DimensionMismatch);
        }

        let mut layers = Vec::with_capacity(nodes_per_layer.len());
        let mut previous_count = 0;
        for &count in nodes_per_layer {
            layers.push(Layer::new(count, previous_count));
            previous_count = count;
        }
        Ok(Self { layers })
    }

    /// Randomizes every weight in the network. The input layer is skipped,
    /// it has no weights.
    pub fn randomize_weights(&mut self) {
        self.randomize_weights_with(&mut rand::thread_rng());
    }

    /// Same as `randomize_weights`, sampling from the given generator.
    pub fn randomize_weights_with(&mut self, rng: &mut impl Rng) {
        for layer in self.layers.iter_mut().skip(1) {
            layer.randomize_weights(rng);
        }
    }

    /// Loads a sample into the input layer.
    pub fn load_input(&mut self, values: &[f64]) -> Result<()> {
        self.layers[0].set_values(values)
    }

    /// Runs a full forward pass: every non-input layer is recomputed from its
    /// predecessor, in ascending order. Repeated calls overwrite the previous
    /// results.
    pub fn calculate(&mut self) -> Result<()> {
        for i in 1..self.layers.len() {
            let (previous, rest) = self.layers.split_at_mut(i);
            rest[0].calculate(&previous[i - 1])?;
        }
        Ok(())
    }

    /// Snapshot of the output layer's values.
    pub fn output(&self) -> Vec<f64> {
        self.layers[self.layers.len() - 1].values()
    }

    /// Loads a sample, runs a forward pass and returns the output.
    pub fn evaluate(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.load_input(input)?;
        self.calculate()?;
        Ok(self.output())
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Number of nodes in the input layer.
    pub fn input_size(&self) -> usize {
        self.layers[0].len()
    }

    /// Number of nodes in the output layer.
    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].len()
    }
}
