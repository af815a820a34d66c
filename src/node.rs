use crate::activation::sigmoid;
use crate::prelude::*;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// A single unit of a layer: an activation value, a bias, and one weight per
/// node of the previous layer. Input-layer nodes have no incoming weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    value: f64,
    bias: f64,
    weights: Vec<f64>,
}

impl Node {
    /// Creates a node wired to a previous layer of the given size.
    /// Value, bias and every weight start at zero.
    pub fn new(previous_layer_node_count: usize) -> Self {
        Self {
            value: 0.0,
            bias: 0.0,
            weights: vec![0.0; previous_layer_node_count],
        }
    }

    /// Replaces every weight with an independent uniform sample from [0, 1).
    pub fn randomize_weights(&mut self, rng: &mut impl Rng) {
        let die = Uniform::from(0.0..1.0);

        for weight in &mut self.weights {
            *weight = die.sample(rng);
        }
    }

    /// Recomputes this node's value from the previous layer's values: the
    /// weighted sum plus bias, passed through sigmoid.
    pub fn calculate(&mut self, previous_values: &[f64]) -> Result<()> {
        if previous_values.len() != self.weights.len() {
            return Err(Error::DimensionMismatch);
        }

        let raw = self
            .weights
            .iter()
            .zip(previous_values)
            .map(|(w, v)| w * v)
            .sum::<f64>()
            + self.bias;
        self.value = sigmoid(raw);
        Ok(())
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    /// Adds a delta to the bias.
    pub fn shift_bias(&mut self, delta: f64) {
        self.bias += delta;
    }

    /// Returns the number of incoming connections (the previous layer's size).
    pub fn fan_in(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Replaces the weight vector; its length must match the fan-in.
    pub fn set_weights(&mut self, weights: Vec<f64>) -> Result<()> {
        if weights.len() != self.weights.len() {
            return Err(Error::DimensionMismatch);
        }

        self.weights = weights;
        Ok(())
    }
}
