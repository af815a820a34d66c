use crate::node::Node;
use crate::prelude::*;

use rand::Rng;

/// An ordered group of nodes sharing the same previous layer, and therefore
/// the same fan-in.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    nodes: Vec<Node>,
}

impl Layer {
    /// Creates a layer of `node_count` nodes, each wired with
    /// `previous_layer_node_count` weights.
    pub fn new(node_count: usize, previous_layer_node_count: usize) -> Self {
        Self {
            nodes: (0..node_count)
                .map(|_| Node::new(previous_layer_node_count))
                .collect(),
        }
    }

    /// Randomizes the weights of every node in the layer.
    pub fn randomize_weights(&mut self, rng: &mut impl Rng) {
        for node in &mut self.nodes {
            node.randomize_weights(rng);
        }
    }

    /// Recomputes every node's value from the previous layer's values.
    /// Not meaningful for the input layer, which has no previous layer.
    pub fn calculate(&mut self, previous: &Layer) -> Result<()> {
        let inputs = previous.values();

        for node in &mut self.nodes {
            node.calculate(&inputs)?;
        }
        Ok(())
    }

    /// Snapshot of all node values, in node order.
    pub fn values(&self) -> Vec<f64> {
        self.nodes.iter().map(Node::value).collect()
    }

    /// Assigns every node's value element-wise.
    pub fn set_values(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.nodes.len() {
            return Err(Error::DimensionMismatch);
        }

        for (node, &value) in self.nodes.iter_mut().zip(values) {
            node.set_value(value);
        }
        Ok(())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Returns the number of nodes in the layer.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Fan-in shared by every node in the layer.
    pub fn fan_in(&self) -> usize {
        self.nodes.first().map(Node::fan_in).unwrap_or(0)
    }
}
