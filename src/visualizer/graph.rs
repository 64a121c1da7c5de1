//! Layered node/edge topology and its per-frame pulse state.

use std::ops::{Range, RangeInclusive};

use rand::Rng;

use super::surface::{Point, SurfaceSize};

const NODE_PULSE_SPEED: Range<f64> = 0.02..0.03;
const EDGE_PULSE_SPEED: Range<f64> = 0.01..0.02;
const INCOMING_EDGES_PER_NODE: RangeInclusive<usize> = 2..=3;

/// Edges re-roll `active` as `uniform(0,1) > ACTIVATION_THRESHOLD`.
pub const ACTIVATION_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphShape {
    pub layer_count: usize,
    pub nodes_per_layer: usize,
}

impl GraphShape {
    pub fn node_count(&self) -> usize {
        self.layer_count * self.nodes_per_layer
    }
}

impl Default for GraphShape {
    fn default() -> Self {
        Self {
            layer_count: 5,
            nodes_per_layer: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub position: Point,
    pub layer: usize,
    pub slot: usize,
    pub pulse_state: f64,
    pub pulse_direction: f64,
    pub pulse_speed: f64,
}

impl Node {
    /// Advances the oscillation, flipping direction at either bound.
    pub fn advance(&mut self) {
        self.pulse_state += self.pulse_direction * self.pulse_speed;
        if let Some(bound) = escaped_bound(self.pulse_state) {
            self.pulse_direction = -self.pulse_direction;
            self.pulse_state = bound;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub pulse_position: f64,
    pub pulse_direction: f64,
    pub pulse_speed: f64,
    pub active: bool,
}

impl Edge {
    /// Moves the pulse along the edge. Returns `true` when it hit an endpoint
    /// and bounced.
    pub fn advance(&mut self) -> bool {
        self.pulse_position += self.pulse_direction * self.pulse_speed;
        match escaped_bound(self.pulse_position) {
            Some(bound) => {
                self.pulse_direction = -self.pulse_direction;
                self.pulse_position = bound;
                true
            }
            None => false,
        }
    }
}

fn escaped_bound(value: f64) -> Option<f64> {
    if value > 1.0 {
        Some(1.0)
    } else if value < 0.0 {
        Some(0.0)
    } else {
        None
    }
}

pub(crate) fn roll_active<R: Rng>(rng: &mut R) -> bool {
    rng.gen::<f64>() > ACTIVATION_THRESHOLD
}

/// The full node and edge set. Structure is fixed once built.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl NetworkGraph {
    pub fn build<R: Rng>(shape: GraphShape, size: SurfaceSize, rng: &mut R) -> Self {
        let GraphShape {
            layer_count,
            nodes_per_layer,
        } = shape;

        let mut graph = NetworkGraph {
            nodes: Vec::with_capacity(shape.node_count()),
            edges: Vec::new(),
        };
        if layer_count == 0 || nodes_per_layer == 0 {
            return graph;
        }

        let layer_spacing = size.width / (layer_count + 1) as f64;
        let node_spacing = size.height / (nodes_per_layer + 1) as f64;

        for layer in 0..layer_count {
            for slot in 0..nodes_per_layer {
                let index = graph.nodes.len();
                graph.nodes.push(Node {
                    position: Point::new(
                        layer_spacing * (layer + 1) as f64,
                        node_spacing * (slot + 1) as f64,
                    ),
                    layer,
                    slot,
                    pulse_state: 0.0,
                    pulse_direction: 1.0,
                    pulse_speed: rng.gen_range(NODE_PULSE_SPEED),
                });

                if layer == 0 {
                    continue;
                }

                let previous_layer_start = (layer - 1) * nodes_per_layer;
                let incoming = rng.gen_range(INCOMING_EDGES_PER_NODE);
                for _ in 0..incoming {
                    let source = previous_layer_start + rng.gen_range(0..nodes_per_layer);
                    graph.edges.push(Edge {
                        source,
                        target: index,
                        pulse_position: rng.gen::<f64>(),
                        pulse_direction: 1.0,
                        pulse_speed: rng.gen_range(EDGE_PULSE_SPEED),
                        active: roll_active(rng),
                    });
                }
            }
        }

        graph
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub(crate) fn parts_mut(&mut self) -> (&[Node], &mut [Edge]) {
        (&self.nodes, &mut self.edges)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Endpoints of an edge as positions.
    pub fn edge_endpoints(&self, edge: &Edge) -> (Point, Point) {
        (
            self.nodes[edge.source].position,
            self.nodes[edge.target].position,
        )
    }
}
