use rand::Rng;
use tracing::debug;

use super::graph::{roll_active, GraphShape, NetworkGraph};
use super::surface::{DrawingContext, Rgba, SurfaceSize};

const EDGE_LINE_ALPHA: f64 = 0.2;
const EDGE_LINE_WIDTH: f64 = 1.0;
const EDGE_PULSE_ALPHA: f64 = 0.8;
const NODE_BASE_ALPHA: f64 = 0.5;
const NODE_PULSE_GROWTH: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub shape: GraphShape,
    /// Node radius at rest, in surface pixels.
    pub node_radius: f64,
    /// Radius of the dot travelling along an edge.
    pub pulse_radius: f64,
    pub accent: Rgba,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shape: GraphShape::default(),
            node_radius: 4.0,
            pulse_radius: 2.0,
            accent: Rgba::new(148, 129, 237, 1.0),
        }
    }
}

/// Owns the graph and the random source, and paints one frame at a time.
#[derive(Debug)]
pub struct AnimationEngine<R> {
    config: EngineConfig,
    rng: R,
    size: SurfaceSize,
    graph: NetworkGraph,
    frames_rendered: u64,
}

impl<R: Rng> AnimationEngine<R> {
    pub fn new(config: EngineConfig, size: SurfaceSize, mut rng: R) -> Self {
        let graph = NetworkGraph::build(config.shape, size, &mut rng);
        debug!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            width = size.width,
            height = size.height,
            "network graph built"
        );
        Self {
            config,
            rng,
            size,
            graph,
            frames_rendered: 0,
        }
    }

    /// Discards the graph and builds a fresh one for `size`.
    pub fn rebuild(&mut self, size: SurfaceSize) {
        self.size = size;
        self.graph = NetworkGraph::build(self.config.shape, size, &mut self.rng);
        debug!(
            nodes = self.graph.nodes().len(),
            edges = self.graph.edges().len(),
            width = size.width,
            height = size.height,
            "network graph rebuilt"
        );
    }

    /// Clears the surface, advances every pulse by one step, and draws.
    pub fn render_frame<C: DrawingContext + ?Sized>(&mut self, ctx: &mut C) {
        ctx.clear_rect(0.0, 0.0, self.size.width, self.size.height);

        let accent = self.config.accent;
        let pulse_radius = self.config.pulse_radius;
        let rng = &mut self.rng;
        let (nodes, edges) = self.graph.parts_mut();

        for edge in edges.iter_mut().filter(|edge| edge.active) {
            let from = nodes[edge.source].position;
            let to = nodes[edge.target].position;
            ctx.stroke_line(
                from,
                to,
                accent.with_alpha(EDGE_LINE_ALPHA),
                EDGE_LINE_WIDTH,
            );

            if edge.advance() {
                edge.active = roll_active(rng);
            }

            ctx.fill_circle(
                from.lerp(to, edge.pulse_position),
                pulse_radius,
                accent.with_alpha(EDGE_PULSE_ALPHA),
            );
        }

        let node_radius = self.config.node_radius;
        for node in self.graph.nodes_mut() {
            node.advance();
            let radius = node_radius * (1.0 + node.pulse_state * NODE_PULSE_GROWTH);
            let alpha = NODE_BASE_ALPHA + node.pulse_state * (1.0 - NODE_BASE_ALPHA);
            ctx.fill_circle(node.position, radius, accent.with_alpha(alpha));
        }

        self.frames_rendered += 1;
    }

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[cfg(test)]
    pub(crate) fn graph_mut(&mut self) -> &mut NetworkGraph {
        &mut self.graph
    }
}
