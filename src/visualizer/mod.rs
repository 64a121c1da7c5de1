//! Decorative network visualization.
//!
//! A layered graph of nodes and edges whose pulses are advanced once per
//! display refresh and painted onto a host-provided [`Surface`]:
//! - [`graph`] builds the fixed topology and holds per-node/per-edge state.
//! - [`engine`] advances that state and issues draw calls for one frame.
//! - [`frame_loop`] decides whether a refresh runs a frame, and stops for good
//!   on teardown.
//! - [`NetworkVisualizer`] ties an engine to a surface across mount, resize,
//!   refresh and teardown.
//!
//! [`terminal_surface`] and [`display_list`] provide the surface used by the
//! terminal UI.

pub mod display_list;
pub mod engine;
pub mod frame_loop;
pub mod graph;
pub mod surface;
pub mod terminal_surface;

use rand::Rng;
use tracing::{debug, info};

pub use engine::{AnimationEngine, EngineConfig};
pub use frame_loop::FrameLoop;
pub use graph::{Edge, GraphShape, NetworkGraph, Node};
pub use surface::{DrawingContext, Point, ResizeListenerId, Rgba, Surface, SurfaceSize};

/// A mounted visualization bound to one surface.
pub struct NetworkVisualizer<S: Surface, R: Rng> {
    surface: S,
    engine: Option<AnimationEngine<R>>,
    frames: FrameLoop,
    resize_listener: Option<ResizeListenerId>,
}

impl<S: Surface, R: Rng> NetworkVisualizer<S, R> {
    /// Sizes the surface buffer, builds the graph and arms the first frame.
    /// Without a drawing context the visualizer stays inert.
    pub fn mount(mut surface: S, config: EngineConfig, rng: R) -> Self {
        if surface.context().is_none() {
            debug!("no drawing context available; visualizer left inert");
            return Self {
                surface,
                engine: None,
                frames: FrameLoop::new(),
                resize_listener: None,
            };
        }

        let size = surface.client_size();
        surface.set_buffer_size(size);
        let resize_listener = surface.add_resize_listener();
        let engine = AnimationEngine::new(config, size, rng);

        let mut frames = FrameLoop::new();
        frames.start();
        info!(
            width = size.width,
            height = size.height,
            "network visualizer mounted"
        );

        Self {
            surface,
            engine: Some(engine),
            frames,
            resize_listener: Some(resize_listener),
        }
    }

    /// Host hook for one display refresh. Returns whether a frame was drawn.
    pub fn on_display_refresh(&mut self) -> bool {
        let Self {
            surface,
            engine,
            frames,
            resize_listener,
        } = self;

        let Some(engine) = engine.as_mut() else {
            return false;
        };

        if let Some(id) = *resize_listener {
            if surface.take_resize_notification(id) && frames.is_running() {
                let size = surface.client_size();
                surface.set_buffer_size(size);
                engine.rebuild(size);
            }
        }

        frames.run_frame(|| {
            if let Some(ctx) = surface.context() {
                engine.render_frame(ctx);
            }
        })
    }

    /// Deregisters the resize listener and stops the frame loop.
    pub fn teardown(&mut self) {
        if let Some(id) = self.resize_listener.take() {
            self.surface.remove_resize_listener(id);
            debug!("network visualizer torn down");
        }
        self.frames.stop();
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_some() && self.frames.is_running()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn engine(&self) -> Option<&AnimationEngine<R>> {
        self.engine.as_ref()
    }
}

impl<S: Surface, R: Rng> Drop for NetworkVisualizer<S, R> {
    fn drop(&mut self) {
        self.teardown();
    }
}
