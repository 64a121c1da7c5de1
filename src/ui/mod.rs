//! Terminal UI layer for the chat demo.
//!
//! Key submodules include:
//! - [`chat_loop`]: the interaction loop that routes input to
//!   [`crate::core::app`] and ticks the visualizer.
//! - [`renderer`] and [`layout`]: frame composition.
//! - [`network_canvas`]: paints the visualizer's display list.
//! - [`theme`] and [`builtin_themes`]: color/style policy.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns the conversation and [`crate::visualizer`] owns the
//! animation.

pub mod builtin_themes;
pub mod chat_loop;
pub mod layout;
pub mod network_canvas;
pub mod renderer;
pub mod theme;
