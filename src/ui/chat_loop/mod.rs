//! Main chat event loop and terminal lifecycle
//!
//! [`run_chat`] owns the [`App`](crate::core::app::App) for the whole session:
//! it sets up the terminal, feeds key and paste events through the
//! context-aware [`keybindings`], drains replies from the responder, ticks
//! the visualizer and redraws.

pub mod event_loop;
pub mod keybindings;
mod lifecycle;

pub use event_loop::run_chat;
pub use keybindings::{KeyAction, KeyBindings, KeyContext, KeyLoopAction, KeyPattern};
