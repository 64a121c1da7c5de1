//! PulseChat is a terminal chat demo with a live network visualizer.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`visualizer`] owns the layered graph, the pulse animation engine and
//!   the cancellable frame loop, drawing onto any [`visualizer::Surface`].
//! - [`core`] owns the conversation, simulated replies, model settings and
//!   configuration.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that drives user input, replies and visualizer ticks.
//! - [`utils`] holds color handling, logging setup and transcript scrolling.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which loads configuration and dispatches into
//! [`ui::chat_loop`] for interactive sessions.

pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
pub mod visualizer;
