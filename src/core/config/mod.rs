pub mod data;
pub mod io;
pub mod printing;

pub use data::{path_display, Config, ModelDefaults, VisualizerSettings};
pub use io::ConfigError;

#[cfg(test)]
mod tests;
