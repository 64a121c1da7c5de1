pub mod app;
pub mod config;
pub mod constants;
pub mod message;
pub mod responder;
pub mod settings;
pub mod text_wrapping;
