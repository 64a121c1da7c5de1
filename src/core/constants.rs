//! Shared constants used across the application

/// Name shown for assistant messages and in the greeting.
pub const DEFAULT_ASSISTANT_NAME: &str = "ChatBot";

/// Delay before a simulated reply arrives.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 1500;

pub const CLEARED_CHAT_TEXT: &str = "Chat cleared. How can I help you today?";

/// Shown under the input box while it is empty.
pub const INPUT_HINT: &str = "For best results, ask specific questions or provide clear instructions";

/// Rows given to the visualizer pane, borders excluded.
pub const DEFAULT_PANE_HEIGHT: u16 = 10;

/// Upper bound on redraws per second; also the default visualizer rate.
pub const MAX_FPS: u32 = 60;

/// Space reserved for the loading indicator + margin in the input area.
pub const INDICATOR_SPACE: u16 = 4;

pub fn greeting(assistant_name: &str) -> String {
    format!("👋 Hello! I'm {assistant_name}, an AI assistant. How can I help you today?")
}
