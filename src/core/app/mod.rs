use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::core::config::Config;
use crate::core::constants::{greeting, CLEARED_CHAT_TEXT};
use crate::core::responder::{simulated_response, ReplyParams, ResponderService};
use crate::core::settings::{ModelParameters, SettingField};
use crate::ui::theme::Theme;
use crate::utils::color::ColorDepth;
use crate::utils::scroll::ScrollCalculator;
use crate::visualizer::terminal_surface::TerminalSurface;
use crate::visualizer::NetworkVisualizer;

pub mod conversation;
pub mod ui_state;

pub use conversation::{Conversation, PendingReply};
pub use ui_state::{SettingsDrawer, TranscriptViewport, UiState};

pub type TerminalVisualizer = NetworkVisualizer<TerminalSurface, StdRng>;

/// Everything needed to build an [`App`] besides the responder channel.
pub struct AppInitConfig {
    pub config: Config,
    /// Overrides the configured theme.
    pub theme: Option<String>,
    pub seed: u64,
    pub color_depth: ColorDepth,
}

pub struct App {
    pub ui: UiState,
    pub conversation: Conversation,
    pub settings: ModelParameters,
    pub visualizer: TerminalVisualizer,
    assistant_name: String,
    response_delay: Duration,
    frame_duration: Duration,
    pane_height: u16,
    reply_rng: StdRng,
    responder: ResponderService,
}

impl App {
    pub fn new(init: AppInitConfig, responder: ResponderService) -> Self {
        let AppInitConfig {
            config,
            theme,
            seed,
            color_depth,
        } = init;

        let theme_name = theme.or_else(|| config.theme.clone());
        let theme = theme_name
            .as_deref()
            .map(Theme::from_name)
            .unwrap_or_else(Theme::dark_default);

        let assistant_name = config.assistant_name().to_string();
        let visualizer = NetworkVisualizer::mount(
            TerminalSurface::new(config.cell_metrics()),
            config.engine_config(),
            StdRng::seed_from_u64(seed),
        );

        info!(seed, theme = %theme.id, "app initialized");

        Self {
            ui: UiState::new(theme, color_depth),
            conversation: Conversation::new(greeting(&assistant_name)),
            settings: config.model_parameters(),
            visualizer,
            assistant_name,
            response_delay: config.response_delay(),
            frame_duration: config.frame_duration(),
            pane_height: config.pane_height(),
            reply_rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            responder,
        }
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn pane_height(&self) -> u16 {
        self.pane_height
    }

    pub fn is_loading(&self) -> bool {
        self.conversation.is_loading()
    }

    /// Sends the trimmed input as a user message and requests a reply.
    /// Blank input or an outstanding reply leaves everything untouched.
    pub fn submit_input(&mut self) -> bool {
        let raw = self.ui.input_text();
        let prompt = raw.trim();
        if prompt.is_empty() || self.conversation.is_loading() {
            return false;
        }
        let prompt = prompt.to_string();

        self.conversation.add_user_message(prompt.clone());
        self.ui.clear_input();
        self.ui.scroll_to_bottom();
        self.ui.activity_started = std::time::Instant::now();

        let (request_id, cancel_token) = self.conversation.begin_request();
        let text = simulated_response(&prompt, &mut self.reply_rng);
        self.responder.spawn_reply(ReplyParams {
            text,
            delay: self.response_delay,
            cancel_token,
            request_id,
        });
        info!(request_id, "reply requested");
        true
    }

    /// Delivers a reply from the responder channel.
    pub fn receive_reply(&mut self, text: String, request_id: u64) -> bool {
        let accepted = self.conversation.accept_reply(text, request_id);
        if accepted {
            self.ui.scroll_to_bottom();
        }
        accepted
    }

    pub fn clear_chat(&mut self) {
        self.conversation.reset(CLEARED_CHAT_TEXT);
        self.ui.scroll_offset = 0;
        self.ui.scroll_to_bottom();
        info!("chat cleared");
    }

    /// Runs the drawer row under the cursor: adjusts a value or fires the action.
    pub fn adjust_selected_setting(&mut self, steps: i32) -> bool {
        match self.ui.selected_setting() {
            Some(field) if !field.is_action() => self.settings.adjust(field, steps),
            _ => false,
        }
    }

    pub fn activate_selected_setting(&mut self) -> bool {
        match self.ui.selected_setting() {
            Some(SettingField::ClearHistory) => {
                self.clear_chat();
                self.ui.close_drawer();
                true
            }
            _ => false,
        }
    }

    pub fn max_scroll_offset(&self) -> u16 {
        let viewport = self.ui.transcript_viewport;
        let lines = ScrollCalculator::build_display_lines(
            self.conversation.messages(),
            &self.ui.theme,
            &self.assistant_name,
            viewport.width,
        );
        ScrollCalculator::calculate_max_scroll_offset(
            lines.len() + self.is_loading() as usize,
            viewport.height,
        )
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.max_scroll_offset();
        self.ui.scroll_by(delta, max);
    }

    /// Page size for PageUp/PageDown.
    pub fn page_lines(&self) -> i32 {
        self.ui.transcript_viewport.height.max(1) as i32
    }

    /// Host display refresh for the visualizer pane.
    pub fn tick_visualizer(&mut self) -> bool {
        self.visualizer.on_display_refresh()
    }

    /// Cancels outstanding work before the terminal is restored.
    pub fn shutdown(&mut self) {
        self.conversation.cancel_pending();
        self.visualizer.teardown();
    }
}

#[cfg(test)]
mod tests;
