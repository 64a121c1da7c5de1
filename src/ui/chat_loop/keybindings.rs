//! Context-aware keybinding registry.
//!
//! Keys resolve to a [`KeyAction`] through the bindings for the current
//! [`KeyContext`]. Unbound keys in the chat context fall through to the text
//! area; in the settings drawer they are swallowed.

use std::collections::HashMap;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input as TAInput;

use crate::core::app::App;

/// Action to take in the main event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLoopAction {
    Continue,
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// Typing into the message box
    Chat,
    /// Settings drawer has focus
    Drawer,
}

impl KeyContext {
    pub fn for_app(app: &App) -> Self {
        if app.ui.is_drawer_open() {
            KeyContext::Drawer
        } else {
            KeyContext::Chat
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    InsertNewline,
    ToggleTheme,
    ToggleSettings,
    ClearChat,
    Quit,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    CloseDrawer,
    SelectPrevious,
    SelectNext,
    Decrease,
    Increase,
    Activate,
}

/// Pattern for matching key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPattern {
    pub fn simple(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn alt(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::ALT,
        }
    }
}

impl From<&KeyEvent> for KeyPattern {
    fn from(key: &KeyEvent) -> Self {
        // Terminals disagree on whether Ctrl+T arrives as 't' or 'T'.
        let code = match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyCode::Char(c.to_ascii_lowercase())
            }
            other => other,
        };
        let modifiers = if key.modifiers.contains(KeyModifiers::CONTROL) {
            key.modifiers - KeyModifiers::SHIFT
        } else {
            key.modifiers
        };
        Self { code, modifiers }
    }
}

pub struct KeyBindings {
    bindings: HashMap<KeyContext, HashMap<KeyPattern, KeyAction>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(mut self, context: KeyContext, pattern: KeyPattern, action: KeyAction) -> Self {
        self.bindings
            .entry(context)
            .or_default()
            .insert(pattern, action);
        self
    }

    /// Bind in every context.
    pub fn bind_global(self, pattern: KeyPattern, action: KeyAction) -> Self {
        self.bind(KeyContext::Chat, pattern, action)
            .bind(KeyContext::Drawer, pattern, action)
    }

    pub fn resolve(&self, key: &KeyEvent, context: KeyContext) -> Option<KeyAction> {
        self.bindings
            .get(&context)?
            .get(&KeyPattern::from(key))
            .copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyAction::*;
        use KeyContext::*;

        Self::new()
            .bind_global(KeyPattern::ctrl('c'), Quit)
            .bind_global(KeyPattern::ctrl('t'), ToggleTheme)
            .bind_global(KeyPattern::ctrl('s'), ToggleSettings)
            .bind_global(KeyPattern::ctrl('l'), ClearChat)
            .bind(Chat, KeyPattern::simple(KeyCode::Enter), Submit)
            .bind(Chat, KeyPattern::alt(KeyCode::Enter), InsertNewline)
            .bind(Chat, KeyPattern::simple(KeyCode::Up), ScrollUp)
            .bind(Chat, KeyPattern::simple(KeyCode::Down), ScrollDown)
            .bind(Chat, KeyPattern::simple(KeyCode::PageUp), PageUp)
            .bind(Chat, KeyPattern::simple(KeyCode::PageDown), PageDown)
            .bind(Drawer, KeyPattern::simple(KeyCode::Esc), CloseDrawer)
            .bind(Drawer, KeyPattern::simple(KeyCode::Up), SelectPrevious)
            .bind(Drawer, KeyPattern::simple(KeyCode::Down), SelectNext)
            .bind(Drawer, KeyPattern::simple(KeyCode::Left), Decrease)
            .bind(Drawer, KeyPattern::simple(KeyCode::Right), Increase)
            .bind(Drawer, KeyPattern::simple(KeyCode::Enter), Activate)
    }
}

pub fn apply_key_action(app: &mut App, action: KeyAction) -> KeyLoopAction {
    match action {
        KeyAction::Quit => {
            app.ui.exit_requested = true;
            return KeyLoopAction::Break;
        }
        KeyAction::Submit => {
            app.submit_input();
        }
        KeyAction::InsertNewline => app.ui.insert_newline(),
        KeyAction::ToggleTheme => app.ui.toggle_theme(),
        KeyAction::ToggleSettings => app.ui.toggle_drawer(),
        KeyAction::ClearChat => app.clear_chat(),
        KeyAction::ScrollUp => app.scroll_by(-1),
        KeyAction::ScrollDown => app.scroll_by(1),
        KeyAction::PageUp => app.scroll_by(-app.page_lines()),
        KeyAction::PageDown => app.scroll_by(app.page_lines()),
        KeyAction::CloseDrawer => app.ui.close_drawer(),
        KeyAction::SelectPrevious => app.ui.select_previous_setting(),
        KeyAction::SelectNext => app.ui.select_next_setting(),
        KeyAction::Decrease => {
            app.adjust_selected_setting(-1);
        }
        KeyAction::Increase => {
            app.adjust_selected_setting(1);
        }
        KeyAction::Activate => {
            app.activate_selected_setting();
        }
    }
    KeyLoopAction::Continue
}

/// Resolves and applies one key press.
pub fn handle_key(app: &mut App, bindings: &KeyBindings, key: &KeyEvent) -> KeyLoopAction {
    let context = KeyContext::for_app(app);
    match bindings.resolve(key, context) {
        Some(action) => apply_key_action(app, action),
        None => {
            if context == KeyContext::Chat {
                app.ui.textarea.input(TAInput::from(*key));
            }
            KeyLoopAction::Continue
        }
    }
}
