use super::*;
use crate::core::message::Role;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

fn init(config: Config) -> AppInitConfig {
    AppInitConfig {
        config,
        theme: None,
        seed: 17,
        color_depth: ColorDepth::Truecolor,
    }
}

fn create_app() -> (App, UnboundedReceiver<(String, u64)>) {
    let (responder, rx) = ResponderService::new();
    (App::new(init(Config::default()), responder), rx)
}

fn type_text(app: &mut App, text: &str) {
    app.ui.textarea.insert_str(text);
}

#[test]
fn starts_with_greeting_and_defaults() {
    let (app, _rx) = create_app();
    let messages = app.conversation.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::Assistant);
    assert_eq!(
        messages[0].content,
        "👋 Hello! I'm ChatBot, an AI assistant. How can I help you today?"
    );
    assert_eq!(app.settings, ModelParameters::default());
    assert_eq!(app.ui.theme.id, "dark");
    assert_eq!(app.pane_height(), 10);
    assert!(app.visualizer.is_running());
}

#[test]
fn theme_override_beats_config() {
    let config = Config {
        theme: Some("dark".into()),
        ..Default::default()
    };
    let (responder, _rx) = ResponderService::new();
    let app = App::new(
        AppInitConfig {
            theme: Some("light".into()),
            ..init(config)
        },
        responder,
    );
    assert_eq!(app.ui.theme.id, "light");
}

#[test]
fn blank_input_is_a_no_op() {
    let (mut app, _rx) = create_app();
    type_text(&mut app, "   ");
    assert!(!app.submit_input());
    assert_eq!(app.conversation.messages().len(), 1);
    assert!(!app.is_loading());
    assert_eq!(app.ui.input_text(), "   ");
}

#[tokio::test]
async fn submit_appends_trimmed_user_message_and_sets_loading() {
    let (mut app, _rx) = create_app();
    type_text(&mut app, "  tell me about tides  ");
    assert!(app.submit_input());

    let last = app.conversation.messages().back().unwrap();
    assert_eq!(last.role, Role::User);
    assert_eq!(last.content, "tell me about tides");
    assert!(last.id.starts_with("user-"));
    assert!(app.is_loading());
    assert!(app.ui.is_input_empty());
}

#[tokio::test]
async fn submit_while_loading_is_ignored() {
    let (mut app, _rx) = create_app();
    type_text(&mut app, "first");
    assert!(app.submit_input());

    type_text(&mut app, "second");
    assert!(!app.submit_input());
    assert_eq!(app.conversation.messages().len(), 2);
    assert_eq!(app.ui.input_text(), "second");
}

#[tokio::test]
async fn reply_arrives_through_responder_channel() {
    let config = Config {
        response_delay_ms: Some(5),
        ..Default::default()
    };
    let (responder, mut rx) = ResponderService::new();
    let mut app = App::new(init(config), responder);

    type_text(&mut app, "hello");
    assert!(app.submit_input());

    let (text, id) = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("reply timed out")
        .expect("channel closed");
    assert!(app.receive_reply(text, id));
    assert!(!app.is_loading());

    let last = app.conversation.messages().back().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert!(last.id.starts_with("assistant-"));
}

#[tokio::test]
async fn stale_reply_is_dropped() {
    let (mut app, _rx) = create_app();
    type_text(&mut app, "hello");
    app.submit_input();
    let pending = app.conversation.pending_request_id().unwrap();

    assert!(!app.receive_reply("from the past".into(), pending + 10));
    assert!(app.is_loading());
    assert_eq!(app.conversation.messages().len(), 2);
}

#[tokio::test]
async fn clear_chat_cancels_pending_reply() {
    let (mut app, _rx) = create_app();
    type_text(&mut app, "hello");
    app.submit_input();
    let pending = app.conversation.pending_request_id().unwrap();

    app.clear_chat();
    assert!(!app.is_loading());
    let messages = app.conversation.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "Chat cleared. How can I help you today?");

    assert!(!app.receive_reply("late".into(), pending));
    assert_eq!(app.conversation.messages().len(), 1);
}

#[test]
fn drawer_adjusts_selected_value_and_clears_history() {
    let (mut app, _rx) = create_app();
    assert!(!app.adjust_selected_setting(1));

    app.ui.toggle_drawer();
    assert!(app.adjust_selected_setting(1));
    assert_eq!(app.settings.display_value(SettingField::Temperature), "0.8");

    app.ui.select_next_setting();
    app.ui.select_next_setting();
    assert!(app.adjust_selected_setting(-1));
    assert_eq!(app.settings.max_tokens, 900);

    app.ui.select_next_setting();
    assert!(!app.adjust_selected_setting(1));
    assert!(app.activate_selected_setting());
    assert!(!app.ui.is_drawer_open());
    assert_eq!(
        app.conversation.messages()[0].content,
        "Chat cleared. How can I help you today?"
    );
}

#[test]
fn scroll_tracks_transcript_height() {
    let (mut app, _rx) = create_app();
    app.ui.transcript_viewport = TranscriptViewport {
        width: 40,
        height: 2,
    };
    let max = app.max_scroll_offset();
    assert!(max > 0);

    app.scroll_by(-1);
    assert!(!app.ui.auto_scroll);
    assert_eq!(app.ui.effective_scroll(max), max - 1);

    app.scroll_by(app.page_lines());
    assert!(app.ui.auto_scroll);
}

#[test]
fn visualizer_follows_viewport_and_stops_on_shutdown() {
    use ratatui::layout::Rect;

    let (mut app, _rx) = create_app();
    app.visualizer
        .surface_mut()
        .set_viewport(Rect::new(0, 2, 60, 10));
    assert!(app.tick_visualizer());
    assert_eq!(
        app.visualizer.engine().map(|e| e.size()),
        Some(crate::visualizer::SurfaceSize::new(480.0, 160.0))
    );

    app.shutdown();
    assert!(!app.tick_visualizer());
    assert!(!app.visualizer.is_running());
}
