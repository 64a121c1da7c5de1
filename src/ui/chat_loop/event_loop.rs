//! Event polling, dispatching, and UI rendering loop.
//!
//! Terminal input arrives over a channel from a reader task, replies arrive
//! from the [`ResponderService`], and the visualizer is ticked once per
//! configured frame. Redraws are requested by any of those and throttled to
//! the display frame rate.

use std::{
    error::Error,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::info;

use crate::core::app::{App, AppInitConfig};
use crate::core::constants::MAX_FPS;
use crate::core::responder::ResponderService;
use crate::ui::renderer::ui;

use super::keybindings::{handle_key, KeyBindings, KeyLoopAction};
use super::lifecycle::{restore_terminal, setup_terminal, ChatTerminal};

const IDLE_SLEEP: Duration = Duration::from_millis(16);

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

fn try_draw_frame(
    terminal: &mut ChatTerminal,
    app: &mut App,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> std::io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    terminal.draw(|f| ui(f, app))?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct EventProcessingOutcome {
    events_processed: bool,
    request_redraw: bool,
    exit_requested: bool,
}

fn handle_paste(app: &mut App, text: &str) {
    if app.ui.is_drawer_open() {
        return;
    }
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    app.ui.textarea.insert_str(normalized);
}

fn process_ui_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    bindings: &KeyBindings,
) -> EventProcessingOutcome {
    let mut outcome = EventProcessingOutcome::default();

    while let Ok(ev) = event_rx.try_recv() {
        outcome.events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if handle_key(app, bindings, &key) == KeyLoopAction::Break {
                    outcome.exit_requested = true;
                    break;
                }
            }
            UiEvent::Crossterm(Event::Paste(text)) => handle_paste(app, &text),
            UiEvent::Crossterm(_) => {}
        }
    }

    outcome.request_redraw = outcome.events_processed;
    outcome
}

/// Hands finished replies to the app. Returns true if any arrived.
fn process_replies(app: &mut App, reply_rx: &mut mpsc::UnboundedReceiver<(String, u64)>) -> bool {
    let mut received_any = false;
    while let Ok((text, request_id)) = reply_rx.try_recv() {
        received_any = true;
        app.receive_reply(text, request_id);
    }
    received_any
}

pub async fn run_chat(init: AppInitConfig) -> Result<(), Box<dyn Error>> {
    let (responder, mut reply_rx) = ResponderService::new();
    let mut app = App::new(init, responder);

    let mut terminal = setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);
    let bindings = KeyBindings::default();

    let redraw_interval = Duration::from_millis(1000 / MAX_FPS as u64);
    let visualizer_interval = app.frame_duration();
    let mut last_draw = Instant::now() - redraw_interval;
    let mut last_visualizer_tick = Instant::now() - visualizer_interval;
    let mut last_indicator_frame = Instant::now() - redraw_interval;
    let mut request_redraw = true;

    info!("chat loop started");

    let result: Result<(), Box<dyn Error>> = loop {
        if app.ui.exit_requested {
            break Ok(());
        }

        let now = Instant::now();
        if app.visualizer.is_running()
            && now.duration_since(last_visualizer_tick) >= visualizer_interval
        {
            if app.tick_visualizer() {
                request_redraw = true;
            }
            last_visualizer_tick = now;
        }

        if app.is_loading() && now.duration_since(last_indicator_frame) >= redraw_interval {
            request_redraw = true;
            last_indicator_frame = now;
        }

        if let Err(err) = try_draw_frame(
            &mut terminal,
            &mut app,
            &mut request_redraw,
            &mut last_draw,
            redraw_interval,
        ) {
            break Err(err.into());
        }

        let event_outcome = process_ui_events(&mut app, &mut event_rx, &bindings);
        if event_outcome.exit_requested {
            break Ok(());
        }
        if event_outcome.request_redraw {
            request_redraw = true;
        }

        let received_any = process_replies(&mut app, &mut reply_rx);
        if received_any {
            request_redraw = true;
        }

        if !event_outcome.events_processed && !received_any {
            let wait = if request_redraw {
                redraw_interval.saturating_sub(last_draw.elapsed())
            } else {
                IDLE_SLEEP
            };
            tokio::time::sleep(wait.max(Duration::from_millis(1))).await;
        }
    };

    app.shutdown();
    event_reader_handle.abort();
    restore_terminal(&mut terminal)?;
    info!("chat loop finished");

    result
}
