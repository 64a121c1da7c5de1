use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::app::{App, TranscriptViewport};
use crate::core::constants::INPUT_HINT;
use crate::core::settings::SettingField;
use crate::ui::layout::ChatLayout;
use crate::ui::network_canvas::NetworkCanvas;
use crate::ui::theme::Theme;
use crate::utils::scroll::ScrollCalculator;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;
const INPUT_TITLE: &str = "Message (Enter to send, Alt+Enter for newline)";
const KEY_HELP: &str = "Ctrl+S settings • Ctrl+T theme • Ctrl+L clear • Ctrl+C quit";
const DRAWER_WIDTH: u16 = 44;
const SLIDER_WIDTH: usize = 12;

/// Syncs layout-derived sizes into `app` and draws one frame.
pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let layout = ChatLayout::compute(area, app.pane_height(), app.ui.textarea.lines().len());
    app.visualizer
        .surface_mut()
        .set_viewport(layout.visualizer_canvas);
    app.ui.transcript_viewport = TranscriptViewport {
        width: layout.transcript_text_width(),
        height: layout.transcript.height,
    };

    let theme = &app.ui.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        area,
    );

    render_header(f, theme, layout.header);
    render_visualizer(f, app, &layout);
    render_transcript(f, app, layout.transcript);
    render_input(f, app, layout.input);
    render_hint(f, app, layout.hint);

    if app.ui.is_drawer_open() {
        render_settings_drawer(f, app, area);
    }
}

fn render_header(f: &mut Frame, theme: &Theme, area: Rect) {
    let title = Line::from(vec![
        Span::styled("PulseChat", theme.title_style),
        Span::styled(format!(" v{}", env!("CARGO_PKG_VERSION")), theme.badge_style),
    ]);
    f.render_widget(Paragraph::new(title), area);

    let indicator = if theme.is_light() {
        "☀ Light"
    } else {
        "☾ Dark"
    };
    f.render_widget(
        Paragraph::new(Span::styled(indicator, theme.meta_style)).alignment(Alignment::Right),
        area,
    );
}

fn render_visualizer(f: &mut Frame, app: &App, layout: &ChatLayout) {
    if layout.visualizer.height == 0 {
        return;
    }
    let theme = &app.ui.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.pane_border_style);
    f.render_widget(block, layout.visualizer);

    let surface = app.visualizer.surface();
    let canvas = NetworkCanvas::new(
        surface.display_list(),
        theme.background_color,
        app.ui.color_depth,
    );
    f.render_widget(canvas, surface.viewport());
}

fn spinner_frame(app: &App) -> &'static str {
    let elapsed = app.ui.activity_started.elapsed().as_millis();
    SPINNER_FRAMES[(elapsed / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len()]
}

fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let mut lines = ScrollCalculator::build_display_lines(
        app.conversation.messages(),
        theme,
        app.assistant_name(),
        app.ui.transcript_viewport.width,
    );
    if app.is_loading() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(app)),
                theme.streaming_indicator_style,
            ),
            Span::styled(
                format!("{} is thinking…", app.assistant_name()),
                theme.meta_style.add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    let max_offset = ScrollCalculator::calculate_max_scroll_offset(lines.len(), area.height);
    let scroll = app.ui.effective_scroll(max_offset);
    let inner = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn render_input(f: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.ui.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.input_border_style)
        .title(Span::styled(INPUT_TITLE, theme.input_title_style));
    app.ui.textarea.set_block(block);
    f.render_widget(&app.ui.textarea, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let hint = if app.ui.is_input_empty() {
        Span::styled(INPUT_HINT, theme.hint_style)
    } else {
        Span::styled(KEY_HELP, theme.meta_style)
    };
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), area);
}

fn slider(fraction: f64) -> String {
    let filled = (fraction * SLIDER_WIDTH as f64).round() as usize;
    let filled = filled.min(SLIDER_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(SLIDER_WIDTH - filled))
}

fn drawer_rows(app: &App) -> Vec<Line<'static>> {
    let theme = &app.ui.theme;
    let selected = app.ui.selected_setting();
    let mut rows = Vec::new();

    for field in SettingField::ALL {
        let is_selected = selected == Some(field);
        let marker = if is_selected { "▸ " } else { "  " };
        let label_style = if is_selected {
            theme.drawer_selected_style
        } else {
            theme.assistant_text_style
        };

        let mut spans = vec![
            Span::styled(marker, theme.drawer_selected_style),
            Span::styled(format!("{:<12}", field.label()), label_style),
        ];
        if let Some(fraction) = app.settings.fraction(field) {
            spans.push(Span::styled(slider(fraction), theme.drawer_value_style));
            spans.push(Span::styled(
                format!(" {}", app.settings.display_value(field)),
                theme.drawer_value_style,
            ));
        }
        rows.push(Line::from(spans));
        rows.push(Line::default());
    }

    rows.push(Line::from(Span::styled(
        "↑/↓ select • ←/→ adjust • Enter run • Esc close",
        theme.meta_style,
    )));
    rows
}

fn drawer_area(area: Rect, rows: u16) -> Rect {
    let width = DRAWER_WIDTH.min(area.width);
    let height = (rows + 2).min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width),
        area.y + 1u16.min(area.height.saturating_sub(height)),
        width,
        height,
    )
}

fn render_settings_drawer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let rows = drawer_rows(app);
    let drawer = drawer_area(area, rows.len() as u16);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.drawer_border_style)
        .title(Span::styled("Settings", theme.title_style))
        .style(Style::default().bg(theme.background_color));

    f.render_widget(Clear, drawer);
    f.render_widget(Paragraph::new(rows).block(block), drawer);
}
