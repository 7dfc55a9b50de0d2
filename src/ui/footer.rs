use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn hints_for(focus: Focus) -> &'static str {
    match focus {
        Focus::Browser => {
            " ←/→: Category │ ↑/↓: Topic │ a: Add │ d: Delete │ w: Write │ Ctrl+Q: Quit"
        }
        Focus::Form => " Tab: Field │ Enter: Save │ Esc: Close",
        Focus::Editor => " Ctrl+T: Tone │ Ctrl+G: Generate │ Esc: Close",
    }
}

/// Key hints on the left, version pinned to the right edge.
pub fn render_footer(frame: &mut Frame<'_>, area: Rect, focus: Focus) {
    let hints = hints_for(focus);
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count: the hint strings hold arrows
    // and box-drawing separators.
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    let widget = Paragraph::new(line).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}
