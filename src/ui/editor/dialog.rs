//! Dialog rendering for the editor overlay.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER};

use super::state::{EditorState, Tone};

/// Width of the editor dialog.
const DIALOG_WIDTH: u16 = 62;

/// Rows of the text surface when it is visible.
const SURFACE_ROWS: u16 = 8;

/// Height of the editor dialog (varies by state).
fn dialog_height(state: &EditorState) -> u16 {
    match state {
        EditorState::Closed => 0,
        EditorState::Open { tone: None, .. } => 6,
        EditorState::Open { tone: Some(_), .. } => 7 + SURFACE_ROWS,
    }
}

/// Render the editor dialog overlay on top of the browser.
pub fn render_editor_dialog(frame: &mut Frame, state: &EditorState) {
    if !state.is_open() {
        return;
    }

    let height = dialog_height(state);
    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, height);

    // Clear the area behind the dialog
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Blog Editor ", Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(""), tone_line(state.tone()), Line::from("")];

    if let EditorState::Open {
        tone: Some(_),
        draft,
    } = state
    {
        let (cursor_line, cursor_col) = draft.cursor();
        for (row, text) in draft.lines().iter().take(SURFACE_ROWS as usize).enumerate() {
            if row == cursor_line {
                lines.push(line_with_cursor(text, cursor_col));
            } else {
                lines.push(Line::from(Span::styled(
                    format!("  {}", text),
                    Style::default().fg(HEADER_TEXT),
                )));
            }
        }
        for _ in draft.lines().len()..SURFACE_ROWS as usize {
            lines.push(Line::from(""));
        }
    }

    lines.push(hint_line(state.can_generate()));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn tone_line(current: Option<Tone>) -> Line<'static> {
    let mut spans = vec![Span::styled("  Tone: ", Style::default().fg(HEADER_TEXT))];
    let none_style = if current.is_none() {
        selected_style()
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    spans.push(Span::styled(" None ", none_style));
    for tone in Tone::ALL {
        spans.push(Span::raw(" "));
        let style = if current == Some(tone) {
            selected_style()
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", tone.label()), style));
    }
    Line::from(spans)
}

fn line_with_cursor(text: &str, cursor_col: usize) -> Line<'static> {
    let before: String = text.chars().take(cursor_col).collect();
    let at: String = text.chars().nth(cursor_col).map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = text.chars().skip(cursor_col + 1).collect();
    Line::from(vec![
        Span::styled(format!("  {}", before), Style::default().fg(HEADER_TEXT)),
        Span::styled(at, Style::default().fg(ACTIVE_HIGHLIGHT).bg(HEADER_TEXT)),
        Span::styled(after, Style::default().fg(HEADER_TEXT)),
    ])
}

fn hint_line(can_generate: bool) -> Line<'static> {
    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let generate_style = if can_generate {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        dim
    };
    Line::from(vec![
        Span::styled("  Ctrl+T: Tone  ", dim),
        Span::styled("Ctrl+G: Generate", generate_style),
        Span::styled("  Esc: Close", dim),
    ])
}

fn selected_style() -> Style {
    Style::default()
        .fg(HEADER_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}
