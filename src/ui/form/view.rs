//! Rendering for the inline add-topic form.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};

use super::state::{FormField, TopicFormState};

/// Height the form occupies when visible, borders included.
pub const FORM_HEIGHT: u16 = 5;

pub fn render_topic_form(frame: &mut Frame, area: Rect, state: &TopicFormState) {
    let TopicFormState::Visible {
        name,
        keywords,
        focused,
    } = state
    else {
        return;
    };

    let block = Block::default()
        .title(Span::styled(" Add Topic ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        field_line("Topic Name", name, *focused == FormField::Name),
        field_line("Keywords", keywords, *focused == FormField::Keywords),
        Line::from(Span::styled(
            " Tab: Switch field  Enter: Save  Esc: Close",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let mut spans = vec![
        Span::styled(format!(" {:<11}", label), label_style),
        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
    ];
    if focused {
        // Block cursor at the end of the focused field.
        spans.push(Span::styled(" ", Style::default().bg(HEADER_TEXT)));
    }
    Line::from(spans)
}
