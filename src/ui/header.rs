use crate::catalogue::CatalogueState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Title bar: app name, the active category and its topic count.
pub fn render_header(frame: &mut Frame<'_>, area: Rect, state: &CatalogueState) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);
    let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    let (active, count) = match state.current_view() {
        Some(category) => (category.name.clone(), category.topics.len()),
        None => ("-".to_string(), 0),
    };

    let line = Line::from(vec![
        Span::styled("  Categories", title_style),
        Span::styled("  │  ", separator_style),
        Span::styled(active, text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(format!("{} topics", count), text_style),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}
