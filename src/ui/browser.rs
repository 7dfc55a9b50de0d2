//! Category tabs and topic list for the main browser view.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::catalogue::Topic;
use crate::ui::app::App;
use crate::ui::form::{render_topic_form, FORM_HEIGHT};
use crate::ui::theme::{keyword_bg, keyword_fg, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};

pub fn render_browser(frame: &mut Frame, area: Rect, app: &App) {
    let form_height = if app.form().is_visible() {
        FORM_HEIGHT.min(area.height)
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(form_height),
        ])
        .split(area);

    render_tabs(frame, chunks[0], app);
    render_topics(frame, chunks[1], app);
    render_topic_form(frame, chunks[2], app.form());
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.catalogue().snapshot();
    let titles: Vec<Line> = state
        .category_names()
        .into_iter()
        .map(|name| Line::from(name.to_string()))
        .collect();

    // A stale selection matches no tab; none is highlighted then.
    let tabs = Tabs::new(titles)
        .select(state.selected_position())
        .style(Style::default().fg(HEADER_TEXT))
        .highlight_style(
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(tabs, area);
}

fn render_topics(frame: &mut Frame, area: Rect, app: &App) {
    let Some(category) = app.catalogue().snapshot().current_view() else {
        // Stale selection: render nothing.
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        " Recommended Topics",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))];

    for (index, topic) in category.topics.iter().enumerate() {
        lines.push(Line::from(""));
        lines.push(topic_name_line(topic, index == app.topic_cursor()));
        lines.push(keyword_line(topic));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn topic_name_line(topic: &Topic, selected: bool) -> Line<'static> {
    let mut style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    if selected {
        style = style.bg(ACTIVE_HIGHLIGHT);
    }
    let marker = if selected { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(topic.name.clone(), style),
    ])
}

fn keyword_line(topic: &Topic) -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];
    for (index, keyword) in topic.keywords.iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} ", keyword),
            Style::default().fg(keyword_fg(index)).bg(keyword_bg(index)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
