use crate::ui::app::App;
use crate::ui::browser::render_browser;
use crate::ui::editor::render_editor_dialog;
use crate::ui::footer::render_footer;
use crate::ui::header::render_header;
use crate::ui::layout::layout_regions;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    render_header(frame, header, app.catalogue().snapshot());
    render_browser(frame, body, app);
    render_footer(frame, footer, app.focus());

    // Modal overlay last so it sits on top of everything else.
    render_editor_dialog(frame, app.editor());
}
