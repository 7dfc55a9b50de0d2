use ratatui::style::Color;

/// Brand orange, used for titles, the tab underline and action hints.
pub const ACCENT: Color = Color::Rgb(0xff, 0x91, 0x00);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Keyword chip backgrounds, cycled by keyword position.
const KEYWORD_BG: [Color; 6] = [
    Color::Rgb(0xff, 0xcc, 0xcc),
    Color::Rgb(0xcc, 0xff, 0xcc),
    Color::Rgb(0xcc, 0xcc, 0xff),
    Color::Rgb(0xff, 0xff, 0xcc),
    Color::Rgb(0xcc, 0xff, 0xff),
    Color::Rgb(0xff, 0xcc, 0xff),
];

/// Keyword chip text colors, cycled in step with the backgrounds.
const KEYWORD_FG: [Color; 6] = [
    Color::Rgb(0xff, 0x00, 0x00),
    Color::Rgb(0x00, 0xff, 0x00),
    Color::Rgb(0xff, 0x00, 0xff),
    Color::Rgb(0x00, 0xff, 0xff),
    Color::Rgb(0x00, 0x00, 0xff),
    Color::Rgb(0xff, 0xff, 0x00),
];

/// Deterministic chip background for a keyword index. Pure modular
/// lookup; repeat lookups are O(1) with no cache to invalidate.
pub fn keyword_bg(index: usize) -> Color {
    KEYWORD_BG[index % KEYWORD_BG.len()]
}

/// Deterministic chip text color for a keyword index.
pub fn keyword_fg(index: usize) -> Color {
    KEYWORD_FG[index % KEYWORD_FG.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_colors_cycle_with_period_six() {
        for i in 0..6 {
            assert_eq!(keyword_bg(i), keyword_bg(i + 6));
            assert_eq!(keyword_fg(i), keyword_fg(i + 6));
        }
    }

    #[test]
    fn keyword_colors_are_pure() {
        assert_eq!(keyword_bg(3), keyword_bg(3));
        assert_eq!(keyword_fg(0), KEYWORD_FG[0]);
    }
}
