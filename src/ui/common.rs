//! Screen frame shared by every reel view: an outer border, the reel column
//! with a status strip under it, and the rod panel on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Narrowest the reel column may get before the rod panel gives way.
const MIN_REEL_WIDTH: u16 = 20;
/// Bar, gauge and one log line.
const MIN_REEL_HEIGHT: u16 = 8;
/// Status message plus the key hints.
const STATUS_HEIGHT: u16 = 2;

/// Key hint shown under the reel, e.g. `[Space] Use`.
pub type KeyHint<'a> = (&'a str, &'a str);

/// Areas inside the outer border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub content: Rect,
    pub status_bar: Rect,
    pub info_panel: Rect,
}

impl ScreenLayout {
    /// Splits the inside of the border. The rod panel keeps `panel_width`
    /// while the reel column can hold its minimum.
    pub fn split(inner: Rect, panel_width: u16) -> Self {
        let [reel_column, info_panel] = columns(inner, panel_width);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(MIN_REEL_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(reel_column);
        Self {
            content: rows[0],
            status_bar: rows[1],
            info_panel,
        }
    }
}

fn columns(inner: Rect, panel_width: u16) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(MIN_REEL_WIDTH),
            Constraint::Length(panel_width),
        ])
        .split(inner);
    [chunks[0], chunks[1]]
}

/// Clears `area`, draws the titled border and lays out what's inside it.
pub fn render_screen_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
    panel_width: u16,
) -> ScreenLayout {
    frame.render_widget(Clear, area);
    let border = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = border.inner(area);
    frame.render_widget(border, area);
    ScreenLayout::split(inner, panel_width)
}

/// `[key] action` pairs separated by two spaces.
pub fn key_hints_line<'a>(hints: &[KeyHint<'a>]) -> Line<'a> {
    let key_style = Style::default().fg(Color::White);
    let action_style = Style::default().fg(Color::DarkGray);
    let spans = hints
        .iter()
        .enumerate()
        .flat_map(|(i, &(key, action))| {
            let gap = (i > 0).then(|| Span::raw("  "));
            gap.into_iter().chain([
                Span::styled(key, key_style),
                Span::styled(format!(" {}", action), action_style),
            ])
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Centered status on the first row, key hints on the second when it fits.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    (status, color): (&str, Color),
    hints: &[KeyHint],
) {
    if area.height == 0 {
        return;
    }
    let row = |offset: u16| Rect {
        y: area.y + offset,
        height: 1,
        ..area
    };

    frame.render_widget(
        Paragraph::new(status)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        row(0),
    );
    if area.height > 1 && !hints.is_empty() {
        frame.render_widget(
            Paragraph::new(key_hints_line(hints)).alignment(Alignment::Center),
            row(1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_panel_width_and_status_rows() {
        let layout = ScreenLayout::split(Rect::new(1, 1, 78, 22), 26);
        assert_eq!(layout.info_panel.width, 26);
        assert!(layout.content.width >= MIN_REEL_WIDTH);
        assert!(layout.content.right() <= layout.info_panel.x);
        assert_eq!(layout.status_bar.height, STATUS_HEIGHT);
        assert!(layout.content.height >= MIN_REEL_HEIGHT);
        assert_eq!(layout.status_bar.y, layout.content.y + layout.content.height);
    }

    #[test]
    fn test_narrow_screen_favours_reel_column() {
        let layout = ScreenLayout::split(Rect::new(0, 0, 30, 12), 26);
        assert!(layout.content.width >= MIN_REEL_WIDTH);
        assert!(layout.info_panel.width < 26);
    }

    #[test]
    fn test_key_hints_are_spaced() {
        let line = key_hints_line(&[("[Space]", "Use"), ("[q]", "Quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[Space] Use  [q] Quit");
        assert!(key_hints_line(&[]).spans.is_empty());
    }
}
