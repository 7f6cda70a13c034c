//! Reel scene rendering: the tension bar, catch progress, the message log and
//! the rod/bag panel.

use super::throbber::{spinner_char, waiting_message};
use crate::fishing::{CatchBag, FishingRod, RodPhase};
use crate::minigame::{MinigameOutcome, ReelMinigame};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Maps a reel position to a column in a bar `width` cells wide.
///
/// Position `0.0` is the right edge and `1.0` the left edge.
pub fn position_to_column(position: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let max = f64::from(width - 1);
    ((1.0 - position.clamp(0.0, 1.0)) * max).round() as u16
}

/// Reel position shown by `column` in a bar `width` cells wide.
pub fn column_to_position(column: u16, width: u16) -> f64 {
    if width <= 1 {
        return 0.5;
    }
    1.0 - f64::from(column) / f64::from(width - 1)
}

/// Splits the content area into bar, gauge and log.
pub fn render_reel_content(frame: &mut Frame, area: Rect, game: &ReelMinigame, log: &[String]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Tension bar
            Constraint::Length(3), // Progress gauge
            Constraint::Min(3),    // Log
        ])
        .split(area);

    draw_tension_bar(frame, chunks[0], game);
    draw_progress(frame, chunks[1], game);
    draw_log(frame, chunks[2], log);
}

/// Target marker row above the bar; the cursor sits in the bar itself.
///
/// ```text
/// ┌ Line ──────────────────────────┐
/// │              ▼                 │
/// │░░░░░░░░░─────█─────────░░░░░░░░│
/// └────────────────────────────────┘
/// ```
fn draw_tension_bar(frame: &mut Frame, area: Rect, game: &ReelMinigame) {
    let border_color = if game.is_active() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Line (safe {:.0}%) ", game.config().safe_width() * 100.0));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let config = game.config();
    let width = inner.width;
    let cursor_col = position_to_column(game.current_position(), width);
    let target_col = position_to_column(game.target_position(), width);

    let marker_line = Line::from(
        (0..width)
            .map(|col| {
                if col == target_col {
                    Span::styled("▼", Style::default().fg(Color::Yellow))
                } else {
                    Span::raw(" ")
                }
            })
            .collect::<Vec<_>>(),
    );

    let bar_line = Line::from(
        (0..width)
            .map(|col| {
                if col == cursor_col {
                    return Span::styled(
                        "█",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                let pos = column_to_position(col, width);
                if pos <= config.left_bound || pos >= config.right_bound {
                    Span::styled("░", Style::default().fg(Color::Red))
                } else {
                    Span::styled("─", Style::default().fg(Color::Green))
                }
            })
            .collect::<Vec<_>>(),
    );

    frame.render_widget(Paragraph::new(vec![marker_line, bar_line]), inner);
}

fn draw_progress(frame: &mut Frame, area: Rect, game: &ReelMinigame) {
    let percent = game.progress_percent().clamp(0.0, 100.0);
    let color = match game.last_outcome() {
        Some(MinigameOutcome::Fail) if !game.is_active() => Color::Red,
        _ if percent >= 75.0 => Color::Green,
        _ => Color::Yellow,
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Catch "))
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .label(format!("{:.0}%", percent))
        .ratio(percent / 100.0);
    frame.render_widget(gauge, area);
}

fn draw_log(frame: &mut Frame, area: Rect, log: &[String]) {
    let block = Block::default().borders(Borders::ALL).title(" Log ");
    let visible = block.inner(area).height as usize;
    let start = log.len().saturating_sub(visible);
    let lines: Vec<Line> = log[start..]
        .iter()
        .map(|line| Line::from(Span::raw(line.as_str())))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Rod phase, current difficulty and bag totals.
pub fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    rod: &FishingRod,
    game: &ReelMinigame,
    bag: &CatchBag,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Rod ");

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![phase_line(rod), Line::from("")];

    if game.is_active() {
        let session = game.session();
        lines.push(Line::from(vec![
            Span::styled("Drift:  ", label),
            Span::raw(format!("{:.2}", session.drift_intensity)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Push:   ", label),
            Span::raw(format!("{:.2}", session.push_intensity)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Pushes: ", label),
            Span::raw(session.pushes.to_string()),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Bag",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled("Fish:   ", label),
        Span::raw(bag.len().to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Weight: ", label),
        Span::raw(format!("{:.2} kg", bag.total_weight_g() / 1000.0)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Value:  ", label),
        Span::styled(
            format!("{:.0}", bag.total_value()),
            Style::default().fg(Color::Yellow),
        ),
    ]));
    if let Some(best) = bag.best_catch() {
        lines.push(Line::from(vec![
            Span::styled("Best:   ", label),
            Span::raw(format!("{} {:.0}g", best.name, best.weight_g)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn phase_line(rod: &FishingRod) -> Line<'static> {
    match rod.phase() {
        RodPhase::Idle => Line::from(Span::styled(
            "Line reeled in",
            Style::default().fg(Color::White),
        )),
        RodPhase::Waiting { bite_at, .. } => Line::from(Span::styled(
            format!(
                "{} {}",
                spinner_char(),
                waiting_message((bite_at * 1000.0) as u64)
            ),
            Style::default().fg(Color::Cyan),
        )),
        phase @ RodPhase::Hooked => Line::from(Span::styled(
            phase.name(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        RodPhase::Reeling { catch } => {
            let what = catch
                .as_ref()
                .map_or_else(|| "something".to_string(), |fish| fish.name.clone());
            Line::from(Span::styled(
                format!("Reeling {}", what),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_edges_map_to_bar_edges() {
        assert_eq!(position_to_column(0.0, 41), 40);
        assert_eq!(position_to_column(1.0, 41), 0);
        assert_eq!(position_to_column(0.5, 41), 20);
    }

    #[test]
    fn test_out_of_range_positions_clamp() {
        assert_eq!(position_to_column(-3.0, 10), 9);
        assert_eq!(position_to_column(7.0, 10), 0);
        assert_eq!(position_to_column(0.5, 0), 0);
    }

    #[test]
    fn test_column_round_trip_at_edges() {
        assert_eq!(column_to_position(0, 11), 1.0);
        assert_eq!(column_to_position(10, 11), 0.0);
        assert_eq!(column_to_position(3, 1), 0.5);
    }
}
