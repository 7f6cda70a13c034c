//! Terminal rendering for the reel host.

pub mod common;
pub mod reel_scene;
mod throbber;

use crate::fishing::{Angler, RodPhase};
use crate::minigame::MinigameOutcome;
use common::{render_screen_frame, render_status_bar};
use rand::Rng;
use ratatui::{style::Color, Frame};
use reel_scene::{render_info_panel, render_reel_content};

/// Draws the whole screen for one frame.
pub fn draw_ui<R: Rng>(frame: &mut Frame, angler: &Angler<R>, log: &[String]) {
    let area = frame.size();
    let layout = render_screen_frame(frame, area, " Reel ", Color::Cyan, 26);

    render_reel_content(frame, layout.content, angler.minigame(), log);
    render_info_panel(
        frame,
        layout.info_panel,
        angler.rod(),
        angler.minigame(),
        angler.bag(),
    );

    render_status_bar(
        frame,
        layout.status_bar,
        status_message(angler),
        &[("[Space]", "Use"), ("[q/Esc]", "Quit")],
    );
}

/// One-line hint for what the use key does right now.
pub fn status_message<R: Rng>(angler: &Angler<R>) -> (&'static str, Color) {
    if angler.minigame().is_active() {
        return ("Keep the line out of the red!", Color::Yellow);
    }
    match angler.rod().phase() {
        RodPhase::Waiting { .. } => ("Waiting... Space reels in", Color::Cyan),
        RodPhase::Hooked => ("Bite! Press Space to reel", Color::Yellow),
        RodPhase::Reeling { .. } => ("Reeling...", Color::Yellow),
        RodPhase::Idle => match angler.minigame().last_outcome() {
            Some(MinigameOutcome::Success) => ("Landed! Space to cast again", Color::Green),
            Some(MinigameOutcome::Fail) => ("It got away. Space to cast again", Color::Red),
            None => ("Press Space to cast", Color::White),
        },
    }
}
