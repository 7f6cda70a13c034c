//! Reel minigame controller: activation, per-frame stepping, pushes and the
//! terminal outcome.

use super::config::MinigameConfig;
use super::smoothing::smooth_damp;
use super::types::{MinigameEvent, MinigameListener, MinigameOutcome, MinigameSession};
use crate::constants::{DEFAULT_DRIFT_INTENSITY, DEFAULT_PUSH_INTENSITY};
use crate::error::ConfigError;

/// Owns one [`MinigameSession`] and steps it on demand.
///
/// The host calls [`tick`](Self::tick) once per frame with an explicit `dt`
/// and [`push`](Self::push) on every click; both are silent no-ops outside a
/// live session, so the host can drive them unconditionally. Notifications
/// are queued and handed out by [`take_events`](Self::take_events) or
/// [`dispatch_events`](Self::dispatch_events).
#[derive(Debug, Clone)]
pub struct ReelMinigame {
    config: MinigameConfig,
    session: MinigameSession,
    /// Difficulty used by [`start`](Self::start).
    drift_intensity: f64,
    push_intensity: f64,
    events: Vec<MinigameEvent>,
    last_outcome: Option<MinigameOutcome>,
}

impl ReelMinigame {
    /// Build a controller, failing fast on malformed tuning.
    pub fn new(config: MinigameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            session: MinigameSession::default(),
            drift_intensity: DEFAULT_DRIFT_INTENSITY,
            push_intensity: DEFAULT_PUSH_INTENSITY,
            events: Vec::new(),
            last_outcome: None,
        })
    }

    pub fn config(&self) -> &MinigameConfig {
        &self.config
    }

    pub fn session(&self) -> &MinigameSession {
        &self.session
    }

    /// Set the difficulty the next [`start`](Self::start) will use.
    pub fn configure(&mut self, drift_intensity: f64, push_intensity: f64) {
        self.drift_intensity = drift_intensity;
        self.push_intensity = push_intensity;
    }

    /// Activate with the difficulty from [`configure`](Self::configure).
    pub fn start(&mut self) {
        self.activate(self.drift_intensity, self.push_intensity);
    }

    /// Start a new session, discarding any session in progress.
    pub fn activate(&mut self, drift_intensity: f64, push_intensity: f64) {
        self.session = MinigameSession::started(drift_intensity, push_intensity);
        self.last_outcome = None;
        self.events.push(MinigameEvent::Started);
        log::info!(
            "Reel started (drift {:.2}, push {:.2})",
            drift_intensity,
            push_intensity
        );
    }

    /// Advance the session by `dt` seconds.
    ///
    /// Returns the outcome if this step ended the session. The boundary is
    /// checked before progress, so a step that both breaches a bound and
    /// completes progress is a failure.
    pub fn tick(&mut self, dt: f64) -> Option<MinigameOutcome> {
        if !self.session.active || !dt.is_finite() || dt < 0.0 {
            return None;
        }

        let config = &self.config;
        let session = &mut self.session;
        session.elapsed += dt;

        session.target_position = (session.target_position
            + dt * session.drift_intensity * config.drift_scale)
            .clamp(0.0, 1.0);

        session.current_position = smooth_damp(
            session.current_position,
            session.target_position,
            &mut session.velocity,
            config.smooth_time,
            dt,
        )
        .clamp(0.0, 1.0);

        if session.current_position <= config.left_bound
            || session.current_position >= config.right_bound
        {
            self.finish(MinigameOutcome::Fail);
            return Some(MinigameOutcome::Fail);
        }

        session.progress =
            (session.progress + dt * config.progress_per_second).min(config.max_progress);
        if session.progress >= config.max_progress {
            self.finish(MinigameOutcome::Success);
            return Some(MinigameOutcome::Success);
        }

        None
    }

    /// Apply one player push. Returns false when no session is live.
    ///
    /// Every call counts in full; pushes between two ticks are not merged.
    pub fn push(&mut self) -> bool {
        if !self.session.active {
            return false;
        }

        let raw = self.session.push_intensity * self.config.push_scale;
        let displacement = self.config.response_curve.evaluate(raw);
        self.session.target_position =
            (self.session.target_position - displacement).clamp(0.0, 1.0);
        self.session.progress = (self.session.progress + self.config.progress_per_click)
            .min(self.config.max_progress);
        self.session.pushes += 1;

        log::debug!(
            "Reel push: target {:.3}, progress {:.1}",
            self.session.target_position,
            self.session.progress
        );
        true
    }

    /// Tear down a live session without an outcome. Returns whether one was
    /// live.
    pub fn cancel(&mut self) -> bool {
        if !self.session.active {
            return false;
        }
        self.session.active = false;
        log::info!("Reel cancelled");
        true
    }

    fn finish(&mut self, outcome: MinigameOutcome) {
        self.session.active = false;
        self.last_outcome = Some(outcome);
        self.events.push(outcome.into());
        match outcome {
            MinigameOutcome::Success => log::info!("Fishing success! Fish caught!"),
            MinigameOutcome::Fail => log::info!("Fishing failed! Fish escaped!"),
        }
    }

    /// Progress toward success as a percentage of `max_progress`.
    pub fn progress_percent(&self) -> f64 {
        self.session.progress / self.config.max_progress * 100.0
    }

    pub fn current_position(&self) -> f64 {
        self.session.current_position
    }

    pub fn target_position(&self) -> f64 {
        self.session.target_position
    }

    pub fn progress(&self) -> f64 {
        self.session.progress
    }

    pub fn is_active(&self) -> bool {
        self.session.active
    }

    /// Outcome of the most recent session, if it has ended.
    pub fn last_outcome(&self) -> Option<MinigameOutcome> {
        self.last_outcome
    }

    /// Drain queued notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<MinigameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain queued notifications into `listener`. Returns how many were
    /// delivered.
    pub fn dispatch_events<L: MinigameListener + ?Sized>(&mut self, listener: &mut L) -> usize {
        let events = self.take_events();
        for event in &events {
            match event {
                MinigameEvent::Started => listener.on_start(),
                MinigameEvent::Succeeded => listener.on_success(),
                MinigameEvent::Failed => listener.on_fail(),
            }
        }
        events.len()
    }
}
