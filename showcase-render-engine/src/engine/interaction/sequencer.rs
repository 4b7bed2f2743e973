use bevy::prelude::*;
use std::time::Duration;

use constants::animation::{
    CLICK_COOLDOWN, CLOSE_DURATION, MAX_OPEN_ANGLE, NAV_PULSE_DELAY, NAV_REVEAL_DELAY,
    OPEN_DURATION,
};

/// Discrete mode of the hinge tween driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HingePhase {
    #[default]
    Idle,
    Opening,
    Closing,
}

/// Result of advancing the sequencer by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No tween in flight.
    Idle,
    /// Tween advanced but has not reached its endpoint yet.
    Advancing,
    /// The opening tween just reached the fully open angle.
    OpenComplete,
    /// The closing tween just reached the closed angle.
    CloseComplete,
}

/// Ease-out cubic, decelerating toward the endpoint.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Owns the hinge angle, the open/closed mode flag, the debounced click gate
/// and the deferred UI deadlines. All methods take an explicit clock so the
/// driver can run off the frame time and tests can run off a synthetic one.
///
/// Exactly one tween may be in flight; open and close requests made while a
/// tween runs are dropped, never queued.
#[derive(Resource)]
pub struct HingeSequencer {
    phase: HingePhase,
    is_open: bool,
    model_ready: bool,
    angle: f32,
    start_angle: f32,
    target_angle: f32,
    start_time: Duration,
    duration: Duration,
    gate_closed_until: Option<Duration>,
    pending_reveal_at: Option<Duration>,
    pending_pulse_at: Option<Duration>,
}

impl Default for HingeSequencer {
    fn default() -> Self {
        Self {
            phase: HingePhase::Idle,
            is_open: false,
            model_ready: false,
            angle: 0.0,
            start_angle: 0.0,
            target_angle: 0.0,
            start_time: Duration::ZERO,
            duration: OPEN_DURATION,
            gate_closed_until: None,
            pending_reveal_at: None,
            pending_pulse_at: None,
        }
    }
}

impl HingeSequencer {
    pub fn phase(&self) -> HingePhase {
        self.phase
    }

    /// Current lid rotation, always within [0, MAX_OPEN_ANGLE].
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn model_ready(&self) -> bool {
        self.model_ready
    }

    /// Flipped once by the loading flow when the scene is fully bound.
    pub fn set_model_ready(&mut self, ready: bool) {
        self.model_ready = ready;
    }

    /// Whether the click gate accepts a new open trigger at `now`.
    pub fn gate_open(&self, now: Duration) -> bool {
        match self.gate_closed_until {
            Some(deadline) => now >= deadline,
            None => true,
        }
    }

    /// Begin the opening tween. Returns false (and changes nothing) when the
    /// model is not ready, the device is already open, a tween is in flight
    /// or the click gate has not re-armed yet.
    pub fn open(&mut self, now: Duration) -> bool {
        if !self.model_ready || self.is_open || self.phase != HingePhase::Idle {
            return false;
        }
        if !self.gate_open(now) {
            return false;
        }

        self.phase = HingePhase::Opening;
        self.is_open = true;
        self.start_angle = self.angle;
        self.target_angle = MAX_OPEN_ANGLE;
        self.start_time = now;
        self.duration = OPEN_DURATION;
        // Gate re-arms on its own schedule, regardless of tween completion.
        self.gate_closed_until = Some(now + CLICK_COOLDOWN);
        self.pending_reveal_at = Some(now + NAV_REVEAL_DELAY);
        self.pending_pulse_at = Some(now + NAV_PULSE_DELAY);
        true
    }

    /// Begin the closing tween. Returns false when the model is not ready,
    /// the device is not open or a tween is in flight. Pending reveal and
    /// pulse deadlines are cancelled so a superseded open cannot surface
    /// stale UI.
    pub fn close(&mut self, now: Duration) -> bool {
        if !self.model_ready || !self.is_open || self.phase != HingePhase::Idle {
            return false;
        }

        self.phase = HingePhase::Closing;
        self.is_open = false;
        self.start_angle = self.angle;
        self.target_angle = 0.0;
        self.start_time = now;
        self.duration = CLOSE_DURATION;
        self.cancel_deferred();
        true
    }

    /// Advance the active tween. Called once per render frame; a completed
    /// tween snaps the angle to its exact endpoint before returning to Idle.
    pub fn step(&mut self, now: Duration) -> StepOutcome {
        if self.phase == HingePhase::Idle {
            return StepOutcome::Idle;
        }

        let elapsed = now.saturating_sub(self.start_time).as_secs_f32();
        let progress = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = ease_out_cubic(progress);
        self.angle = self.start_angle + (self.target_angle - self.start_angle) * eased;

        if progress < 1.0 {
            return StepOutcome::Advancing;
        }

        self.angle = self.target_angle;
        let finished = self.phase;
        self.phase = HingePhase::Idle;
        match finished {
            HingePhase::Opening => StepOutcome::OpenComplete,
            HingePhase::Closing => StepOutcome::CloseComplete,
            HingePhase::Idle => StepOutcome::Idle,
        }
    }

    /// True exactly once, when the nav reveal deadline has passed.
    pub fn take_due_reveal(&mut self, now: Duration) -> bool {
        match self.pending_reveal_at {
            Some(deadline) if now >= deadline => {
                self.pending_reveal_at = None;
                true
            }
            _ => false,
        }
    }

    /// True exactly once, when the nav pulse deadline has passed.
    pub fn take_due_pulse(&mut self, now: Duration) -> bool {
        match self.pending_pulse_at {
            Some(deadline) if now >= deadline => {
                self.pending_pulse_at = None;
                true
            }
            _ => false,
        }
    }

    fn cancel_deferred(&mut self) {
        self.pending_reveal_at = None;
        self.pending_pulse_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn ready() -> HingeSequencer {
        let mut seq = HingeSequencer::default();
        seq.set_model_ready(true);
        seq
    }

    #[test]
    fn test_easing_endpoints_and_monotonicity() {
        assert!(ease_out_cubic(0.0).abs() < 1e-6);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 1e-6);

        let mut prev = 0.0;
        for i in 1..=100 {
            let eased = ease_out_cubic(i as f32 / 100.0);
            assert!(eased > prev);
            prev = eased;
        }
    }

    #[test]
    fn test_open_midpoint_value() {
        // 1 - (1 - 0.5)^3 = 0.875 at half the open duration.
        let mut seq = ready();
        assert!(seq.open(ms(0)));
        assert_eq!(seq.step(ms(600)), StepOutcome::Advancing);
        assert!((seq.angle() - 0.875 * MAX_OPEN_ANGLE).abs() < 1e-4);
    }

    #[test]
    fn test_open_completes_at_exact_angle() {
        let mut seq = ready();
        assert!(seq.open(ms(0)));
        assert_eq!(seq.step(ms(1200)), StepOutcome::OpenComplete);
        assert_eq!(seq.angle(), MAX_OPEN_ANGLE);
        assert_eq!(seq.phase(), HingePhase::Idle);
        assert!(seq.is_open());
    }

    #[test]
    fn test_close_completes_at_exact_zero() {
        let mut seq = ready();
        seq.open(ms(0));
        seq.step(ms(1200));
        assert!(seq.close(ms(1600)));
        assert_eq!(seq.step(ms(2600)), StepOutcome::CloseComplete);
        assert_eq!(seq.angle(), 0.0);
        assert!(!seq.is_open());
    }

    #[test]
    fn test_second_trigger_within_cooldown_is_dropped() {
        let mut seq = ready();
        assert!(seq.open(ms(0)));
        seq.step(ms(1200));
        // Tween finished, device open, gate still closed until 1500ms.
        assert!(!seq.open(ms(1300)));
        assert_eq!(seq.phase(), HingePhase::Idle);
    }

    #[test]
    fn test_close_during_opening_is_rejected() {
        let mut seq = ready();
        seq.open(ms(0));
        seq.step(ms(300));
        assert_eq!(seq.phase(), HingePhase::Opening);
        assert!(!seq.close(ms(300)));
        assert_eq!(seq.phase(), HingePhase::Opening);
    }

    #[test]
    fn test_open_during_closing_is_rejected() {
        let mut seq = ready();
        seq.open(ms(0));
        seq.step(ms(1200));
        seq.close(ms(1600));
        assert!(!seq.open(ms(1700)));
        assert_eq!(seq.phase(), HingePhase::Closing);
    }

    #[test]
    fn test_open_before_model_ready_is_noop() {
        let mut seq = HingeSequencer::default();
        assert!(!seq.open(ms(0)));
        assert_eq!(seq.phase(), HingePhase::Idle);
        assert_eq!(seq.angle(), 0.0);
    }

    #[test]
    fn test_deferred_deadlines_fire_once() {
        let mut seq = ready();
        seq.open(ms(0));
        assert!(!seq.take_due_reveal(ms(700)));
        assert!(seq.take_due_reveal(ms(850)));
        assert!(!seq.take_due_reveal(ms(900)));
        assert!(seq.take_due_pulse(ms(950)));
        assert!(!seq.take_due_pulse(ms(1000)));
    }

    #[test]
    fn test_close_cancels_pending_deadlines() {
        let mut seq = ready();
        seq.open(ms(0));
        seq.step(ms(1200));
        seq.close(ms(1250));
        // Neither deadline was consumed before the close; both must be gone.
        assert!(!seq.take_due_reveal(ms(5000)));
        assert!(!seq.take_due_pulse(ms(5000)));
    }

    #[test]
    fn test_full_cycle_reopens() {
        let mut seq = ready();
        assert!(seq.open(ms(0)));
        seq.step(ms(1200));
        assert!(seq.close(ms(1600)));
        seq.step(ms(2600));
        // Gate re-armed at 1500ms; a fresh open is accepted.
        assert!(seq.open(ms(3000)));
        assert_eq!(seq.phase(), HingePhase::Opening);
    }

    #[test]
    fn test_angle_stays_in_range_through_tween() {
        let mut seq = ready();
        seq.open(ms(0));
        for t in (0..=1300).step_by(50) {
            seq.step(ms(t));
            assert!(seq.angle() >= 0.0 && seq.angle() <= MAX_OPEN_ANGLE);
        }
    }
}
