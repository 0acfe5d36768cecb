//! Resume countdown
//!
//! After the pause overlay hands control back, the actor stays frozen while
//! "Fly in: N" counts down once per interval. The final step resumes
//! physics, cancels the repeating timer and lifts the pause.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};
use super::timer::{TimerEvent, TimerHandle};

/// A running countdown and the timer driving it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    pub remaining: u32,
    pub timer: TimerHandle,
}

pub fn countdown_text(remaining: u32) -> String {
    format!("Fly in: {remaining}")
}

/// Start counting down from the tuned value. Any previous countdown is
/// cancelled first so only one repeating timer can exist.
pub fn begin_countdown(state: &mut GameState) {
    if let Some(previous) = state.pause.countdown.take() {
        state.timers.cancel(previous.timer);
    }

    let remaining = state.tuning.countdown_from;
    let timer = state
        .timers
        .schedule_repeating(state.tuning.countdown_interval_ms, TimerEvent::CountdownTick);
    state.pause.countdown = Some(Countdown { remaining, timer });
    state.hud.countdown_text = countdown_text(remaining);
    state.events.push(GameEvent::CountdownStarted);
    log::debug!("Countdown started from {remaining}");
}

/// One countdown step; returns true when the countdown finished
pub fn count_down(state: &mut GameState) -> bool {
    let Some(countdown) = state.pause.countdown.as_mut() else {
        return false;
    };

    countdown.remaining = countdown.remaining.saturating_sub(1);
    let remaining = countdown.remaining;
    state.hud.countdown_text = countdown_text(remaining);
    state.events.push(GameEvent::CountdownStep(remaining));

    if remaining > 0 {
        return false;
    }

    let timer = countdown.timer;
    state.pause.countdown = None;
    state.hud.countdown_text.clear();
    state.physics_paused = false;
    state.timers.cancel(timer);
    state.pause.paused = false;
    state.events.push(GameEvent::Resumed);
    log::info!("Resumed after countdown");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    fn paused_state() -> GameState {
        let mut state = GameState::new(11, Tuning::default(), 0);
        state.pause.paused = true;
        state.physics_paused = true;
        state
    }

    #[test]
    fn test_three_steps_resume() {
        let mut state = paused_state();
        begin_countdown(&mut state);
        assert_eq!(state.hud.countdown_text, "Fly in: 3");
        assert_eq!(state.timers.len(), 1);

        assert!(!count_down(&mut state));
        assert_eq!(state.hud.countdown_text, "Fly in: 2");
        assert!(!count_down(&mut state));
        assert_eq!(state.hud.countdown_text, "Fly in: 1");
        assert!(state.is_paused());

        assert!(count_down(&mut state));
        assert!(!state.is_paused());
        assert!(!state.physics_paused);
        assert!(state.hud.countdown_text.is_empty());
        assert!(state.timers.is_empty());

        // Stray step after completion is ignored
        assert!(!count_down(&mut state));
        assert!(!state.is_paused());
    }

    #[test]
    fn test_restarting_countdown_replaces_timer() {
        let mut state = paused_state();
        begin_countdown(&mut state);
        count_down(&mut state);
        begin_countdown(&mut state);

        assert_eq!(state.timers.len(), 1);
        assert_eq!(state.pause.countdown.as_ref().map(|c| c.remaining), Some(3));
    }
}
