//! Scene clock timers
//!
//! Timers are records advanced by the tick rather than callbacks: when one
//! elapses it yields its `TimerEvent` and the tick dispatches it. Repeating
//! timers keep firing until cancelled, so whoever schedules one owns the
//! handle and must cancel it.

use serde::{Deserialize, Serialize};

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Restart the session after a game over
    Restart,
    /// Advance the resume countdown by one step
    CountdownTick,
}

/// Cancellable reference to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(u32);

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Timer {
    handle: TimerHandle,
    delay_ms: f32,
    elapsed_ms: f32,
    repeating: bool,
    event: TimerEvent,
}

/// Timers owned by one scene, in scheduling order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    timers: Vec<Timer>,
    next_id: u32,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn schedule(&mut self, delay_ms: u32, repeating: bool, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.timers.push(Timer {
            handle,
            delay_ms: delay_ms.max(1) as f32,
            elapsed_ms: 0.0,
            repeating,
            event,
        });
        handle
    }

    /// Fire `event` once after `delay_ms`
    pub fn schedule_once(&mut self, delay_ms: u32, event: TimerEvent) -> TimerHandle {
        self.schedule(delay_ms, false, event)
    }

    /// Fire `event` every `delay_ms` until cancelled
    pub fn schedule_repeating(&mut self, delay_ms: u32, event: TimerEvent) -> TimerHandle {
        self.schedule(delay_ms, true, event)
    }

    /// Remove a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Drop every timer (scene shutdown/restart)
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Advance all timers by `dt_ms` and return what fired, in scheduling
    /// order. Each timer fires at most once per advance; a repeating timer
    /// carries its overshoot into the next period.
    pub fn advance(&mut self, dt_ms: f32) -> Vec<(TimerHandle, TimerEvent)> {
        let mut fired = Vec::new();
        for timer in &mut self.timers {
            timer.elapsed_ms += dt_ms;
            if timer.elapsed_ms >= timer.delay_ms {
                fired.push((timer.handle, timer.event));
                if timer.repeating {
                    timer.elapsed_ms = (timer.elapsed_ms - timer.delay_ms).min(timer.delay_ms);
                }
            }
        }
        self.timers
            .retain(|t| t.repeating || t.elapsed_ms < t.delay_ms);
        fired
    }
}
