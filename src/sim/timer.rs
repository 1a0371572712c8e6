//! Countdown timers and the frame-synchronized registry
//!
//! Time-gated effects (invincibility windows, damage-number lifetimes)
//! are plain data: a duration and the time elapsed since the last reset.
//! All timers live in one [`Timers`] registry owned by the orchestrator,
//! which advances every slot exactly once per frame no matter which actor
//! owns the handle. Owners hold a copyable [`TimerId`].

use crate::units::Ms;

/// Handle into the registry; never invalidated (timers are not removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(usize);

#[derive(Debug)]
struct Slot {
    duration: Ms,
    current: Ms,
}

#[derive(Debug, Default)]
pub struct Timers {
    slots: Vec<Slot>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a timer. It starts expired; call [`Timers::reset`] to arm it.
    pub fn create(&mut self, duration: Ms) -> TimerId {
        self.slots.push(Slot {
            duration,
            current: duration,
        });
        TimerId(self.slots.len() - 1)
    }

    /// Restart the countdown from zero.
    pub fn reset(&mut self, id: TimerId) {
        self.slots[id.0].current = 0;
    }

    /// True while less than the full duration has elapsed since the reset.
    pub fn active(&self, id: TimerId) -> bool {
        let slot = &self.slots[id.0];
        slot.current < slot.duration
    }

    pub fn expired(&self, id: TimerId) -> bool {
        !self.active(id)
    }

    /// Time elapsed since the last reset, capped at the duration.
    pub fn current_time(&self, id: TimerId) -> Ms {
        self.slots[id.0].current
    }

    /// Advance every registered timer; call once per frame.
    pub fn update_all(&mut self, elapsed_time: Ms) {
        for slot in &mut self.slots {
            slot.current = (slot.current + elapsed_time).min(slot.duration);
        }
    }
}
