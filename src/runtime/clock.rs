use crate::foundation::core::Millis;

/// Monotonic time source in milliseconds.
pub trait Clock {
    /// Current clock value.
    fn now_ms(&self) -> Millis;
}

/// Manually advanced clock for deterministic runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VirtualClock {
    now: Millis,
}

impl VirtualClock {
    /// Clock starting at `start_ms`.
    pub fn starting_at(start_ms: Millis) -> Self {
        Self { now: start_ms }
    }

    /// Move forward by `dt_ms`. Negative steps are ignored.
    pub fn advance(&mut self, dt_ms: Millis) {
        if dt_ms > 0.0 {
            self.now += dt_ms;
        }
    }

    /// Jump to `t_ms` if it is not in the past.
    pub fn advance_to(&mut self, t_ms: Millis) {
        if t_ms > self.now {
            self.now = t_ms;
        }
    }
}

impl Clock for VirtualClock {
    fn now_ms(&self) -> Millis {
        self.now
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/clock.rs"]
mod tests;
