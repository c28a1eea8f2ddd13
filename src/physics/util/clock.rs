use std::{fmt::Debug, time::Duration};

use bevy::{core::FrameCount, log::warn, time::Time};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepClockError {
    #[error("the step interval must be longer than zero")]
    ZeroInterval,
    #[error("at least one step per frame has to be allowed")]
    ZeroCatchUp,
}

/// A fixed interval clock for the automaton
/// Frame deltas are accumulated and turned into a whole number of due steps. If a frame
/// took so long that more than `max_catch_up` steps are due, the rest is dropped rather
/// than stalling the next frame too.
#[derive(Clone, Copy)]
pub struct StepClock {
    interval: Duration,
    max_catch_up: u32,
    accumulated: Duration,
    time: Time,
    frame: FrameCount,
}

impl Debug for StepClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepClock")
            .field("interval", &self.interval)
            .field("accumulated", &self.accumulated)
            .field("elapsed", &self.time.elapsed())
            .field("frame", &self.frame.0)
            .finish()
    }
}

impl StepClock {
    pub fn new(interval: Duration, max_catch_up: u32) -> Result<Self, StepClockError> {
        if interval.is_zero() {
            return Err(StepClockError::ZeroInterval);
        }
        if max_catch_up == 0 {
            return Err(StepClockError::ZeroCatchUp);
        }
        Ok(Self {
            interval,
            max_catch_up,
            accumulated: Duration::ZERO,
            time: Time::default(),
            frame: FrameCount::default(),
        })
    }

    /// Feed a frame delta, get back how many steps to run now
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.time.advance_by(delta);
        self.frame.0 = self.frame.0.wrapping_add(1);
        self.accumulated += delta;

        let mut due = 0;
        while self.accumulated >= self.interval {
            if due == self.max_catch_up {
                warn!(
                    "Dropping {:?} of simulation time after {} catch up steps",
                    self.accumulated, due
                );
                self.accumulated = Duration::ZERO;
                break;
            }
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
    pub fn get_current_time(&self) -> Duration {
        self.time.elapsed()
    }
    pub fn get_last_delta(&self) -> Duration {
        self.time.delta()
    }
    pub fn get_current_frame(&self) -> u32 {
        self.frame.0
    }
}
