// src/animation/ticker.rs
//
// Fixed-period tick driver.
// Frame time is accumulated the same way Movement does it; every full
// period that elapses while running is one tick.

#[derive(Debug, Clone, PartialEq)]
struct Schedule {
    frame_timer: f32,
}

#[derive(Debug, Clone)]
pub struct Ticker {
    period: f32,
    max_catch_up: u32,
    // Some while running, so there is never more than one live schedule
    schedule: Option<Schedule>,
}

impl Ticker {
    pub fn new(period: f32, max_catch_up: u32) -> Self {
        Self {
            period,
            max_catch_up: max_catch_up.max(1),
            schedule: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Returns false if the ticker was already running.
    pub fn start(&mut self) -> bool {
        if self.schedule.is_some() {
            return false;
        }
        self.schedule = Some(Schedule { frame_timer: 0.0 });
        log::debug!("ticker started ({:.0}ms period)", self.period * 1000.0);
        true
    }

    /// Returns false if the ticker was not running.
    pub fn stop(&mut self) -> bool {
        if self.schedule.take().is_none() {
            return false;
        }
        log::debug!("ticker stopped");
        true
    }

    /// Feeds `dt` seconds of frame time and returns how many ticks are due.
    /// After a long stall at most `max_catch_up` ticks are reported and the
    /// backlog is dropped.
    pub fn due_ticks(&mut self, dt: f32) -> u32 {
        let Some(schedule) = self.schedule.as_mut() else {
            return 0;
        };

        schedule.frame_timer += dt.max(0.0);

        let mut due = 0;
        while schedule.frame_timer >= self.period {
            schedule.frame_timer -= self.period;
            due += 1;
            if due == self.max_catch_up {
                schedule.frame_timer %= self.period;
                break;
            }
        }
        due
    }
}
