use crate::Count;
use std::time::Instant;

/// Tracks a long-running enumeration and periodically logs throughput.
///
/// Ticked once per combination; logs every 5% of the expected total at
/// debug level, so the hot loop pays one increment and one branch.
pub struct Progress {
    total: Count,
    check: Count,
    ticks: Count,
    begin: Instant,
    delta: Instant,
}

impl Progress {
    pub fn new(total: Count) -> Self {
        let now = Instant::now();
        Self {
            total,
            check: (total / 20).max(1),
            ticks: 0,
            begin: now,
            delta: now,
        }
    }

    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks % self.check == 0 {
            let now = Instant::now();
            let total_t = now.duration_since(self.begin);
            let delta_t = now.duration_since(self.delta);
            self.delta = now;
            log::debug!(
                "progress: {:8.0?} {:>10} {:6.2}%   mean {:6.0}   last {:6.0}",
                total_t,
                self.ticks,
                self.ticks as f32 / self.total as f32 * 100f32,
                self.ticks as f32 / total_t.as_secs_f32(),
                self.check as f32 / delta_t.as_secs_f32(),
            );
        }
    }
}
