// Wall-clock pacing for particle spawns.
//
// The frame loop runs at whatever rate the browser grants, so spawn
// cadence is accumulated in seconds rather than counted in frames.

/// Longest backlog honoured after a stall, in whole intervals.
const MAX_CATCHUP_INTERVALS: f32 = 4.0;

/// Floor for the configured interval so a zeroed slider cannot spin.
const MIN_INTERVAL_SEC: f32 = 0.05;

/// Converts elapsed time into spawn counts, one burst per interval.
#[derive(Debug, Default)]
pub struct SpawnPacer {
    accum_sec: f32,
}

impl SpawnPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt_sec` and return how many particles to spawn now.
    ///
    /// Each full `interval_sec` owed yields one burst of `burst`
    /// particles. The backlog is clamped so a backgrounded tab does not
    /// dump a flood of spawns on resume.
    pub fn tick(&mut self, dt_sec: f32, interval_sec: f32, burst: u32) -> u32 {
        let interval = interval_sec.max(MIN_INTERVAL_SEC);
        self.accum_sec += dt_sec.max(0.0);
        let cap = interval * MAX_CATCHUP_INTERVALS;
        if self.accum_sec > cap {
            self.accum_sec = cap;
        }
        let mut count = 0;
        while self.accum_sec >= interval {
            self.accum_sec -= interval;
            count += burst;
        }
        count
    }
}
