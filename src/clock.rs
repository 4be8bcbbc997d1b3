use std::time::{Duration, Instant};

/// Turn clock consulted by the searcher. The search never gets preempted; it
/// polls `should_stop` once per move expansion and once per deepening
/// iteration, so overrun is bounded by one unchecked subtree.
#[derive(Clone, Copy, Debug)]
pub enum Clock {
    /// Turn started now against the remaining game budget. Stops once the
    /// turn has consumed 1/30th of what is left on the clock.
    Budget { start: Instant, remaining: Duration },
    /// Fixed time for this move (UCI `go movetime`).
    MoveTime { start: Instant, limit: Duration },
    /// Frozen readings, for tests.
    Fixed { elapsed: Duration, remaining: Duration },
}

impl Clock {
    pub fn budget(remaining: Duration) -> Self {
        Clock::Budget { start: Instant::now(), remaining }
    }

    pub fn movetime(limit: Duration) -> Self {
        Clock::MoveTime { start: Instant::now(), limit }
    }

    pub fn fixed(elapsed: Duration, remaining: Duration) -> Self {
        Clock::Fixed { elapsed, remaining }
    }

    /// Time spent on the current turn.
    pub fn elapsed(&self) -> Duration {
        match *self {
            Clock::Budget { start, .. } | Clock::MoveTime { start, .. } => start.elapsed(),
            Clock::Fixed { elapsed, .. } => elapsed,
        }
    }

    /// Time left on the game clock, as of now.
    pub fn remaining(&self) -> Duration {
        match *self {
            Clock::Budget { remaining, .. } => remaining.saturating_sub(self.elapsed()),
            Clock::MoveTime { limit, .. } => limit.saturating_sub(self.elapsed()),
            Clock::Fixed { remaining, .. } => remaining,
        }
    }

    pub fn should_stop(&self) -> bool {
        match *self {
            Clock::Budget { .. } | Clock::Fixed { .. } => {
                self.elapsed() >= self.remaining() / 30
            }
            Clock::MoveTime { start, limit } => start.elapsed() >= limit,
        }
    }
}
