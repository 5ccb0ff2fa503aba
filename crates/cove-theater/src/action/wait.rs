use super::Step;
use crate::context::TheaterContext;

/// Holds the sequence for a fixed amount of theater time.
#[derive(Debug, Clone)]
pub struct Wait {
    delay_ms: f64,
    started_at_ms: f64,
}

impl Wait {
    /// Wait `delay_ms` milliseconds, measured from the frame the wait starts.
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            started_at_ms: 0.0,
        }
    }

    /// The configured delay.
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub(super) fn start(&mut self, ctx: &mut TheaterContext<'_>) {
        self.started_at_ms = ctx.now_ms();
    }

    pub(super) fn update(&mut self, ctx: &mut TheaterContext<'_>) -> Step {
        if ctx.now_ms() - self.started_at_ms >= self.delay_ms {
            Step::Complete
        } else {
            Step::Continue
        }
    }
}
