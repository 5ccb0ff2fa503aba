/// Tracks theater time: a frame counter and accumulated milliseconds.
///
/// The sequencer advances the clock once per tick, before any action runs,
/// so every action observing the clock in a frame sees the same time.
#[derive(Debug, Clone, Default)]
pub struct TheaterClock {
    frame: u64,
    now_ms: f64,
}

impl TheaterClock {
    /// Create a clock at frame 0, time 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame of `delta_ms`. Returns the new frame number.
    pub fn advance(&mut self, delta_ms: f64) -> u64 {
        self.frame += 1;
        self.now_ms += delta_ms.max(0.0);
        self.frame
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Total milliseconds elapsed since the clock was created.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_initial_state() {
        let clock = TheaterClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.now_ms(), 0.0);
    }

    #[test]
    fn clock_advance_accumulates() {
        let mut clock = TheaterClock::new();
        clock.advance(16.0);
        clock.advance(17.0);
        assert_eq!(clock.advance(16.0), 3);
        assert!((clock.now_ms() - 49.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_delta_does_not_rewind() {
        let mut clock = TheaterClock::new();
        clock.advance(10.0);
        clock.advance(-5.0);
        assert!((clock.now_ms() - 10.0).abs() < f64::EPSILON);
    }
}
