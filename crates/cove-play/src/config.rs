//! Configuration for a play session.

use cove_theater::TheaterConfig;

use crate::error::{PlayError, PlayResult};

/// Configuration for a play session.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// RNG seed for reproducible NPC wandering.
    pub seed: u64,
    /// Player walking speed in tiles per millisecond.
    pub player_speed: f64,
    /// NPC walking speed in tiles per millisecond.
    pub npc_speed: f64,
    /// Rendered size of one tile in pixels.
    pub tile_size: f64,
    /// Smallest tile size zooming may reach.
    pub min_tile_size: f64,
    /// Largest tile size zooming may reach.
    pub max_tile_size: f64,
    /// Pixels added or removed per zoom step.
    pub zoom_step: f64,
    /// Fraction of the remaining distance the smooth camera covers per frame.
    pub camera_smoothing: f64,
    /// How often an idle NPC picks a new direction, in milliseconds.
    pub npc_wander_interval_ms: f64,
    /// Sequencing engine tuning.
    pub theater: TheaterConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_speed: 0.01,
            npc_speed: 0.002,
            tile_size: 16.0,
            min_tile_size: 4.0,
            max_tile_size: 64.0,
            zoom_step: 2.0,
            camera_smoothing: 0.1,
            npc_wander_interval_ms: 2000.0,
            theater: TheaterConfig::default(),
        }
    }
}

impl PlayConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the player speed in tiles per millisecond.
    pub fn with_player_speed(mut self, speed: f64) -> Self {
        self.player_speed = speed;
        self
    }

    /// Set the starting tile size in pixels.
    pub fn with_tile_size(mut self, size: f64) -> Self {
        self.tile_size = size;
        self
    }

    /// Set the NPC wander interval.
    pub fn with_npc_wander_interval_ms(mut self, ms: f64) -> Self {
        self.npc_wander_interval_ms = ms;
        self
    }

    /// Set the sequencing engine configuration.
    pub fn with_theater(mut self, theater: TheaterConfig) -> Self {
        self.theater = theater;
        self
    }

    /// Reject values the play state cannot work with.
    pub fn validate(&self) -> PlayResult<()> {
        let positive = |v: f64| !v.is_nan() && v > 0.0;
        if !positive(self.player_speed) {
            return Err(invalid("player_speed", "must be positive"));
        }
        if self.npc_speed.is_nan() || self.npc_speed < 0.0 {
            return Err(invalid("npc_speed", "must be non-negative"));
        }
        if !positive(self.min_tile_size) || self.max_tile_size < self.min_tile_size {
            return Err(invalid("min_tile_size", "must be positive and <= max_tile_size"));
        }
        if !(self.min_tile_size..=self.max_tile_size).contains(&self.tile_size) {
            return Err(invalid("tile_size", "must lie within the zoom bounds"));
        }
        if !positive(self.zoom_step) {
            return Err(invalid("zoom_step", "must be positive"));
        }
        if !positive(self.camera_smoothing) || self.camera_smoothing > 1.0 {
            return Err(invalid("camera_smoothing", "must lie in (0, 1]"));
        }
        if !positive(self.npc_wander_interval_ms) {
            return Err(invalid("npc_wander_interval_ms", "must be positive"));
        }
        self.theater.validate()?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> PlayError {
    PlayError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = PlayConfig::default();
        assert_eq!(cfg.seed, 42);
        assert!((cfg.player_speed - 0.01).abs() < f64::EPSILON);
        assert!((cfg.tile_size - 16.0).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = PlayConfig::default()
            .with_seed(7)
            .with_player_speed(0.02)
            .with_tile_size(32.0)
            .with_npc_wander_interval_ms(500.0);
        assert_eq!(cfg.seed, 7);
        assert!((cfg.player_speed - 0.02).abs() < f64::EPSILON);
        assert!((cfg.tile_size - 32.0).abs() < f64::EPSILON);
        assert!((cfg.npc_wander_interval_ms - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_tile_size_outside_zoom_bounds() {
        let err = PlayConfig::default().with_tile_size(100.0).validate();
        assert!(matches!(
            err,
            Err(PlayError::InvalidConfig {
                field: "tile_size",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_smoothing() {
        let mut cfg = PlayConfig::default();
        cfg.camera_smoothing = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn surfaces_theater_errors() {
        let cfg =
            PlayConfig::default().with_theater(TheaterConfig::default().with_min_duration_ms(0.0));
        assert!(matches!(cfg.validate(), Err(PlayError::Theater(_))));
    }
}
