use cove_core::Color;

use crate::error::{TheaterError, TheaterResult};
use crate::input::Key;

/// Where the dialog panel sits, as fractions of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogRegion {
    /// Left edge as a fraction of viewport width.
    pub x: f64,
    /// Top edge as a fraction of viewport height.
    pub y: f64,
    /// Width as a fraction of viewport width.
    pub w: f64,
    /// Height as a fraction of viewport height.
    pub h: f64,
}

impl Default for DialogRegion {
    fn default() -> Self {
        Self {
            x: 0.05,
            y: 0.7,
            w: 0.9,
            h: 0.25,
        }
    }
}

/// Tuning for the sequencing engine.
#[derive(Debug, Clone)]
pub struct TheaterConfig {
    /// Distance in world units at which a move snaps onto its target.
    pub move_epsilon: f64,
    /// Lower bound for any duration used as a divisor, in milliseconds.
    pub min_duration_ms: f64,
    /// Per-component slack when comparing move directions for deflection.
    pub redirect_tolerance: f64,
    /// Slack in milliseconds when checking whether a timer has run out.
    pub time_tolerance_ms: f64,
    /// Key whose release closes a dialog.
    pub confirm_key: Key,
    /// Dialog panel placement.
    pub dialog_region: DialogRegion,
    /// Dialog panel fill.
    pub dialog_fill: Color,
    /// Dialog panel outline.
    pub dialog_border: Color,
    /// Dialog text color.
    pub dialog_text: Color,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for TheaterConfig {
    fn default() -> Self {
        Self {
            move_epsilon: 0.05,
            min_duration_ms: 1.0,
            redirect_tolerance: 1e-9,
            time_tolerance_ms: 1e-6,
            confirm_key: Key::Confirm,
            dialog_region: DialogRegion::default(),
            dialog_fill: Color::rgba(0, 0, 0, 50),
            dialog_border: Color::WHITE,
            dialog_text: Color::WHITE,
            max_events: 256,
        }
    }
}

impl TheaterConfig {
    /// Set the snap distance for scripted moves.
    pub fn with_move_epsilon(mut self, epsilon: f64) -> Self {
        self.move_epsilon = epsilon;
        self
    }

    /// Set the minimum duration floor.
    pub fn with_min_duration_ms(mut self, ms: f64) -> Self {
        self.min_duration_ms = ms;
        self
    }

    /// Set the slack used when a timer is compared with its duration.
    pub fn with_time_tolerance_ms(mut self, ms: f64) -> Self {
        self.time_tolerance_ms = ms;
        self
    }

    /// Set the key that closes dialogs.
    pub fn with_confirm_key(mut self, key: Key) -> Self {
        self.confirm_key = key;
        self
    }

    /// Set the dialog panel placement.
    pub fn with_dialog_region(mut self, region: DialogRegion) -> Self {
        self.dialog_region = region;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> TheaterResult<()> {
        if self.move_epsilon.is_nan() || self.move_epsilon < 0.0 {
            return Err(invalid("move_epsilon", "must be non-negative"));
        }
        if self.min_duration_ms.is_nan() || self.min_duration_ms <= 0.0 {
            return Err(invalid("min_duration_ms", "must be strictly positive"));
        }
        if self.redirect_tolerance.is_nan() || self.redirect_tolerance < 0.0 {
            return Err(invalid("redirect_tolerance", "must be non-negative"));
        }
        if self.time_tolerance_ms.is_nan() || self.time_tolerance_ms < 0.0 {
            return Err(invalid("time_tolerance_ms", "must be non-negative"));
        }
        let r = self.dialog_region;
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !(in_unit(r.x) && in_unit(r.y) && in_unit(r.w) && in_unit(r.h)) {
            return Err(invalid("dialog_region", "fractions must lie in 0..=1"));
        }
        if r.x + r.w > 1.0 || r.y + r.h > 1.0 {
            return Err(invalid("dialog_region", "panel must fit inside the viewport"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> TheaterError {
    TheaterError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = TheaterConfig::default();
        assert!((config.move_epsilon - 0.05).abs() < f64::EPSILON);
        assert!((config.min_duration_ms - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.confirm_key, Key::Confirm);
        assert_eq!(config.dialog_fill, Color::rgba(0, 0, 0, 50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = TheaterConfig::default()
            .with_move_epsilon(0.1)
            .with_min_duration_ms(5.0)
            .with_confirm_key(Key::Trigger)
            .with_max_events(10);
        assert!((config.move_epsilon - 0.1).abs() < f64::EPSILON);
        assert!((config.min_duration_ms - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.confirm_key, Key::Trigger);
        assert_eq!(config.max_events, 10);
    }

    #[test]
    fn zero_duration_floor_is_rejected() {
        let err = TheaterConfig::default()
            .with_min_duration_ms(0.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("min_duration_ms"));
    }

    #[test]
    fn nan_epsilon_is_rejected() {
        let config = TheaterConfig::default().with_move_epsilon(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_time_tolerance_is_rejected() {
        let err = TheaterConfig::default()
            .with_time_tolerance_ms(-1.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("time_tolerance_ms"));
    }

    #[test]
    fn dialog_region_must_fit() {
        let config = TheaterConfig::default().with_dialog_region(DialogRegion {
            x: 0.5,
            y: 0.5,
            w: 0.6,
            h: 0.1,
        });
        assert!(config.validate().is_err());
    }
}
