use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Longest lifespan a config may ask for, in days.
pub const MAX_LIFESPAN_DAYS: u32 = 36_500;

/// Stats a childhood character must exceed (strictly) to enter the growth period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthThresholds {
    /// Living environment must be above this.
    pub living_environment: u32,
    /// Favorability must be above this.
    pub favorability: u32,
    /// Hit points must be above this.
    pub hit_point: u32,
}

impl Default for GrowthThresholds {
    fn default() -> Self {
        Self {
            living_environment: 5,
            favorability: 3,
            hit_point: 8,
        }
    }
}

/// Rule constants for a simulation run.
///
/// Every `(low, high)` pair is an inclusive draw range. All fields fall back
/// to their defaults when missing from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for deterministic runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Days from hatching until the death timestamp.
    pub lifespan_days: (u32, u32),
    /// A feed counts as a fresh meal only when more than this many hours
    /// (modulo 24) have passed since the last one.
    pub feed_cooldown_hours: i64,
    /// Hit points recovered by a fresh meal.
    pub feed_recovery: (u32, u32),
    /// Shared decrement applied to every stat on a decay tick.
    pub decay: (u32, u32),
    /// Favorability gained by one play session when no amount is given.
    pub play_amount: (u32, u32),
    /// Amount subtracted from the vitality ceiling on entering maturity.
    pub maturity_shrink: (u32, u32),
    /// Exclusive `(lower, upper)` bounds on remaining days for childhood growth.
    pub childhood_window_days: (i64, i64),
    /// Maturity begins once `remaining_days - growth_factor` drops below this.
    pub maturity_margin_days: i64,
    /// Stats required to leave childhood.
    pub growth_thresholds: GrowthThresholds,
    /// Floor for the vitality ceiling after the maturity shrink.
    pub min_max_hit_point: u32,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            lifespan_days: (14, 27),
            feed_cooldown_hours: 12,
            feed_recovery: (1, 9),
            decay: (1, 10),
            play_amount: (1, 10),
            maturity_shrink: (2, 5),
            childhood_window_days: (7, 23),
            maturity_margin_days: 3,
            growth_thresholds: GrowthThresholds::default(),
            min_max_hit_point: 1,
            max_events: 500,
        }
    }
}

impl SimConfig {
    /// Set the RNG seed for deterministic runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the inclusive lifespan range in days.
    pub fn with_lifespan_days(mut self, low: u32, high: u32) -> Self {
        self.lifespan_days = (low, high);
        self
    }

    /// Set the inclusive per-tick decay range.
    pub fn with_decay(mut self, low: u32, high: u32) -> Self {
        self.decay = (low, high);
        self
    }

    /// Set the feeding cooldown in hours.
    pub fn with_feed_cooldown_hours(mut self, hours: i64) -> Self {
        self.feed_cooldown_hours = hours;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Read a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every draw range is non-empty and the bounds make sense.
    pub fn validate(&self) -> SimResult<()> {
        let ranges = [
            ("lifespan_days", self.lifespan_days),
            ("feed_recovery", self.feed_recovery),
            ("decay", self.decay),
            ("play_amount", self.play_amount),
            ("maturity_shrink", self.maturity_shrink),
        ];
        for (name, (low, high)) in ranges {
            if low > high {
                return Err(SimError::InvalidConfig(format!(
                    "{name}: lower bound {low} exceeds upper bound {high}"
                )));
            }
        }

        if self.lifespan_days.1 > MAX_LIFESPAN_DAYS {
            return Err(SimError::InvalidConfig(format!(
                "lifespan_days: upper bound {} exceeds {MAX_LIFESPAN_DAYS}",
                self.lifespan_days.1
            )));
        }

        let (lower, upper) = self.childhood_window_days;
        if lower >= upper {
            return Err(SimError::InvalidConfig(format!(
                "childhood_window_days: {lower} must be below {upper}"
            )));
        }
        if self.feed_cooldown_hours < 0 {
            return Err(SimError::InvalidConfig(
                "feed_cooldown_hours must not be negative".into(),
            ));
        }
        if self.min_max_hit_point == 0 {
            return Err(SimError::InvalidConfig(
                "min_max_hit_point must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SimConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.lifespan_days, (14, 27));
        assert_eq!(config.feed_cooldown_hours, 12);
        assert_eq!(config.feed_recovery, (1, 9));
        assert_eq!(config.decay, (1, 10));
        assert_eq!(config.maturity_shrink, (2, 5));
        assert_eq!(config.childhood_window_days, (7, 23));
        assert_eq!(config.maturity_margin_days, 3);
        assert_eq!(config.growth_thresholds.hit_point, 8);
        assert_eq!(config.min_max_hit_point, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = SimConfig::default()
            .with_seed(123)
            .with_decay(2, 4)
            .with_lifespan_days(20, 20)
            .with_feed_cooldown_hours(6)
            .with_max_events(10);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.decay, (2, 4));
        assert_eq!(config.lifespan_days, (20, 20));
        assert_eq!(config.feed_cooldown_hours, 6);
        assert_eq!(config.max_events, 10);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SimConfig::from_json(r#"{ "seed": 7, "decay": [1, 3] }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.decay, (1, 3));
        assert_eq!(config.lifespan_days, (14, 27));
        assert_eq!(config.growth_thresholds, GrowthThresholds::default());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = SimConfig::default().with_decay(5, 1).validate().unwrap_err();
        assert!(err.to_string().contains("decay"));
    }

    #[test]
    fn oversized_lifespan_is_rejected() {
        let err = SimConfig::from_json(r#"{ "lifespan_days": [200000000, 200000000] }"#)
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
        assert!(err.to_string().contains("lifespan_days"));

        let longest = SimConfig::default().with_lifespan_days(MAX_LIFESPAN_DAYS, MAX_LIFESPAN_DAYS);
        assert!(longest.validate().is_ok());
    }

    #[test]
    fn empty_childhood_window_is_rejected() {
        let config = SimConfig {
            childhood_window_days: (10, 10),
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn zero_ceiling_floor_is_rejected() {
        let config = SimConfig {
            min_max_hit_point: 0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(
            SimConfig::from_json("{ not json"),
            Err(SimError::Serialization(_))
        ));
    }
}
