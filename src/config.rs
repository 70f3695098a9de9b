//! Tunable parameters of the decision component.

use crate::util::Interval;
use crate::{Error, Result, TrafficSignal};

/// The obstacle distance threshold used when none is configured, in m.
pub const DEFAULT_OBSTACLE_THRESHOLD: f64 = 5.0; // m

/// The minimum speed of the vehicle used when none is configured, in km/h.
pub const DEFAULT_MIN_SPEED: u32 = 0; // km/h

/// The maximum speed of the vehicle used when none is configured, in km/h.
pub const DEFAULT_MAX_SPEED: u32 = 120; // km/h

/// Parameters shared by every [VehicleState](crate::VehicleState) built from them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SystemConfig {
    /// An object closer than this distance, in m, is an obstacle.
    pub obstacle_threshold: f64,
    /// The permitted speeds in km/h, bounds included.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "partial_speed_limits"))]
    pub speed_limits: Interval<u32>,
    /// The signal assumed at start-up and after a reset.
    pub default_signal: TrafficSignal,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            obstacle_threshold: DEFAULT_OBSTACLE_THRESHOLD,
            speed_limits: Interval::new(DEFAULT_MIN_SPEED, DEFAULT_MAX_SPEED),
            default_signal: TrafficSignal::Green,
        }
    }
}

impl SystemConfig {
    /// Parses and validates a configuration from JSON.
    /// Fields which are absent take their default values, as do absent speed limit bounds.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(signal) = value.get("default_signal").and_then(|v| v.as_str()) {
            signal.parse::<TrafficSignal>()?;
        }
        let config: SystemConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.obstacle_threshold.is_finite() || self.obstacle_threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "obstacle threshold must be a non-negative distance, got {}",
                self.obstacle_threshold
            )));
        }
        if !self.speed_limits.is_ordered() {
            return Err(Error::InvalidConfig(format!(
                "speed limits are reversed: {:?}",
                self.speed_limits
            )));
        }
        Ok(())
    }
}

/// Reads speed limits where either bound may be left out.
#[cfg(feature = "serde")]
fn partial_speed_limits<'de, D>(deserializer: D) -> std::result::Result<Interval<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct PartialLimits {
        min: Option<u32>,
        max: Option<u32>,
    }

    let limits = PartialLimits::deserialize(deserializer)?;
    Ok(Interval::new(
        limits.min.unwrap_or(DEFAULT_MIN_SPEED),
        limits.max.unwrap_or(DEFAULT_MAX_SPEED),
    ))
}
