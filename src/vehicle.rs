use crate::debug::debug_decision;
use crate::{Decision, Error, Result, SystemConfig, TrafficSignal};
use log::{info, trace, warn};

/// The driving state of a simulated vehicle.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "VehicleStateSnapshot"))]
pub struct VehicleState {
    /// The speed in km/h.
    speed: u32,
    /// Whether the most recent distance sample was an obstacle.
    obstacle_detected: bool,
    /// The most recent distance sample in m.
    last_distance: Option<f64>,
    /// The signal ahead of the vehicle.
    traffic_signal: TrafficSignal,
    /// Whether a pedestrian is nearby.
    pedestrian_nearby: bool,
    /// The parameters this state was built with.
    config: SystemConfig,
}

/// The serialized form of a [VehicleState], checked before it is restored.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub struct VehicleStateSnapshot {
    speed: u32,
    obstacle_detected: bool,
    last_distance: Option<f64>,
    traffic_signal: TrafficSignal,
    pedestrian_nearby: bool,
    config: SystemConfig,
}

#[cfg(feature = "serde")]
impl TryFrom<VehicleStateSnapshot> for VehicleState {
    type Error = Error;

    fn try_from(snapshot: VehicleStateSnapshot) -> Result<Self> {
        let config = snapshot.config;
        config.validate()?;
        if !config.speed_limits.contains(snapshot.speed) {
            return Err(Error::SpeedOutOfRange {
                speed: i32::try_from(snapshot.speed).unwrap_or(i32::MAX),
                min: config.speed_limits.min,
                max: config.speed_limits.max,
            });
        }
        let expected = snapshot
            .last_distance
            .map_or(false, |distance| distance < config.obstacle_threshold);
        if snapshot.obstacle_detected != expected {
            return Err(Error::InvalidSnapshot(format!(
                "obstacle flag {} does not match last distance {:?}",
                snapshot.obstacle_detected, snapshot.last_distance
            )));
        }
        Ok(Self {
            speed: snapshot.speed,
            obstacle_detected: snapshot.obstacle_detected,
            last_distance: snapshot.last_distance,
            traffic_signal: snapshot.traffic_signal,
            pedestrian_nearby: snapshot.pedestrian_nearby,
            config,
        })
    }
}

impl VehicleState {
    /// Creates a vehicle state with the default configuration.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a vehicle state with the given configuration, which must be valid.
    pub fn with_config(config: SystemConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            traffic_signal: config.default_signal,
            config,
            ..Default::default()
        })
    }

    /// The speed in km/h.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn obstacle_detected(&self) -> bool {
        self.obstacle_detected
    }

    /// The most recent distance passed to [Self::detect_obstacle], in m.
    pub fn last_distance(&self) -> Option<f64> {
        self.last_distance
    }

    pub fn traffic_signal(&self) -> TrafficSignal {
        self.traffic_signal
    }

    pub fn pedestrian_nearby(&self) -> bool {
        self.pedestrian_nearby
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn set_traffic_signal(&mut self, signal: TrafficSignal) {
        self.traffic_signal = signal;
    }

    /// Sets the signal from its name, leaving it unchanged if the name is unknown.
    pub fn set_traffic_signal_str(&mut self, signal: &str) -> Result<()> {
        self.traffic_signal = signal.parse()?;
        Ok(())
    }

    pub fn set_pedestrian_nearby(&mut self, nearby: bool) {
        self.pedestrian_nearby = nearby;
    }

    /// Records a distance reading and returns whether it is an obstacle.
    ///
    /// A reading strictly below the obstacle threshold is an obstacle;
    /// a reading exactly at the threshold is not. Only the latest reading counts.
    pub fn detect_obstacle(&mut self, distance: f64) -> bool {
        self.obstacle_detected = distance < self.config.obstacle_threshold;
        self.last_distance = Some(distance);
        if self.obstacle_detected {
            info!("Obstacle detected at {} meters.", distance);
        } else {
            trace!("Path clear at {} meters.", distance);
        }
        self.obstacle_detected
    }

    /// Decides what the vehicle should do given the current state.
    ///
    /// In order of priority: an obstacle or a red signal means stop,
    /// a nearby pedestrian means slow down, and anything else means go.
    pub fn make_driving_decision(&self) -> Decision {
        let decision = if self.obstacle_detected || self.traffic_signal.is_red() {
            Decision::Stop
        } else if self.pedestrian_nearby {
            Decision::SlowDown
        } else {
            Decision::Go
        };
        debug_decision(
            decision,
            self.traffic_signal,
            self.obstacle_detected,
            self.pedestrian_nearby,
        );
        decision
    }

    /// Sets the speed in km/h, which must lie within the configured limits.
    /// The state is left unchanged if it does not.
    pub fn adjust_vehicle_speed(&mut self, speed: i32) -> Result<u32> {
        let limits = self.config.speed_limits;
        match u32::try_from(speed) {
            Ok(speed) if limits.contains(speed) => {
                self.speed = speed;
                Ok(self.speed)
            }
            _ => {
                warn!("Rejected speed of {} km/h", speed);
                Err(Error::SpeedOutOfRange {
                    speed,
                    min: limits.min,
                    max: limits.max,
                })
            }
        }
    }

    /// Restores every field to its default.
    /// The signal becomes `default_signal` if given, otherwise the configured default.
    pub fn reset(&mut self, default_signal: Option<TrafficSignal>) {
        *self = Self {
            traffic_signal: default_signal.unwrap_or(self.config.default_signal),
            config: self.config,
            ..Default::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Interval;

    #[test]
    fn with_config_uses_default_signal() {
        let state = VehicleState::with_config(SystemConfig {
            default_signal: TrafficSignal::Red,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(state.traffic_signal(), TrafficSignal::Red);
        assert_eq!(state.make_driving_decision(), Decision::Stop);
    }

    #[test]
    fn custom_threshold() {
        let mut state = VehicleState::with_config(SystemConfig {
            obstacle_threshold: 10.0,
            ..Default::default()
        })
        .unwrap();
        assert!(state.detect_obstacle(9.5));
        assert!(!state.detect_obstacle(10.0));
    }

    #[test]
    fn custom_speed_limits() {
        let mut state = VehicleState::with_config(SystemConfig {
            speed_limits: Interval::new(10, 50),
            ..Default::default()
        })
        .unwrap();
        assert!(state.adjust_vehicle_speed(5).is_err());
        assert_eq!(state.adjust_vehicle_speed(50).unwrap(), 50);
        match state.adjust_vehicle_speed(51) {
            Err(Error::SpeedOutOfRange { speed, min, max }) => {
                assert_eq!((speed, min, max), (51, 10, 50));
            }
            other => panic!("expected SpeedOutOfRange, got {:?}", other),
        }
        assert_eq!(state.speed(), 50);
    }

    #[test]
    fn reset_keeps_config() {
        let config = SystemConfig {
            obstacle_threshold: 2.0,
            default_signal: TrafficSignal::Yellow,
            ..Default::default()
        };
        let mut state = VehicleState::with_config(config).unwrap();
        state.set_traffic_signal(TrafficSignal::Red);
        state.adjust_vehicle_speed(30).unwrap();
        state.detect_obstacle(1.0);
        state.reset(None);
        assert_eq!(state.traffic_signal(), TrafficSignal::Yellow);
        assert_eq!(state.speed(), 0);
        assert_eq!(state.last_distance(), None);
        assert_eq!(state.config(), &config);
    }

    #[test]
    fn invalid_config_is_refused() {
        let reversed = SystemConfig {
            speed_limits: Interval::new(100, 50),
            ..Default::default()
        };
        assert!(matches!(
            VehicleState::with_config(reversed),
            Err(Error::InvalidConfig(_))
        ));
        let nan = SystemConfig {
            obstacle_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            VehicleState::with_config(nan),
            Err(Error::InvalidConfig(_))
        ));
    }
}
