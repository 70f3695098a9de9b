use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The state of the traffic signal ahead of the vehicle.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum TrafficSignal {
    #[default]
    Green,
    Yellow,
    Red,
}

impl TrafficSignal {
    /// The lowercase name of the signal.
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficSignal::Green => "green",
            TrafficSignal::Yellow => "yellow",
            TrafficSignal::Red => "red",
        }
    }

    pub fn is_red(self) -> bool {
        self == TrafficSignal::Red
    }
}

impl FromStr for TrafficSignal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(TrafficSignal::Green),
            "yellow" => Ok(TrafficSignal::Yellow),
            "red" => Ok(TrafficSignal::Red),
            _ => Err(Error::InvalidSignal {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TrafficSignal {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TrafficSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
