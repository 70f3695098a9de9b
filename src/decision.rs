use std::fmt;

/// The action chosen for the vehicle.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    #[cfg_attr(feature = "serde", serde(rename = "STOP"))]
    Stop,
    #[cfg_attr(feature = "serde", serde(rename = "SLOW DOWN"))]
    SlowDown,
    #[cfg_attr(feature = "serde", serde(rename = "GO"))]
    Go,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Stop => "STOP",
            Decision::SlowDown => "SLOW DOWN",
            Decision::Go => "GO",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
