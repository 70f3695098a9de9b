pub use config::SystemConfig;
pub use decision::Decision;
pub use error::{Error, Result};
pub use signal::TrafficSignal;
pub use util::Interval;
pub use vehicle::VehicleState;

#[cfg(feature = "debug")]
pub use debug::take_debug_frame;

pub mod config;
mod debug;
mod decision;
mod error;
mod signal;
mod util;
mod vehicle;
