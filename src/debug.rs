use crate::{Decision, TrafficSignal};
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

#[allow(unused)]
pub fn debug_decision(
    decision: Decision,
    signal: TrafficSignal,
    obstacle: bool,
    pedestrian: bool,
) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "decision",
            "decision": decision.as_str(),
            "signal": signal.as_str(),
            "obstacle": obstacle,
            "pedestrian": pedestrian,
        }))
    })
}

/// Drains the decisions recorded on this thread since the last call.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
