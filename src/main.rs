use fsd_sim::{TrafficSignal, VehicleState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// The number of simulated ticks.
const NUM_TICKS: usize = 20;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);
    let distances = match Normal::new(12.0, 6.0) {
        Ok(distr) => distr,
        Err(err) => {
            eprintln!("Bad distance distribution: {}", err);
            return;
        }
    };
    let signals = [TrafficSignal::Green, TrafficSignal::Yellow, TrafficSignal::Red];

    let mut state = VehicleState::new();
    println!("Simulating with seed {}...", seed);
    for tick in 0..NUM_TICKS {
        let distance: f64 = distances.sample(&mut rng);
        state.set_traffic_signal(signals[rng.gen_range(0..signals.len())]);
        state.set_pedestrian_nearby(rng.gen_bool(0.2));
        state.detect_obstacle(distance);
        let decision = state.make_driving_decision();

        let requested = rng.gen_range(-10..=140);
        let speed = match state.adjust_vehicle_speed(requested) {
            Ok(speed) => format!("{} km/h", speed),
            Err(err) => format!("{} km/h kept ({})", state.speed(), err),
        };
        println!(
            "[{:>2}] dist {:>6.2} m | signal {:<6} | pedestrian {:<5} --> {:<9} | {}",
            tick,
            distance,
            state.traffic_signal(),
            state.pedestrian_nearby(),
            decision,
            speed,
        );
    }
}
