pub mod engine;
pub mod scenario_runner;
pub mod trace;

pub use engine::{MAX_NOISE_ERRORS, NOISE_PERCENT, Simulator};
pub use trace::{NoiseOutcome, TransmissionReport};
