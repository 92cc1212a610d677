pub mod config;
pub mod interface;
pub mod scenario;

pub use interface::RandomSource;

pub use config::SimConfig;
pub use scenario::{SimConfigOverride, TestAction, TestAssertion, TestScenario};
