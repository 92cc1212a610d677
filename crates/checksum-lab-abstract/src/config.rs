use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the channel RNG. `None` seeds from the wall clock at startup.
    pub seed: Option<u64>,
    /// Whether the random noise stage runs at all.
    /// The noise policy itself (10% chance, 1-3 bit errors) is fixed.
    pub noise: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            noise: true,
        }
    }
}

impl SimConfig {
    /// A noiseless channel with a fixed seed, handy for regression runs.
    pub fn clean(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            noise: false,
        }
    }
}
