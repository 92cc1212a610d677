use crate::config::SimConfig;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub description: String,
    /// Binary digits fed to the sender.
    pub input: String,
    #[serde(default)]
    pub config: SimConfigOverride,
    #[serde(default)]
    pub actions: Vec<TestAction>,
    #[serde(default)]
    pub assertions: Vec<TestAssertion>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SimConfigOverride {
    pub seed: Option<u64>,
    pub noise: Option<bool>,
}

impl SimConfigOverride {
    pub fn apply_to(&self, config: &mut SimConfig) {
        if let Some(v) = self.seed {
            config.seed = Some(v);
        }
        if let Some(v) = self.noise {
            config.noise = v;
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TestAction {
    /// Deterministically flip one bit of the received frame (bit 0 = LSB)
    FlipBit { byte: usize, bit: u8 },
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TestAssertion {
    /// Assert the payload bytes produced by the codec
    EncodedBytes { bytes: Vec<u8> },
    /// Assert the checksum computed by the sender
    Checksum { value: u16 },
    /// Assert the one's-complement sum computed by the receiver
    ReceiverSum { value: u16 },
    /// Assert whether the receiver accepted the frame
    Outcome { valid: bool },
    /// Assert whether an alignment byte was inserted before the checksum
    Padded { padded: bool },
}
