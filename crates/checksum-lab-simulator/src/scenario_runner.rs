use crate::engine::Simulator;
use crate::trace::{TransmissionReport, hex16};
use anyhow::{Context, anyhow};
use checksum_lab_abstract::{SimConfig, TestAction, TestAssertion, TestScenario};
use checksum_lab_core::{BinaryString, BitFlip};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn load_scenario(path: &Path) -> anyhow::Result<TestScenario> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
    toml::from_str(&content).context("Failed to parse scenario")
}

pub fn run_scenario(path: &Path) -> anyhow::Result<TransmissionReport> {
    let scenario = load_scenario(path)?;
    run(&scenario)
}

/// Execute a parsed scenario and check every assertion against the report.
pub fn run(scenario: &TestScenario) -> anyhow::Result<TransmissionReport> {
    info!("Running Scenario: {}", scenario.name);
    info!("Description: {}", scenario.description);

    let input: BinaryString = scenario
        .input
        .parse()
        .context("Scenario input is not a binary string")?;

    let mut config = SimConfig::default();
    scenario.config.apply_to(&mut config);

    let mut sim = Simulator::new(config);
    for action in &scenario.actions {
        match action {
            TestAction::FlipBit { byte, bit } => {
                sim.add_flip_once(BitFlip::new(*byte, *bit));
            }
        }
    }

    let report = sim.transmit(&input)?;

    for assertion in &scenario.assertions {
        check(assertion, &report)?;
    }
    Ok(report)
}

fn check(assertion: &TestAssertion, report: &TransmissionReport) -> anyhow::Result<()> {
    match assertion {
        TestAssertion::EncodedBytes { bytes } => {
            if report.payload != *bytes {
                return Err(anyhow!(
                    "Assertion Failed: encoded bytes {:02X?}, expected {:02X?}",
                    report.payload,
                    bytes
                ));
            }
        }
        TestAssertion::Checksum { value } => {
            if report.checksum != *value {
                return Err(anyhow!(
                    "Assertion Failed: checksum {}, expected {}",
                    report.checksum_hex(),
                    hex16(*value)
                ));
            }
        }
        TestAssertion::ReceiverSum { value } => {
            if report.receiver_sum != *value {
                return Err(anyhow!(
                    "Assertion Failed: receiver sum {}, expected {}",
                    report.receiver_sum_hex(),
                    hex16(*value)
                ));
            }
        }
        TestAssertion::Outcome { valid } => {
            if report.valid != *valid {
                return Err(anyhow!(
                    "Assertion Failed: frame was {}, expected {}",
                    verdict(report.valid),
                    verdict(*valid)
                ));
            }
        }
        TestAssertion::Padded { padded } => {
            if report.padded != *padded {
                return Err(anyhow!(
                    "Assertion Failed: padded = {}, expected {}",
                    report.padded,
                    padded
                ));
            }
        }
    }
    Ok(())
}

fn verdict(valid: bool) -> &'static str {
    if valid { "accepted" } else { "rejected" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shipped(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../scenarios")
            .join(name)
    }

    fn parse(source: &str) -> TestScenario {
        toml::from_str(source).unwrap()
    }

    #[test]
    fn shipped_scenarios_pass() {
        for name in [
            "regression.toml",
            "odd_length.toml",
            "empty.toml",
            "single_bit_error.toml",
            "double_flip.toml",
        ] {
            let report = run_scenario(&shipped(name))
                .unwrap_or_else(|e| panic!("{name} failed: {e:#}"));
            assert_eq!(report.noise.random_flips.len(), 0, "{name}");
        }
    }

    #[test]
    fn failed_assertion_is_reported() {
        let scenario = parse(
            r#"
            name = "wrong checksum"
            description = "expects the wrong value"
            input = "0100100001100101"
            [config]
            seed = 1
            noise = false
            [[assertions]]
            type = "checksum"
            value = 0x1234
            "#,
        );
        let err = run(&scenario).unwrap_err().to_string();
        assert!(err.contains("0xB79A"), "{err}");
        assert!(err.contains("0x1234"), "{err}");
    }

    #[test]
    fn invalid_input_is_rejected() {
        let scenario = parse(
            r#"
            name = "bad"
            description = "not binary"
            input = "01x1"
            "#,
        );
        let err = run(&scenario).unwrap_err();
        assert!(format!("{err:#}").contains("only 0s and 1s"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = run_scenario(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
