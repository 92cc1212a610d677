mod menu;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{Level, info, warn};

use checksum_lab_abstract::SimConfig;
use checksum_lab_core::BinaryString;
use checksum_lab_simulator::{Simulator, TransmissionReport, scenario_runner};

#[derive(Parser, Debug)]
#[command(author, version, about = "Internet checksum transmission simulator")]
struct Args {
    /// Transmit this binary string once instead of opening the menu.
    #[arg(long)]
    input: Option<String>,

    /// Load a scenario from disk and check its assertions.
    /// The scenario's own [config] table takes precedence over --seed/--no-noise.
    #[arg(long, conflicts_with = "input")]
    scenario: Option<PathBuf>,

    /// Seed for the channel RNG. Defaults to the wall clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the random noise stage.
    #[arg(long, default_value_t = false)]
    no_noise: bool,

    /// Write a JSON trace of the last transmission.
    #[arg(long)]
    trace_out: Option<PathBuf>,

    /// Log every pipeline stage.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            noise: !self.no_noise,
        }
    }

    fn is_interactive(&self) -> bool {
        self.input.is_none() && self.scenario.is_none()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.is_interactive());
    info!("checksum-lab starting…");

    let report = if let Some(path) = &args.scenario {
        let report = scenario_runner::run_scenario(path)?;
        render::write_report(&mut io::stdout().lock(), &report)?;
        info!("Scenario passed.");
        Some(report)
    } else if let Some(raw) = &args.input {
        let input: BinaryString = raw.trim().parse().context("Invalid --input")?;
        let mut sim = Simulator::new(args.sim_config());
        let report = sim.transmit(&input)?;
        render::write_report(&mut io::stdout().lock(), &report)?;
        Some(report)
    } else {
        let mut sim = Simulator::new(args.sim_config());
        menu::run(&mut sim, io::stdin().lock(), io::stdout().lock())?
    };

    if let Some(trace_path) = &args.trace_out {
        match &report {
            Some(report) => write_trace(trace_path, report)?,
            None => warn!("No transmission completed; trace not written"),
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, interactive: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if interactive {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn write_trace(path: &Path, report: &TransmissionReport) -> Result<()> {
    let data =
        serde_json::to_vec_pretty(report).context("Failed to serialize transmission trace")?;
    fs::write(path, &data)
        .with_context(|| format!("Failed to write trace file {}", path.display()))?;
    info!("Trace written to {}", path.display());
    Ok(())
}
