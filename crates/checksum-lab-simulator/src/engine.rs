use crate::trace::{NoiseOutcome, TransmissionReport};
use checksum_lab_abstract::{RandomSource, SimConfig};
use checksum_lab_core::injector::{self, BitFlip};
use checksum_lab_core::{BinaryString, Frame, LabError, SeededRandom, checksum, codec};
use tracing::{debug, info, warn};

/// Chance, in percent, that the channel corrupts a frame.
pub const NOISE_PERCENT: usize = 10;
/// A corrupted frame receives between 1 and this many bit errors.
pub const MAX_NOISE_ERRORS: usize = 3;

/// Sender, noisy channel and receiver for single-shot checksum runs.
pub struct Simulator {
    config: SimConfig,
    rng: Box<dyn RandomSource>,
    seed: Option<u64>,

    // Deterministic fault injection: bits flipped in the next received frame only
    flip_once: Vec<BitFlip>,

    transmissions: u64,
}

impl Simulator {
    /// Build a simulator whose channel RNG is seeded from `config.seed`,
    /// or from the wall clock when no seed is configured.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_clock(),
        };
        let seed = rng.seed();
        info!("Channel RNG seeded with {}", seed);

        let mut sim = Self::with_random(config, Box::new(rng));
        sim.seed = Some(seed);
        sim
    }

    /// Build a simulator around an existing random source.
    pub fn with_random(config: SimConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            config,
            rng,
            seed: None,
            flip_once: Vec::new(),
            transmissions: 0,
        }
    }

    /// Seed of the internal RNG, if the simulator created it.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn transmissions(&self) -> u64 {
        self.transmissions
    }

    /// Register a deterministic fault: flip this bit of the next received frame.
    pub fn add_flip_once(&mut self, flip: BitFlip) {
        self.flip_once.push(flip);
    }

    /// Run one transmission: encode, checksum, seal, pass through the
    /// channel, verify.
    pub fn transmit(&mut self, input: &BinaryString) -> Result<TransmissionReport, LabError> {
        self.transmissions += 1;
        info!(
            "Transmission #{}: {} input bit(s)",
            self.transmissions,
            input.len()
        );

        // 1. Sender
        let payload = codec::encode(input);
        let checksum = checksum::compute(&payload);
        debug!(
            "Encoded {} byte(s), checksum 0x{:04X}",
            payload.len(),
            checksum
        );
        let frame = Frame::seal(payload, checksum);
        if frame.is_padded() {
            debug!("Inserted alignment byte before checksum");
        }

        // 2. Channel
        let mut received = frame.as_bytes().to_vec();
        let requested_errors = self.draw_noise();
        let random_flips =
            injector::inject_errors(&mut received, requested_errors, &mut *self.rng)?;

        let forced_flips = std::mem::take(&mut self.flip_once);
        for flip in &forced_flips {
            debug!("Forcing flip of bit {} in byte {}", flip.bit, flip.byte);
            injector::flip_bit(&mut received, *flip)?;
        }

        let noise = NoiseOutcome {
            requested_errors,
            random_flips,
            forced_flips,
            net_bit_changes: injector::net_bit_changes(frame.as_bytes(), &received),
        };

        // 3. Receiver
        let receiver_sum = checksum::verify(&received);
        let valid = checksum::is_intact(receiver_sum);
        if valid {
            info!("Receiver sum 0x{:04X}: no error detected", receiver_sum);
        } else {
            warn!(
                "Receiver sum 0x{:04X}: error detected ({} bit(s) changed)",
                receiver_sum, noise.net_bit_changes
            );
        }

        Ok(TransmissionReport {
            input: input.clone(),
            payload: frame.payload().to_vec(),
            padded: frame.is_padded(),
            checksum: frame.checksum(),
            sent: frame.into_bytes(),
            received,
            noise,
            receiver_sum,
            valid,
        })
    }

    /// Decide how many random bit errors the channel introduces this time.
    fn draw_noise(&mut self) -> usize {
        if !self.config.noise {
            return 0;
        }
        if self.rng.below(100) < NOISE_PERCENT {
            let errors = self.rng.below(MAX_NOISE_ERRORS) + 1;
            debug!("Channel noise: {} bit error(s)", errors);
            errors
        } else {
            0
        }
    }
}
