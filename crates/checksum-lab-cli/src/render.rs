use checksum_lab_core::codec::byte_bits;
use checksum_lab_core::injector::BitFlip;
use checksum_lab_simulator::TransmissionReport;
use checksum_lab_simulator::trace::bits16;
use std::io::{self, Write};

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

fn describe_flips(flips: &[BitFlip]) -> String {
    flips
        .iter()
        .map(|flip| format!("byte {} bit {}", flip.byte, flip.bit))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the sender-to-receiver narrative for one transmission.
pub fn write_report(out: &mut impl Write, report: &TransmissionReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Transmission Simulation Steps ===")?;

    heading(out, "Step 1: Original Binary Input")?;
    if report.input.is_empty() {
        writeln!(out, "(empty)")?;
    } else {
        writeln!(out, "{}", report.input)?;
    }

    heading(out, "Step 2: Binary Data Converted to Bytes")?;
    if report.payload.is_empty() {
        writeln!(out, "(no bytes)")?;
    } else {
        writeln!(out, "{}", byte_bits(&report.payload).join(" "))?;
    }

    heading(out, "Step 3: Checksum Computation")?;
    writeln!(out, "Sender Checksum (Hex):    {}", report.checksum_hex())?;
    writeln!(out, "Sender Checksum (Binary): {}", report.checksum_bits())?;

    heading(out, "Step 4: Data with Checksum Appended (16-bit words)")?;
    for word in report.sent_words() {
        writeln!(out, "{}", bits16(word))?;
    }
    if report.padded {
        writeln!(out, "(zero byte inserted to align the checksum)")?;
    }

    writeln!(out)?;
    let noise = &report.noise;
    if noise.requested_errors > 0 {
        writeln!(
            out,
            "⚠  Noise simulated: {} bit error(s) introduced ({}).",
            noise.requested_errors,
            describe_flips(&noise.random_flips)
        )?;
    }
    if !noise.forced_flips.is_empty() {
        writeln!(
            out,
            "⚠  Forced bit flip(s): {}.",
            describe_flips(&noise.forced_flips)
        )?;
    }
    if noise.is_clean() {
        writeln!(out, "✅ Clean transmission (no errors introduced).")?;
    } else if noise.cancelled_out() {
        writeln!(out, "   The flips cancelled out; the frame arrived unchanged.")?;
    }

    heading(out, "Step 5: Receiver's Verification")?;
    writeln!(out, "Receiver Sum (Hex):    {}", report.receiver_sum_hex())?;
    writeln!(out, "Receiver Sum (Binary): {}", report.receiver_sum_bits())?;

    heading(out, "Step 6: Verification Result")?;
    if report.valid {
        writeln!(
            out,
            "✅ Checksum Validation (Binary): {}",
            report.receiver_sum_bits()
        )?;
        writeln!(out, "✅ No error detected. Data is valid.")?;
    } else {
        writeln!(
            out,
            "❌ Checksum Validation (Binary): {}",
            report.receiver_sum_bits()
        )?;
        writeln!(out, "❌ Error detected! Data is corrupted.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use checksum_lab_abstract::SimConfig;
    use checksum_lab_simulator::Simulator;

    fn rendered(sim: &mut Simulator, input: &str) -> String {
        let report = sim.transmit(&input.parse().unwrap()).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn clean_run_shows_every_step() {
        let mut sim = Simulator::new(SimConfig::clean(3));
        let text = rendered(&mut sim, "0100100001100101");

        assert!(text.contains("01001000 01100101"));
        assert!(text.contains("Sender Checksum (Hex):    0xB79A"));
        assert!(text.contains("Sender Checksum (Binary): 1011011110011010"));
        assert!(text.contains("0100100001100101\n1011011110011010\n"));
        assert!(text.contains("Clean transmission"));
        assert!(text.contains("Receiver Sum (Hex):    0xFFFF"));
        assert!(text.contains("No error detected. Data is valid."));
    }

    #[test]
    fn forced_flip_is_reported_as_corruption() {
        let mut sim = Simulator::new(SimConfig::clean(3));
        sim.add_flip_once(BitFlip::new(0, 3));
        let text = rendered(&mut sim, "0100100001100101");

        assert!(text.contains("Forced bit flip(s): byte 0 bit 3."));
        assert!(!text.contains("Clean transmission"));
        assert!(text.contains("Receiver Sum (Hex):    0xF7FF"));
        assert!(text.contains("Error detected! Data is corrupted."));
    }

    #[test]
    fn empty_and_padded_inputs_are_labelled() {
        let mut sim = Simulator::new(SimConfig::clean(3));
        let empty = rendered(&mut sim, "");
        assert!(empty.contains("(empty)"));
        assert!(empty.contains("(no bytes)"));

        let odd = rendered(&mut sim, "101");
        assert!(odd.contains("10100000"));
        assert!(odd.contains("zero byte inserted"));
    }
}
