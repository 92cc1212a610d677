use crate::render::write_report;
use anyhow::Result;
use checksum_lab_core::BinaryString;
use checksum_lab_simulator::{Simulator, TransmissionReport};
use std::io::{BufRead, Write};
use tracing::debug;

const RULE: &str = "==================================================";

fn print_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Internet Checksum (Binary Input) Simulator")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "  1. Enter binary data and calculate checksum")?;
    writeln!(out, "  2. Exit")?;
    writeln!(out, "{RULE}")?;
    write!(out, "Choose an option (1 or 2): ")?;
    out.flush()?;
    Ok(())
}

/// Read one line without its terminator. `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn pause(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> Result<()> {
    write!(out, "{prompt}")?;
    out.flush()?;
    read_line(input)?;
    Ok(())
}

/// Interactive menu loop. Returns the last completed transmission, if any.
pub fn run(
    sim: &mut Simulator,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<Option<TransmissionReport>> {
    let mut last = None;

    loop {
        print_menu(&mut out)?;
        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        match choice.trim() {
            "1" => {
                writeln!(out)?;
                writeln!(
                    out,
                    "Enter binary string (only 0s and 1s, e.g., 0100100001100101):"
                )?;
                out.flush()?;
                let Some(raw) = read_line(&mut input)? else {
                    break;
                };

                let binary: BinaryString = match raw.trim().parse() {
                    Ok(binary) => binary,
                    Err(err) => {
                        debug!("Rejected input: {}", err);
                        writeln!(out, "❌ Invalid binary input. Only 0s and 1s are allowed.")?;
                        pause(&mut input, &mut out, "Press Enter to continue...")?;
                        continue;
                    }
                };

                let report = sim.transmit(&binary)?;
                write_report(&mut out, &report)?;
                last = Some(report);
                writeln!(out)?;
                pause(
                    &mut input,
                    &mut out,
                    "Press Enter to return to the main menu...",
                )?;
            }
            "2" => {
                writeln!(out)?;
                writeln!(
                    out,
                    "Thank you for using the Internet Checksum Simulator. Goodbye!"
                )?;
                break;
            }
            _ => {
                writeln!(out)?;
                writeln!(out, "❌ Invalid choice. Please select a valid option.")?;
            }
        }
    }

    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use checksum_lab_abstract::SimConfig;
    use std::io::Cursor;

    fn session(script: &str) -> (Option<TransmissionReport>, String) {
        let mut sim = Simulator::new(SimConfig::clean(11));
        let mut out = Vec::new();
        let last = run(&mut sim, Cursor::new(script.to_string()), &mut out).unwrap();
        (last, String::from_utf8(out).unwrap())
    }

    #[test]
    fn transmits_then_exits() {
        let (last, text) = session("1\n0100100001100101\n\n2\n");
        let report = last.unwrap();
        assert_eq!(report.checksum, 0xB79A);
        assert!(report.valid);
        assert!(text.contains("Sender Checksum (Hex):    0xB79A"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn invalid_binary_reprompts() {
        let (last, text) = session("1\n01a1\n\n1\n101\n\n2\n");
        assert!(text.contains("Invalid binary input"));
        assert_eq!(last.unwrap().payload, vec![0xA0]);
    }

    #[test]
    fn unknown_choice_is_reported() {
        let (last, text) = session("9\n2\n");
        assert!(last.is_none());
        assert!(text.contains("Invalid choice"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let (last, _) = session("1\n");
        assert!(last.is_none());

        let (last, _) = session("");
        assert!(last.is_none());
    }

    #[test]
    fn accepts_windows_line_endings() {
        let (last, _) = session("1\r\n1111\r\n\r\n2\r\n");
        assert_eq!(last.unwrap().payload, vec![0xF0]);
    }
}
