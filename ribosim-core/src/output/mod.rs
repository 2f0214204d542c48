//! Output formatting for expression results.
//!
//! One line per unique translated protein: the concatenated amino-acid
//! labels, the total mass to four decimal places with a `u` suffix, and
//! the net charge with an `e` suffix. Units (one block per promoter)
//! are separated by a blank line.
//!
//! # Examples
//!
//! ```rust
//! use ribosim_core::{output::write_results, ExpressionAnalyzer};
//!
//! let analyzer = ExpressionAnalyzer::with_defaults();
//! let results = analyzer.analyze_sequence("TATAAAATGTTTTGACGCGCGCGAAACGCGCGCGTTTTTTT");
//!
//! let mut buffer = Vec::new();
//! write_results(&mut buffer, &results)?;
//! assert_eq!(String::from_utf8(buffer).unwrap(), "MetPhe 278.3692u 0e\n");
//! # Ok::<(), ribosim_core::RibosimError>(())
//! ```

use std::io::Write;

use crate::results::ExpressionResults;
use crate::types::RibosimError;

/// Write expression results as plain text.
///
/// # Errors
///
/// Returns [`RibosimError::Io`] if writing fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &ExpressionResults,
) -> Result<(), RibosimError> {
    for (index, unit) in results.units.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        for protein in &unit.proteins {
            writeln!(writer, "{protein}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{SequenceInfo, TranscriptionUnit};
    use crate::types::{ProteinRecord, SignalMatch};
    use std::io::Cursor;

    fn unit(offset: usize, proteins: Vec<ProteinRecord>) -> TranscriptionUnit {
        TranscriptionUnit {
            promoter: SignalMatch::new("TATAAA".to_string(), offset),
            proteins,
        }
    }

    fn record(labels: &str, mass: f64, charge: i64) -> ProteinRecord {
        ProteinRecord {
            amino_acids: labels.to_string(),
            total_mass: mass,
            total_charge: charge,
        }
    }

    #[test]
    fn test_write_single_unit() {
        let results = ExpressionResults {
            units: vec![unit(0, vec![record("MetPhe", 278.3692, 0)])],
            sequence_info: SequenceInfo {
                length: 41,
                num_promoters: 1,
                num_terminators: 1,
            },
        };

        let mut buffer = Vec::new();
        write_results(&mut Cursor::new(&mut buffer), &results).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "MetPhe 278.3692u 0e\n");
    }

    #[test]
    fn test_write_units_blank_line_separated() {
        let results = ExpressionResults {
            units: vec![
                unit(0, vec![record("Met", 131.1926, 0)]),
                unit(20, vec![record("Lys", 128.1741, 1)]),
            ],
            sequence_info: SequenceInfo {
                length: 80,
                num_promoters: 2,
                num_terminators: 1,
            },
        };

        let mut buffer = Vec::new();
        write_results(&mut Cursor::new(&mut buffer), &results).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Met 131.1926u 0e\n\nLys 128.1741u 1e\n"
        );
    }

    #[test]
    fn test_write_empty_results() {
        let results = ExpressionResults {
            units: vec![],
            sequence_info: SequenceInfo {
                length: 0,
                num_promoters: 0,
                num_terminators: 0,
            },
        };

        let mut buffer = Vec::new();
        write_results(&mut Cursor::new(&mut buffer), &results).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_write_mass_rendered_to_four_decimals() {
        let results = ExpressionResults {
            units: vec![unit(0, vec![record("Gly", 57.0519, 0)])],
            sequence_info: SequenceInfo {
                length: 10,
                num_promoters: 1,
                num_terminators: 1,
            },
        };

        let mut buffer = Vec::new();
        write_results(&mut Cursor::new(&mut buffer), &results).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Gly 57.0519u 0e\n");
    }
}
