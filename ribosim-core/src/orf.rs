//! Open-reading-frame scanning.
//!
//! Locates every start codon within a splice variant and walks forward
//! in codon strides until the first in-frame stop codon.

use crate::constants::{CODON_LENGTH, START_CODON, STOP_CODONS};

/// Find every occurrence of `pattern` in `text`, overlapping
/// occurrences included: each search resumes one symbol past the
/// previous occurrence's start.
fn find_overlapping(text: &str, pattern: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut from = 0;
    while let Some(found) = text[from..].find(pattern) {
        positions.push(from + found);
        from += found + 1;
    }
    positions
}

/// Extract every coding sequence from a splice variant.
///
/// From each `AUG` occurrence the scan advances in strides of three
/// symbols; at the first stop codon (`UGA`, `UAA`, `UAG`) the enclosed
/// span is emitted with the stop codon excluded and the start codon
/// included. A start offset whose scan runs off the end without a stop
/// emits nothing: the partial strand is discarded, never padded or
/// truncated.
///
/// Every emitted coding sequence has a length that is a multiple of
/// three, because the scan both starts and advances codon-aligned.
#[must_use]
pub fn scan(variant: &str) -> Vec<String> {
    let bytes = variant.as_bytes();
    let mut coding_sequences = Vec::new();

    for start in find_overlapping(variant, START_CODON) {
        let mut position = start;
        while position + CODON_LENGTH <= bytes.len() {
            let triplet = &bytes[position..position + CODON_LENGTH];
            if STOP_CODONS.iter().any(|stop| stop.as_bytes() == triplet) {
                let coding = String::from_utf8_lossy(&bytes[start..position]).into_owned();
                coding_sequences.push(coding);
                break;
            }
            position += CODON_LENGTH;
        }
    }

    coding_sequences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_simple_orf() {
        assert_eq!(scan("AUGUUUUGA"), vec!["AUGUUU"]);
    }

    #[test]
    fn test_scan_stop_codon_excluded() {
        for stop in ["UGA", "UAA", "UAG"] {
            let variant = format!("AUGCCC{stop}");
            assert_eq!(scan(&variant), vec!["AUGCCC"]);
        }
    }

    #[test]
    fn test_scan_no_stop_emits_nothing() {
        assert!(scan("AUGUUUCCC").is_empty());
        assert!(scan("AUGUU").is_empty());
    }

    #[test]
    fn test_scan_no_start_emits_nothing() {
        assert!(scan("UUUUGAUAA").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_multiple_starts_independent() {
        // AUGAUG yields starts at offsets 0 and 3; both reach the same
        // stop in frame.
        let found = scan("AUGAUGUGA");
        assert_eq!(found, vec!["AUGAUG", "AUG"]);
    }

    #[test]
    fn test_scan_out_of_frame_stop_ignored() {
        // UGA appears at offset 4 but the frame from the start codon
        // never lands on it; the in-frame stop is the trailing UAA.
        let found = scan("AUGCUGACCUAA");
        assert_eq!(found, vec!["AUGCUGACC"]);
    }

    #[test]
    fn test_scan_lengths_are_codon_multiples() {
        let variants = [
            "AUGUUUUGA",
            "AUGAUGUGA",
            "CCAUGGGUUUUAACCAUGUGA",
            "AUGGUAAGUCAGUAA",
        ];
        for variant in variants {
            for cds in scan(variant) {
                assert_eq!(cds.len() % 3, 0, "odd length from {variant}");
            }
        }
    }

    #[test]
    fn test_scan_start_inside_later_frame() {
        // A start codon straddling positions 2..5 establishes its own
        // frame independent of position 0.
        let found = scan("CCAUGUUUUAG");
        assert_eq!(found, vec!["AUGUUU"]);
    }
}
