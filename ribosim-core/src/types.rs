use std::fmt;

use thiserror::Error;

/// A single occurrence of a signal motif within a searched sequence.
///
/// Offsets are 0-based into the sequence that was searched, and the
/// invariant `offset + text.len() <= searched_sequence.len()` holds for
/// every match produced by [`crate::signal::find_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalMatch {
    /// The matched motif text, exactly as it appears in the sequence.
    pub text: String,
    /// 0-based start offset of the match.
    pub offset: usize,
}

impl SignalMatch {
    /// Create a new signal match.
    #[must_use]
    pub const fn new(text: String, offset: usize) -> Self {
        Self { text, offset }
    }

    /// Exclusive end offset of the match.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// A candidate transcript carved out between one promoter and one
/// qualifying terminator, already rewritten to the RNA alphabet.
///
/// `start_index <= end_index` holds by construction: terminators
/// upstream of the promoter are excluded before extraction, and the
/// terminator's trailing window is longer than any promoter skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// RNA-form sequence (`U` instead of `T`) between the boundaries.
    pub rna: String,
    /// Inclusive start index into the searched DNA sequence.
    pub start_index: usize,
    /// Exclusive end index into the searched DNA sequence.
    pub end_index: usize,
}

/// One translated protein derived from exactly one unique coding sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinRecord {
    /// Concatenated amino-acid labels, no separator.
    pub amino_acids: String,
    /// Sum of residue masses over all recognized codons.
    pub total_mass: f64,
    /// Sum of net charges over all recognized codons.
    pub total_charge: i64,
}

impl fmt::Display for ProteinRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.4}u {}e",
            self.amino_acids, self.total_mass, self.total_charge
        )
    }
}

/// Error types that can occur during expression analysis.
#[derive(Error, Debug)]
pub enum RibosimError {
    /// The sequence source or codon table could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A motif pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    /// Error parsing the codon-property table.
    #[error("Codon table parse error: {0}")]
    CodonTableParse(String),
    /// Thread pool configuration failed.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
