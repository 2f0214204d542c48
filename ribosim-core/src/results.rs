use crate::types::{ProteinRecord, SignalMatch};

/// Expression pipeline results for a single input sequence.
///
/// Contains one [`TranscriptionUnit`] per promoter found, in promoter
/// order, plus summary statistics about the analyzed sequence.
///
/// # Examples
///
/// ```rust
/// use ribosim_core::{codon::CodonTable, config::RibosimConfig, ExpressionAnalyzer};
///
/// let analyzer = ExpressionAnalyzer::new(RibosimConfig::default(), CodonTable::builtin());
/// let results = analyzer.analyze_sequence("TATAAAATGTTTTGACGCGCGCGAAACGCGCGCGTTTTTTT");
///
/// println!("Sequence length: {}", results.sequence_info.length);
/// for unit in &results.units {
///     for protein in &unit.proteins {
///         println!("{protein}");
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionResults {
    /// One unit per promoter, in ascending promoter offset order.
    pub units: Vec<TranscriptionUnit>,

    /// Statistics for the normalized input sequence.
    pub sequence_info: SequenceInfo,
}

impl ExpressionResults {
    /// Total number of protein records across all units.
    #[must_use]
    pub fn num_proteins(&self) -> usize {
        self.units.iter().map(|unit| unit.proteins.len()).sum()
    }
}

/// All proteins expressed under one promoter.
///
/// Coding sequences are deduplicated within the unit, across every
/// qualifying terminator and splice variant, so each protein record
/// corresponds to exactly one unique coding sequence.
#[derive(Debug, Clone)]
pub struct TranscriptionUnit {
    /// The promoter match that opened this unit.
    pub promoter: SignalMatch,
    /// Translated proteins in first-seen coding-sequence order.
    pub proteins: Vec<ProteinRecord>,
}

/// Information about a processed sequence.
#[derive(Debug, Clone)]
pub struct SequenceInfo {
    /// Length of the normalized sequence in symbols.
    pub length: usize,
    /// Number of promoter matches found.
    pub num_promoters: usize,
    /// Number of terminator matches found.
    pub num_terminators: usize,
}
