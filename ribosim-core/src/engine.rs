//! Main expression analysis engine.
//!
//! [`ExpressionAnalyzer`] orchestrates the six pipeline stages in their
//! fixed order: normalization, signal location, transcript extraction,
//! splice-variant enumeration, ORF scanning, and codon translation.
//! Each stage's output is the next stage's sole input, and a full run
//! over one sequence is synchronous; only whole invocations are
//! parallelized.

use std::fs;
use std::path::Path;

use log::debug;
use rayon::prelude::*;

use crate::codon::CodonTable;
use crate::config::RibosimConfig;
use crate::results::{ExpressionResults, SequenceInfo, TranscriptionUnit};
use crate::sequence::normalize;
use crate::signal::{find_all, PROMOTER, TERMINATOR};
use crate::splice::enumerate_variants;
use crate::transcript::extract;
use crate::translate::translate;
use crate::types::RibosimError;
use crate::{orf, types::SignalMatch};

/// Expression pipeline analyzer.
///
/// Holds the configuration and the codon-property table; the table is
/// loaded once at construction and treated as read-only for the
/// analyzer's lifetime.
///
/// # Examples
///
/// ```rust
/// use ribosim_core::{codon::CodonTable, config::RibosimConfig, ExpressionAnalyzer};
///
/// let analyzer = ExpressionAnalyzer::new(RibosimConfig::default(), CodonTable::builtin());
/// let results = analyzer.analyze_sequence("TATAAAATGTTTTGACGCGCGCGAAACGCGCGCGTTTTTTT");
/// assert_eq!(results.num_proteins(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionAnalyzer {
    /// Analysis configuration.
    pub config: RibosimConfig,
    table: CodonTable,
}

impl ExpressionAnalyzer {
    /// Create an analyzer from a configuration and a codon table.
    #[must_use]
    pub const fn new(config: RibosimConfig, table: CodonTable) -> Self {
        Self { config, table }
    }

    /// Create an analyzer with the default configuration and the
    /// built-in codon table.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RibosimConfig::default(), CodonTable::builtin())
    }

    /// Access the codon table in use.
    #[must_use]
    pub const fn codon_table(&self) -> &CodonTable {
        &self.table
    }

    /// Run the full pipeline over one raw input sequence.
    ///
    /// Never fails: inputs with no promoters, no terminators, or no
    /// open reading frames simply produce empty units.
    #[must_use]
    pub fn analyze_sequence(&self, raw: &str) -> ExpressionResults {
        let sequence = normalize(raw);

        let promoters = find_all(&sequence, &PROMOTER);
        let terminators = find_all(&sequence, &TERMINATOR);
        debug!(
            "normalized {} symbols: {} promoter(s), {} terminator(s)",
            sequence.len(),
            promoters.len(),
            terminators.len()
        );

        let units = promoters
            .iter()
            .map(|promoter| self.express_unit(&sequence, promoter, &terminators))
            .collect();

        ExpressionResults {
            units,
            sequence_info: SequenceInfo {
                length: sequence.len(),
                num_promoters: promoters.len(),
                num_terminators: terminators.len(),
            },
        }
    }

    /// Run the pipeline over the contents of a raw text file.
    ///
    /// # Errors
    ///
    /// Returns [`RibosimError::Io`] if the file cannot be read; no
    /// partial output is produced in that case.
    pub fn analyze_text_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<ExpressionResults, RibosimError> {
        let raw = fs::read_to_string(path)?;
        Ok(self.analyze_sequence(&raw))
    }

    /// Analyze several input files, one invocation per file, in
    /// parallel.
    ///
    /// Invocations are independent, so they parallelize trivially; the
    /// internal stages of each invocation still run in their fixed
    /// order. Results are returned in input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`RibosimError`] encountered; configuring the
    /// thread pool from [`RibosimConfig::num_threads`] may also fail.
    pub fn analyze_files<P: AsRef<Path> + Sync>(
        &self,
        paths: &[P],
    ) -> Result<Vec<ExpressionResults>, RibosimError> {
        if let Some(num_threads) = self.config.num_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| RibosimError::ThreadPool(e.to_string()))?;
        }

        paths
            .par_iter()
            .map(|path| self.analyze_text_file(path))
            .collect()
    }

    /// Express everything under one promoter: extract a transcript per
    /// qualifying terminator, enumerate splice variants, scan for open
    /// reading frames, and translate the deduplicated coding
    /// sequences.
    fn express_unit(
        &self,
        sequence: &str,
        promoter: &SignalMatch,
        terminators: &[SignalMatch],
    ) -> TranscriptionUnit {
        let transcripts = extract(sequence, promoter, terminators);

        let mut coding_sequences = Vec::new();
        for transcript in &transcripts {
            for variant in enumerate_variants(&transcript.rna) {
                coding_sequences.extend(orf::scan(&variant));
            }
        }
        debug!(
            "promoter at {}: {} transcript(s), {} coding sequence(s) before dedup",
            promoter.offset,
            transcripts.len(),
            coding_sequences.len()
        );

        TranscriptionUnit {
            promoter: promoter.clone(),
            proteins: translate(&coding_sequences, &self.table),
        }
    }
}

impl Default for ExpressionAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERMINATOR_TEXT: &str = "CGCGCGCGAAACGCGCGCGTTTTTTT";

    #[test]
    fn test_analyze_simple_gene() {
        let analyzer = ExpressionAnalyzer::with_defaults();
        let sequence = format!("TATAAAATGTTTTGA{TERMINATOR_TEXT}");
        let results = analyzer.analyze_sequence(&sequence);

        assert_eq!(results.sequence_info.num_promoters, 1);
        assert_eq!(results.sequence_info.num_terminators, 1);
        assert_eq!(results.units.len(), 1);

        let proteins = &results.units[0].proteins;
        assert_eq!(proteins.len(), 1);
        assert_eq!(proteins[0].to_string(), "MetPhe 278.3692u 0e");
    }

    #[test]
    fn test_analyze_spliced_gene() {
        // One intron between two exon fragments; only the variant with
        // both fragments yields a complete reading frame.
        let analyzer = ExpressionAnalyzer::with_defaults();
        let sequence = format!("TATAAAATGAAAGTAAGTCAGTTTTAA{TERMINATOR_TEXT}");
        let results = analyzer.analyze_sequence(&sequence);

        let unit = results
            .units
            .iter()
            .find(|unit| unit.promoter.offset == 0)
            .expect("TATA-box unit");
        assert_eq!(unit.proteins.len(), 1);
        assert_eq!(unit.proteins[0].to_string(), "MetLysPhe 406.5433u 1e");
    }

    #[test]
    fn test_analyze_empty_input() {
        let analyzer = ExpressionAnalyzer::with_defaults();
        let results = analyzer.analyze_sequence("");
        assert_eq!(results.sequence_info.length, 0);
        assert!(results.units.is_empty());
        assert_eq!(results.num_proteins(), 0);
    }

    #[test]
    fn test_analyze_no_terminator_yields_empty_unit() {
        let analyzer = ExpressionAnalyzer::with_defaults();
        let results = analyzer.analyze_sequence("TATAAAATGTTTTGA");
        assert_eq!(results.sequence_info.num_promoters, 1);
        assert_eq!(results.units.len(), 1);
        assert!(results.units[0].proteins.is_empty());
    }

    #[test]
    fn test_analyze_lowercase_input_matches_uppercase() {
        let analyzer = ExpressionAnalyzer::with_defaults();
        let upper = format!("TATAAAATGTTTTGA{TERMINATOR_TEXT}");
        let lower = upper.to_lowercase();

        let upper_results = analyzer.analyze_sequence(&upper);
        let lower_results = analyzer.analyze_sequence(&lower);
        assert_eq!(upper_results.num_proteins(), lower_results.num_proteins());
        assert_eq!(
            upper_results.units[0].proteins[0],
            lower_results.units[0].proteins[0]
        );
    }

    #[test]
    fn test_analyze_duplicate_coding_sequences_collapse() {
        // Two qualifying terminators produce overlapping transcripts
        // whose variants repeat the same coding sequence; the unit
        // reports it once.
        let analyzer = ExpressionAnalyzer::with_defaults();
        let sequence = format!("TATAAAATGTTTTGA{TERMINATOR_TEXT}GG{TERMINATOR_TEXT}");
        let results = analyzer.analyze_sequence(&sequence);

        let unit = &results.units[0];
        let met_phe_count = unit
            .proteins
            .iter()
            .filter(|p| p.amino_acids == "MetPhe")
            .count();
        assert_eq!(met_phe_count, 1);
    }

    #[test]
    fn test_analyze_text_file_missing() {
        let analyzer = ExpressionAnalyzer::with_defaults();
        let result = analyzer.analyze_text_file("no_such_input.txt");
        assert!(matches!(result, Err(RibosimError::Io(_))));
    }

    #[test]
    fn test_analyze_files_parallel() {
        use std::io::Write;

        let analyzer = ExpressionAnalyzer::with_defaults();
        let dir = tempfile::tempdir().unwrap();

        let mut paths = Vec::new();
        for i in 0..3 {
            let path = dir.path().join(format!("seq_{i}.txt"));
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "TATAAAATGTTTTGA{TERMINATOR_TEXT}").unwrap();
            paths.push(path);
        }

        let results = analyzer.analyze_files(&paths).unwrap();
        assert_eq!(results.len(), 3);
        for result in &results {
            assert_eq!(result.num_proteins(), 1);
        }
    }
}
