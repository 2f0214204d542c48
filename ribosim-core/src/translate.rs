//! Codon translation and physical-property accumulation.

use indexmap::IndexSet;

use crate::codon::CodonTable;
use crate::constants::CODON_LENGTH;
use crate::types::ProteinRecord;

/// Translate one coding sequence against the codon-property table.
///
/// The sequence is partitioned into consecutive triplets; a trailing
/// group shorter than a codon is dropped (coding sequences produced by
/// the ORF scanner are always codon-aligned, so this only matters for
/// direct callers). A triplet absent from the table contributes no
/// label, no mass, and no charge; absence is an additive identity, not
/// an error.
#[must_use]
pub fn translate_coding_sequence(coding_sequence: &str, table: &CodonTable) -> ProteinRecord {
    let mut amino_acids = String::new();
    let mut total_mass = 0.0;
    let mut total_charge = 0;

    let bytes = coding_sequence.as_bytes();
    let mut position = 0;
    while position + CODON_LENGTH <= bytes.len() {
        let triplet = std::str::from_utf8(&bytes[position..position + CODON_LENGTH]).ok();
        if let Some(entry) = triplet.and_then(|triplet| table.lookup(triplet)) {
            amino_acids.push_str(&entry.amino_acid);
            total_mass += entry.mass.unwrap_or(0.0);
            total_charge += entry.charge.unwrap_or(0);
        }
        position += CODON_LENGTH;
    }

    ProteinRecord {
        amino_acids,
        total_mass,
        total_charge,
    }
}

/// Translate a batch of coding sequences into protein records.
///
/// Coding sequences are deduplicated by exact text equality before
/// translation, keeping first-seen order, so distinct splice variants
/// or start offsets that happen to produce identical text yield
/// exactly one record.
#[must_use]
pub fn translate<S: AsRef<str>>(coding_sequences: &[S], table: &CodonTable) -> Vec<ProteinRecord> {
    let unique: IndexSet<&str> = coding_sequences.iter().map(|s| s.as_ref()).collect();

    unique
        .iter()
        .map(|coding_sequence| translate_coding_sequence(coding_sequence, table))
        .collect()
}
