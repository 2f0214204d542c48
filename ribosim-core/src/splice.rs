//! Splice-variant enumeration.
//!
//! Detects intron spans inside an RNA transcript, partitions the
//! transcript into exon fragments, and enumerates every
//! inclusion/exclusion subset of fragments as a distinct variant.
//! The enumeration is deliberately exponential in the fragment count:
//! every one of the `2^n` subsets is a valid alternative-splicing
//! outcome, and the full power set must be produced without capping,
//! sampling, or deduplication.

use crate::signal::INTRON;

/// Partition a transcript into exon fragments by removing every
/// non-overlapping intron span found in one left-to-right pass.
///
/// An intron begins at a donor motif and ends at the nearest
/// subsequent acceptor; an empty body between the two is a valid
/// intron. With `k` introns the transcript splits into `k + 1`
/// fragments, edge fragments included even when empty.
#[must_use]
pub fn split_exons(rna: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut previous_end = 0;

    for span in INTRON.find_iter(rna) {
        fragments.push(rna[previous_end..span.start()].to_string());
        previous_end = span.end();
    }
    fragments.push(rna[previous_end..].to_string());

    fragments
}

/// Enumerate every splice variant of a transcript.
///
/// For every mask in `[0, 2^n)` the variant is the concatenation, in
/// original order, of each fragment whose bit is set; excluded
/// fragments contribute nothing. Mask 0 yields the empty string and
/// mask `2^n - 1` the fully spliced transcript. Variants with
/// identical text are all kept; deduplication happens after ORF
/// scanning.
#[must_use]
pub fn enumerate_variants(rna: &str) -> Vec<String> {
    let fragments = split_exons(rna);
    let variant_count = 1u64 << fragments.len();

    (0..variant_count)
        .map(|mask| {
            fragments
                .iter()
                .enumerate()
                .filter(|(index, _)| (mask >> index) & 1 == 1)
                .map(|(_, fragment)| fragment.as_str())
                .collect()
        })
        .collect()
}
