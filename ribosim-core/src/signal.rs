//! Signal motif location.
//!
//! Finds every non-overlapping occurrence of the promoter and
//! terminator motifs in a normalized sequence. Matches are fully
//! materialized in ascending offset order because downstream stages
//! need random access and filtering.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::constants::{
    INTRON_PATTERN, PROMOTER_CONSENSUS_PATTERN, PROMOTER_TATA_PATTERN, TERMINATOR_PATTERN,
};
use crate::types::SignalMatch;

fn case_insensitive(pattern: &str) -> Regex {
    // Patterns are fixed at compile time; a build failure here is a
    // programming error, not an input error.
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Combined promoter pattern. Both alternatives are tried at every
/// position; the leftmost alternative wins on a tie, so the TATA-box
/// form takes precedence over the degenerate consensus form.
pub static PROMOTER: Lazy<Regex> = Lazy::new(|| {
    case_insensitive(&format!(
        "{PROMOTER_TATA_PATTERN}|{PROMOTER_CONSENSUS_PATTERN}"
    ))
});

/// Terminator pattern, 26 symbols.
pub static TERMINATOR: Lazy<Regex> = Lazy::new(|| case_insensitive(TERMINATOR_PATTERN));

/// Intron span pattern: donor, shortest body, acceptor.
pub static INTRON: Lazy<Regex> = Lazy::new(|| case_insensitive(INTRON_PATTERN));

/// Find all non-overlapping occurrences of `pattern` in `sequence`.
///
/// Each search resumes past the previous occurrence, so offsets are
/// strictly ascending.
///
/// # Examples
///
/// ```rust
/// use ribosim_core::signal::{find_all, PROMOTER};
///
/// let matches = find_all("TATAAACCTATAAA", &PROMOTER);
/// let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
/// assert_eq!(offsets, vec![0, 8]);
/// ```
#[must_use]
pub fn find_all(sequence: &str, pattern: &Regex) -> Vec<SignalMatch> {
    pattern
        .find_iter(sequence)
        .map(|m| SignalMatch::new(m.as_str().to_string(), m.start()))
        .collect()
}
