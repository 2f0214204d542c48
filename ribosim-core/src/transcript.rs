//! Transcript extraction.
//!
//! Carves a candidate transcript out of the normalized DNA sequence
//! for every (promoter, qualifying terminator) pairing and rewrites it
//! to the RNA alphabet.

use crate::constants::{PROMOTER_SKIP_CONSENSUS, PROMOTER_SKIP_TATA, TERMINATOR_LENGTH};
use crate::sequence::transcribe;
use crate::types::{SignalMatch, Transcript};

/// Number of symbols skipped past a promoter match before transcription
/// starts.
///
/// The skip is decided solely by the second character of the matched
/// text: `A` means the TATA-box alternative matched (skip its full six
/// symbols), anything else means the consensus alternative matched
/// (skip two). This rule is a compatibility contract carried over from
/// the reference behavior and must not be reinterpreted, even where
/// both alternatives could match at the same position.
#[must_use]
pub fn promoter_skip(promoter: &SignalMatch) -> usize {
    if promoter.text.as_bytes().get(1) == Some(&b'A') {
        PROMOTER_SKIP_TATA
    } else {
        PROMOTER_SKIP_CONSENSUS
    }
}

/// Extract every transcript for one promoter.
///
/// Terminators upstream of the promoter are excluded; each surviving
/// terminator yields one transcript spanning from the post-promoter
/// start index through the end of the terminator motif, with `T`
/// rewritten to `U`.
#[must_use]
pub fn extract(
    sequence: &str,
    promoter: &SignalMatch,
    terminators: &[SignalMatch],
) -> Vec<Transcript> {
    let start_index = promoter.offset + promoter_skip(promoter);

    terminators
        .iter()
        .filter(|terminator| terminator.offset >= promoter.offset)
        .map(|terminator| {
            let end_index = terminator.offset + TERMINATOR_LENGTH;
            Transcript {
                rna: transcribe(&sequence[start_index..end_index]),
                start_index,
                end_index,
            }
        })
        .collect()
}
