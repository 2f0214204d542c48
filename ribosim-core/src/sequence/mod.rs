//! Sequence normalization and transcription.
//!
//! Sequences are immutable strings over the nucleotide alphabet; every
//! transformation produces a new string. DNA form uses `T`, RNA form
//! uses `U`.

/// Nucleotide symbols accepted at the head of a normalized sequence.
const NUCLEOTIDE_SYMBOLS: [char; 5] = ['A', 'T', 'G', 'C', 'U'];

/// Canonicalize raw input text into an uppercase, whitespace-free
/// symbol stream.
///
/// Carriage returns, line feeds, and spaces are removed, the text is
/// uppercased, and any leading characters outside the nucleotide
/// alphabet are dropped (a leading-symbol class filter, which makes
/// normalization idempotent). Never fails; an empty result is valid
/// and simply yields zero matches downstream.
///
/// # Examples
///
/// ```rust
/// use ribosim_core::sequence::normalize;
///
/// assert_eq!(normalize("at gc\r\ntt"), "ATGCTT");
/// assert_eq!(normalize(">atgc"), "ATGC");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != '\r' && c != '\n' && c != ' ')
        .flat_map(char::to_uppercase)
        .collect();

    let head = cleaned
        .char_indices()
        .find(|(_, c)| NUCLEOTIDE_SYMBOLS.contains(c))
        .map_or(cleaned.len(), |(i, _)| i);
    cleaned[head..].to_string()
}

/// Rewrite a DNA-form sequence to RNA form: every `T` becomes `U`.
///
/// The input is expected to be normalized (uppercase), so only the
/// uppercase letter is rewritten.
#[must_use]
pub fn transcribe(dna: &str) -> String {
    dna.replace('T', "U")
}
