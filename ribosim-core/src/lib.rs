//! # Ribosim - Gene Expression Pipeline
//!
//! A simplified simulation of gene expression: given a raw nucleotide
//! sequence, ribosim locates transcription start and end signals,
//! performs splicing under combinatorial alternative-splicing
//! assumptions, scans the resulting transcripts for open reading
//! frames, and translates each frame into amino acids with aggregate
//! mass and net charge.
//!
//! ## Pipeline
//!
//! The six stages run strictly in order; each stage's output is the
//! next stage's sole input:
//!
//! 1. [`sequence::normalize`] — canonicalize raw text into an
//!    uppercase, whitespace-free nucleotide stream.
//! 2. [`signal`] — locate every promoter and terminator motif.
//! 3. [`transcript`] — carve one transcript per (promoter, qualifying
//!    terminator) pairing and rewrite it to the RNA alphabet.
//! 4. [`splice`] — detect introns and enumerate every exon-fragment
//!    subset as a splice variant (the full `2^n` power set).
//! 5. [`orf`] — extract coding sequences from start codon to first
//!    in-frame stop codon.
//! 6. [`translate`] — map codons to amino acids, accumulating mass and
//!    charge, one record per unique coding sequence.
//!
//! ## Quick Start
//!
//! ```rust
//! use ribosim_core::ExpressionAnalyzer;
//!
//! let analyzer = ExpressionAnalyzer::with_defaults();
//! let results = analyzer.analyze_sequence("TATAAAATGTTTTGACGCGCGCGAAACGCGCGCGTTTTTTT");
//!
//! for unit in &results.units {
//!     for protein in &unit.proteins {
//!         println!("{protein}");
//!     }
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Analysis configuration
//! - [`engine`]: Pipeline orchestration and file input
//! - [`types`]: Core value types and the error enum
//! - [`results`]: Expression results per promoter
//! - [`codon`]: Codon-property table loading and lookup
//! - [`sequence`]: Normalization and DNA-to-RNA transcription
//! - [`signal`]: Promoter/terminator/intron motif location
//! - [`transcript`]: Transcript extraction
//! - [`splice`]: Splice-variant enumeration
//! - [`orf`]: Open-reading-frame scanning
//! - [`translate`]: Codon translation and accumulation
//! - [`output`]: Plain-text result formatting
//!
//! ## Cost model
//!
//! Splice-variant enumeration is exponential in the number of exon
//! fragments by design: every inclusion subset is a distinct variant.
//! All stages operate on bounded in-memory text and terminate by
//! construction.

pub mod codon;
pub mod config;
pub mod constants;
pub mod engine;
pub mod orf;
pub mod output;
pub mod results;
pub mod sequence;
pub mod signal;
pub mod splice;
pub mod transcript;
pub mod translate;
pub mod types;

pub use engine::ExpressionAnalyzer;
pub use results::{ExpressionResults, SequenceInfo, TranscriptionUnit};
pub use types::{ProteinRecord, RibosimError, SignalMatch, Transcript};
