//! Fixed motif definitions and reference data for the expression pipeline.
//!
//! The patterns here are a compatibility contract: downstream output must
//! match the reference definitions byte for byte, so they are kept as
//! verbatim regular-expression sources rather than being re-derived.

/// TATA-box-like promoter motif: two `TA` repeats followed by two `A`s.
pub const PROMOTER_TATA_PATTERN: &str = "(TA){2}A{2}";

/// Degenerate promoter consensus motif: (C/T)(C/T)A(any)(A/T)(C/T)(C/T).
pub const PROMOTER_CONSENSUS_PATTERN: &str = "[CT]{2}A[ATGC][AT][CT]{2}";

/// Terminator motif: `(CG){4}A{3}(CG){4}T{7}`, exactly 26 symbols.
pub const TERMINATOR_PATTERN: &str = "(CG){4}A{3}(CG){4}T{7}";

/// Length of the terminator motif in symbols.
///
/// A transcript extends through the entire matched terminator, so this
/// trailing window is added to the terminator's start offset.
pub const TERMINATOR_LENGTH: usize = 26;

/// Intron span: donor `GU(A/G)AGU`, a shortest-possible body of RNA
/// symbols (possibly empty), and the nearest `CAG` acceptor.
pub const INTRON_PATTERN: &str = "GU[AG]AGU[ACGU]*?CAG";

/// Promoter skip when the TATA-box alternative matched (second symbol `A`).
pub const PROMOTER_SKIP_TATA: usize = 6;

/// Promoter skip when the consensus alternative matched.
pub const PROMOTER_SKIP_CONSENSUS: usize = 2;

/// Translation start codon.
pub const START_CODON: &str = "AUG";

/// Translation stop codons.
pub const STOP_CODONS: [&str; 3] = ["UGA", "UAA", "UAG"];

/// Number of symbols per codon.
pub const CODON_LENGTH: usize = 3;

/// Built-in codon-property table in the external line-oriented format:
/// `<codon> <amino_acid_label> [<mass> <charge>]`, one codon per line.
///
/// Rows labeled `STOP` carry no mass or charge. Masses are residue
/// masses in unified atomic mass units; charges are net side-chain
/// charges at physiological pH.
pub const BUILTIN_CODON_TABLE: &str = "\
UUU Phe 147.1766 0
UUC Phe 147.1766 0
UUA Leu 113.1594 0
UUG Leu 113.1594 0
UCU Ser 87.0782 0
UCC Ser 87.0782 0
UCA Ser 87.0782 0
UCG Ser 87.0782 0
UAU Tyr 163.1760 0
UAC Tyr 163.1760 0
UAG STOP
UAA STOP
UGU Cys 103.1388 0
UGC Cys 103.1388 0
UGA STOP
UGG Trp 186.2132 0
CUU Leu 113.1594 0
CUC Leu 113.1594 0
CUA Leu 113.1594 0
CUG Leu 113.1594 0
CCU Pro 97.1167 0
CCC Pro 97.1167 0
CCA Pro 97.1167 0
CCG Pro 97.1167 0
CAU His 137.1411 1
CAC His 137.1411 1
CAA Gln 128.1307 0
CAG Gln 128.1307 0
CGU Arg 156.1875 1
CGC Arg 156.1875 1
CGA Arg 156.1875 1
CGG Arg 156.1875 1
AUU Ile 113.1594 0
AUC Ile 113.1594 0
AUA Ile 113.1594 0
AUG Met 131.1926 0
ACU Thr 101.1051 0
ACC Thr 101.1051 0
ACA Thr 101.1051 0
ACG Thr 101.1051 0
AAU Asn 114.1038 0
AAC Asn 114.1038 0
AAA Lys 128.1741 1
AAG Lys 128.1741 1
AGU Ser 87.0782 0
AGC Ser 87.0782 0
AGA Arg 156.1875 1
AGG Arg 156.1875 1
GUU Val 99.1326 0
GUC Val 99.1326 0
GUA Val 99.1326 0
GUG Val 99.1326 0
GCU Ala 71.0788 0
GCC Ala 71.0788 0
GCA Ala 71.0788 0
GCG Ala 71.0788 0
GAU Asp 115.0886 -1
GAC Asp 115.0886 -1
GAA Glu 129.1155 -1
GAG Glu 129.1155 -1
GGU Gly 57.0519 0
GGC Gly 57.0519 0
GGA Gly 57.0519 0
GGG Gly 57.0519 0
";
