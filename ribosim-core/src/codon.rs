//! Codon-property reference table.
//!
//! The table is a line-oriented record set, one codon per line, fields
//! separated by a single space: `<codon> <amino_acid_label> [<mass>
//! <charge>]`. Mass and charge are present for every row except rows
//! labeled `STOP`. The table is loaded once, before any translation
//! occurs, and is read-only afterwards.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::constants::BUILTIN_CODON_TABLE;
use crate::types::RibosimError;

/// Label used by table rows that mark translation stops.
pub const STOP_LABEL: &str = "STOP";

/// One row of the codon-property table.
///
/// Mass and charge are absent exactly when the row is a stop row, or
/// when the source row was malformed; a malformed row propagates
/// missing values rather than aborting the load.
#[derive(Debug, Clone, PartialEq)]
pub struct CodonEntry {
    /// 3-symbol RNA triplet.
    pub codon: String,
    /// Amino-acid label, e.g. `Phe`, or [`STOP_LABEL`].
    pub amino_acid: String,
    /// Residue mass in unified atomic mass units, if present.
    pub mass: Option<f64>,
    /// Net charge, if present.
    pub charge: Option<i64>,
}

/// Immutable codon lookup table.
///
/// Constructed explicitly and passed into the translator so the
/// pipeline carries no hidden shared state.
#[derive(Debug, Clone)]
pub struct CodonTable {
    entries: Vec<CodonEntry>,
    index: HashMap<String, usize>,
}

impl CodonTable {
    /// Build the table that ships with the crate (the standard genetic
    /// code with residue masses and net charges).
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_lines(BUILTIN_CODON_TABLE.lines())
    }

    /// Load a table from a file in the line-oriented external format.
    ///
    /// # Errors
    ///
    /// Returns [`RibosimError::Io`] if the file cannot be read.
    /// Malformed rows do not fail the load; their missing fields stay
    /// absent.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RibosimError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a table from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`RibosimError::Io`] if reading fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RibosimError> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            // Trailing \r is stripped so Windows tables load unchanged.
            lines.push(line?.trim_end_matches('\r').to_string());
        }
        Ok(Self::from_lines(lines.iter().map(String::as_str)))
    }

    fn from_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> Self {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(' ').collect();
            let codon = fields[0].to_string();
            let amino_acid = fields.get(1).copied().unwrap_or_default().to_string();
            let (mass, charge) = if amino_acid == STOP_LABEL {
                (None, None)
            } else {
                (
                    fields.get(2).and_then(|field| field.parse().ok()),
                    fields.get(3).and_then(|field| field.parse().ok()),
                )
            };

            // First occurrence of a codon wins on duplicates.
            index.entry(codon.clone()).or_insert(entries.len());
            entries.push(CodonEntry {
                codon,
                amino_acid,
                mass,
                charge,
            });
        }

        Self { entries, index }
    }

    /// Look up a codon triplet.
    ///
    /// Returns `None` for triplets absent from the table; the caller
    /// treats a miss as an additive identity rather than an error.
    #[must_use]
    pub fn lookup(&self, codon: &str) -> Option<&CodonEntry> {
        self.index.get(codon).map(|&i| &self.entries[i])
    }

    /// Number of rows loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
