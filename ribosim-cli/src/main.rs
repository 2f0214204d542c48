//! # Ribosim CLI - Command-Line Gene Expression Pipeline
//!
//! Runs the ribosim expression pipeline over raw nucleotide sequence
//! files and prints one line per unique translated protein.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze the default input file (input.txt)
//! ribosim
//!
//! # Analyze a specific sequence file
//! ribosim -i sequence.txt
//!
//! # Use an external codon-property table
//! ribosim -i sequence.txt -t translation_table.txt
//!
//! # Write results to a file instead of stdout
//! ribosim -i sequence.txt -o proteins.txt
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>...`: Input sequence file(s) (default: input.txt)
//! - `-t, --table <FILE>`: Codon-property table file (default: built-in)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-j, --threads <N>`: Threads for multi-file analysis
//! - `-q, --quiet`: Suppress the summary on stderr

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use ribosim_core::codon::CodonTable;
use ribosim_core::config::RibosimConfig;
use ribosim_core::output::write_results;
use ribosim_core::ExpressionAnalyzer;

const DEFAULT_INPUT: &str = "input.txt";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Command::new("ribosim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simplified gene-expression pipeline")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .action(ArgAction::Append)
                .help("Input sequence file(s) (default: input.txt)"),
        )
        .arg(
            Arg::new("table")
                .short('t')
                .long("table")
                .value_name("FILE")
                .help("Codon-property table file (default: built-in table)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .help("Number of threads for multi-file analysis"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress the summary on stderr"),
        )
        .get_matches();

    let table = match matches.get_one::<String>("table") {
        Some(path) => CodonTable::from_path(path)
            .with_context(|| format!("failed to load codon table {path}"))?,
        None => CodonTable::builtin(),
    };

    let mut config = RibosimConfig {
        quiet: matches.get_flag("quiet"),
        ..Default::default()
    };
    if let Some(threads) = matches.get_one::<String>("threads") {
        let threads: usize = threads.parse().context("invalid thread count")?;
        config.num_threads = Some(threads);
    }

    let inputs: Vec<String> = match matches.get_many::<String>("input") {
        Some(values) => values.cloned().collect(),
        None => vec![DEFAULT_INPUT.to_string()],
    };

    let analyzer = ExpressionAnalyzer::new(config, table);
    let all_results = analyzer
        .analyze_files(&inputs)
        .context("sequence analysis failed")?;

    let mut writer: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {path}"))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    for results in &all_results {
        write_results(&mut writer, results)?;
    }
    writer.flush()?;

    if !analyzer.config.quiet {
        eprintln!(
            "Analysis complete! Found {} protein(s) in {} sequence(s).",
            all_results
                .iter()
                .map(ribosim_core::ExpressionResults::num_proteins)
                .sum::<usize>(),
            all_results.len()
        );
    }

    Ok(())
}
