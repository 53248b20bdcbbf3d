use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::ProgressBar;
use itertools::Itertools;

use crate::core::config::{CoverageMode, FeatureConfig, DEFAULT_WINDOW};
use crate::core::io::{self, FastaReader};

use super::args;
use super::output::Output;

pub fn bamfile(pbar: ProgressBar, matches: &ArgMatches) -> Result<PathBuf> {
    pbar.set_message("Parsing path to the input file...");
    let result = matches.get_one::<PathBuf>(args::INPUT).context("Input BAM file is required")?.clone();
    pbar.finish_with_message(format!("Input file path: {}", result.display()));
    Ok(result)
}

pub fn reference(pbar: ProgressBar, matches: &ArgMatches) -> Result<PathBuf> {
    pbar.set_message("Parsing path to the reference assembly...");
    let result = matches.get_one::<PathBuf>(args::REFERENCE).context("Reference assembly is required")?.clone();
    // Builds the fasta index once, before worker threads open their own readers
    FastaReader::new(&result)?;
    pbar.finish_with_message(format!("Path to the reference assembly: {}", result.display()));
    Ok(result)
}

pub fn contigs(pbar: ProgressBar, matches: &ArgMatches, bamfile: &Path) -> Result<Vec<String>> {
    pbar.set_message("Parsing contigs to process...");
    let result: Vec<String> = match matches.get_many::<String>(args::CONTIG) {
        Some(contigs) => contigs.cloned().collect_vec(),
        None => io::contigs(bamfile).context("Failed to list contigs from the BAM header")?,
    };
    if result.len() <= 3 {
        pbar.finish_with_message(format!("Contigs to process: {}", result.iter().join(", ")));
    } else {
        pbar.finish_with_message(format!("Contigs to process: {} in total", result.len()));
    }
    Ok(result)
}

pub fn config(pbar: ProgressBar, matches: &ArgMatches) -> Result<FeatureConfig> {
    pbar.set_message("Parsing feature options...");
    let window = matches.get_one::<usize>(args::WINDOW).copied().unwrap_or(DEFAULT_WINDOW);
    let coverage = matches.get_one::<CoverageMode>(args::COVERAGE).copied().unwrap_or_default();
    let result = FeatureConfig::new(window, coverage)?;

    let reads = match result.coverage() {
        CoverageMode::AllReads => "all aligned reads",
        CoverageMode::ProperOnly => "proper pairs only",
    };
    pbar.finish_with_message(format!("Sequence window: {}bp; coverage counts {}", result.window(), reads));
    Ok(result)
}

pub fn saveto(pbar: ProgressBar, matches: &ArgMatches) -> Result<Output> {
    pbar.set_message("Parsing output path...");
    let result = match matches.get_one::<PathBuf>(args::SAVETO) {
        Some(path) => {
            let output = Output::file(path.clone())?;
            pbar.finish_with_message(format!("Result will be saved to {}", path.display()));
            output
        }
        None => {
            pbar.finish_with_message("Result will be printed to stdout");
            Output::stdout()
        }
    };
    Ok(result)
}

pub fn threads(pbar: ProgressBar, matches: &ArgMatches) -> usize {
    pbar.set_message("Parsing number of threads allowed to launch...");
    let result = matches.get_one::<usize>(args::THREADS).copied().unwrap_or(1);
    pbar.finish_with_message(format!("Using thread pool with at most {} threads", result));
    result
}

pub fn name(pbar: ProgressBar, matches: &ArgMatches) -> String {
    pbar.set_message("Parsing the assembler name...");
    let result = matches.get_one::<String>(args::NAME).cloned().unwrap_or_else(|| "NA".to_owned());
    pbar.finish_with_message(format!("Assembler: {}", result));
    result
}
