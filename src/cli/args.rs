use std::path::PathBuf;

use clap::{Arg, ArgAction};

use super::validate;
use crate::core::config::DEFAULT_WINDOW;

pub const INPUT: &str = "input";
pub const REFERENCE: &str = "reference";
pub const CONTIG: &str = "contig";
pub const WINDOW: &str = "window";
pub const COVERAGE: &str = "coverage";
pub const THREADS: &str = "threads";
pub const NAME: &str = "assembler";
pub const SAVETO: &str = "saveto";

pub mod sections {
    pub const CORE: &str = "Core";
    pub const FEATURES: &str = "Features";
}

pub fn core() -> Vec<Arg> {
    let args = vec![
        Arg::new(INPUT)
            .short('i')
            .long(INPUT)
            .required(true)
            .value_parser(validate::path)
            .long_help("Path to the input BAM file. The file must be coordinate sorted and indexed (samtools index)."),
        Arg::new(REFERENCE)
            .short('r')
            .long(REFERENCE)
            .required(true)
            .value_parser(validate::path)
            .long_help("Fasta file with the assembled contigs. Contig names must match the names in the input BAM header. The fasta index is created next to the file when missing."),
        Arg::new(CONTIG)
            .short('c')
            .long(CONTIG)
            .action(ArgAction::Append)
            .long_help("Process only the given contig. May be repeated; by default all contigs from the BAM header are processed."),
        Arg::new(NAME)
            .short('n')
            .long(NAME)
            .default_value("NA")
            .long_help("Name of the assembler that produced the contigs. Reported in the first column of the output."),
        Arg::new(SAVETO)
            .short('o')
            .long(SAVETO)
            .value_parser(clap::value_parser!(PathBuf))
            .long_help("Path to the output tsv file. By default, the results are printed to stdout."),
        Arg::new(THREADS)
            .short('t')
            .long(THREADS)
            .value_parser(validate::numeric(1usize, usize::MAX))
            .default_value("1")
            .long_help("Maximum number of threads to spawn at once. Contigs are processed in parallel."),
    ];
    args.into_iter().map(|x| x.help_heading(sections::CORE)).collect()
}

pub fn features() -> Vec<Arg> {
    let args = vec![
        Arg::new(WINDOW)
            .short('w')
            .long(WINDOW)
            .value_parser(validate::numeric(1usize, usize::MAX))
            .long_help(format!(
                "Width of the sliding window used to compute the sequence entropy and GC content around each position [default: {}]",
                DEFAULT_WINDOW
            )),
        Arg::new(COVERAGE)
            .long(COVERAGE)
            .value_parser(validate::coverage)
            .default_value("all")
            .long_help("Reads counted towards the coverage and the query nucleotide counts: \"all\" aligned reads, or only \"proper\" pairs. Non-proper reads are always reported in their own counters."),
    ];
    args.into_iter().map(|x| x.help_heading(sections::FEATURES)).collect()
}
