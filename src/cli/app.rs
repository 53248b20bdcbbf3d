use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{crate_authors, crate_name, crate_version, ArgMatches, Command};
use indicatif::{ProgressBar, ProgressFinish};
use log::info;
use rayon::ThreadPoolBuilder;

use crate::cli::output::Output;
use crate::cli::{args, parse, resformat, style};
use crate::core::config::FeatureConfig;
use crate::core::run::{self, BaseRunCtx};

pub fn cmd() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!("\n"))
        .about("Per-position pileup and sequence composition features of assembled contigs")
        .args(args::core())
        .args(args::features())
}

struct ParsedArgs {
    bamfile: PathBuf,
    reference: PathBuf,
    contigs: Vec<String>,
    config: FeatureConfig,
    assembler: String,
    threads: usize,
    saveto: Output,
}

impl ParsedArgs {
    fn new(matches: &ArgMatches, factory: impl Fn() -> Result<ProgressBar>) -> Result<Self> {
        let bamfile = parse::bamfile(factory()?, matches)?;
        let reference = parse::reference(factory()?, matches)?;
        let contigs = parse::contigs(factory()?, matches, &bamfile)?;
        let config = parse::config(factory()?, matches)?;
        let assembler = parse::name(factory()?, matches);
        let threads = parse::threads(factory()?, matches);
        let saveto = parse::saveto(factory()?, matches)?;
        Ok(Self { bamfile, reference, contigs, config, assembler, threads, saveto })
    }
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let factory = || -> Result<ProgressBar> {
        Ok(ProgressBar::new_spinner().with_style(style::parse::with_progress()?).with_finish(ProgressFinish::AndLeave))
    };
    let ParsedArgs { bamfile, reference, contigs, config, assembler, threads, mut saveto } =
        ParsedArgs::new(matches, factory)?;

    let pool = ThreadPoolBuilder::new().num_threads(threads).build().context("Failed to start the thread pool")?;

    let pbar = ProgressBar::new(contigs.len() as u64)
        .with_style(style::run::running()?)
        .with_finish(ProgressFinish::AndLeave);

    resformat::header(&mut saveto).context("Failed to write results to the output TSV file")?;
    let consumed = pool.install(|| {
        run::contigs(
            &contigs,
            || BaseRunCtx::new(&bamfile, &reference, config),
            |x| -> Result<()> {
                resformat::features(&mut saveto, &assembler, &x.contig, &x.features)
                    .context("Failed to write results to the output TSV file")?;
                pbar.set_message(x.contig);
                pbar.inc(1);
                Ok(())
            },
        )
    })?;
    saveto.finish()?;

    pbar.set_style(style::run::finished()?);
    pbar.finish_with_message(format!("Finished with {} contigs, processed reads: {}", contigs.len(), consumed));
    info!("Processed {} alignment records", consumed);
    Ok(())
}
