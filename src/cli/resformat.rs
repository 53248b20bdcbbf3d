use std::io::{Result, Write};

use crate::core::stats::PositionFeatures;

pub const COLUMNS: &[&str] = &[
    "assembler",
    "contig",
    "position",
    "ref_base",
    "num_query_A",
    "num_query_C",
    "num_query_G",
    "num_query_T",
    "num_SNPs",
    "coverage",
    "n_proper_match",
    "n_proper_snp",
    "n_discord",
    "n_sec",
    "n_sup",
    "n_orphan_match",
    "n_diff_strand",
    "min_al_score",
    "mean_al_score",
    "max_al_score",
    "min_map_qual",
    "mean_map_qual",
    "max_map_qual",
    "min_insert_size",
    "mean_insert_size",
    "max_insert_size",
    "std_insert_size",
    "seq_window_entropy",
    "seq_window_perc_gc",
];

pub fn header(saveto: &mut impl Write) -> Result<()> {
    writeln!(saveto, "{}", COLUMNS.join("\t"))
}

/// One row per reference position, in reference order.
pub fn features(saveto: &mut impl Write, assembler: &str, contig: &str, features: &[PositionFeatures]) -> Result<()> {
    for (pos, e) in features.iter().enumerate() {
        let (counts, s) = (&e.base_counts, &e.signals);
        write!(saveto, "{}\t{}\t{}\t{}\t", assembler, contig, pos, e.ref_base as char)?;
        write!(saveto, "{}\t{}\t{}\t{}\t{}\t{}\t", counts.A, counts.C, counts.G, counts.T, e.num_snps(), e.coverage)?;
        write!(
            saveto,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t",
            e.n_proper_match, e.n_proper_snp, e.n_discord, e.n_sec, e.n_sup, e.n_orphan_match, e.n_diff_strand
        )?;
        write!(saveto, "{}\t{:.3}\t{}\t", s.min_alignment_score, s.mean_alignment_score, s.max_alignment_score)?;
        write!(saveto, "{}\t{:.3}\t{}\t", s.min_mapping_quality, s.mean_mapping_quality, s.max_mapping_quality)?;
        write!(
            saveto,
            "{}\t{:.3}\t{}\t{:.3}\t",
            s.min_insert_size, s.mean_insert_size, s.max_insert_size, s.std_insert_size
        )?;
        writeln!(saveto, "{:.6}\t{:.6}", e.entropy, e.gc_fraction)?;
    }
    Ok(())
}
