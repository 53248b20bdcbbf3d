use log::{debug, info, warn};

use crate::core::composition::composition;
use crate::core::config::FeatureConfig;
use crate::core::errors::{FeatureError, Result};
use crate::core::rpileup::{ContigPileup, ReadsSource};
use crate::core::stats::{PositionFeatures, RawPositionStats};

/// Builds the per-position feature matrix of a contig. The pileup buffer is reused between contigs.
#[derive(Clone, Debug)]
pub struct ContigStatsAggregator {
    config: FeatureConfig,
    pileup: ContigPileup,
    consumed: u64,
}

impl ContigStatsAggregator {
    pub fn new(config: FeatureConfig) -> Self {
        Self { pileup: ContigPileup::new(*config.coverage()), config, consumed: 0 }
    }

    #[inline]
    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Total number of alignment records consumed so far.
    #[inline]
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn run<S: ReadsSource>(
        &mut self,
        contig: &str,
        reference: &[u8],
        source: &mut S,
    ) -> Result<Vec<PositionFeatures>> {
        if reference.is_empty() {
            return Err(FeatureError::EmptyReference(contig.to_owned()));
        }
        info!("Processing contig {} ({} bp)", contig, reference.len());

        self.pileup.reset(contig, reference);
        let consumed = source.collide(contig, reference.len(), &mut self.pileup)?;
        self.consumed += consumed;
        debug!("Contig {}: {} records consumed, {} covered the reference", contig, consumed, self.pileup.mapped());
        if self.pileup.unscored() > 0 {
            warn!("Contig {}: {} records without an alignment score (AS) tag", contig, self.pileup.unscored());
        }

        let mut stats = self.pileup.take();
        fill_composition(&mut stats, reference, &self.config);

        let features: Vec<_> = stats.into_iter().map(RawPositionStats::summarize).collect();
        info!("Finished contig {}", contig);
        Ok(features)
    }
}

fn fill_composition(stats: &mut [RawPositionStats], reference: &[u8], config: &FeatureConfig) {
    debug_assert_eq!(stats.len(), reference.len());
    for (site, comp) in stats.iter_mut().zip(composition(reference, *config.window())) {
        site.entropy = comp.entropy;
        site.gc_fraction = comp.gc_fraction;
    }
}

/// Per-position features of the `contig` computed from its `reference` sequence and all
/// alignment records provided by the `source`. Any error fails the whole contig.
pub fn contig_stats<S: ReadsSource>(
    contig: &str,
    reference: &[u8],
    source: &mut S,
    config: &FeatureConfig,
) -> Result<Vec<PositionFeatures>> {
    ContigStatsAggregator::new(*config).run(contig, reference, source)
}

#[cfg(test)]
mod tests {
    use rust_htslib::bam::record::{Aux, Cigar, CigarString};
    use rust_htslib::bam::Record;

    use crate::core::config::CoverageMode;
    use crate::core::dna::NucCounts;
    use crate::core::read::{flags, ALIGNMENT_SCORE_TAG};
    use crate::core::rpileup::ReadsCollider;

    use super::*;

    const PROPER: u16 = flags::PAIRED | flags::PROPER_PAIR | flags::MATE_REVERSE;

    fn record(name: &str, seq: &str, score: i8, mapq: u8) -> Record {
        // Two 4bp blocks at 0..4 and 420..424
        let cigar = CigarString(vec![Cigar::Match(4), Cigar::RefSkip(416), Cigar::Match(4)]);
        let mut record = Record::new();
        record.set(name.as_bytes(), Some(&cigar), seq.as_bytes(), &vec![30; seq.len()]);
        record.set_tid(0);
        record.set_mtid(0);
        record.set_pos(0);
        record.set_mpos(600);
        record.set_flags(PROPER);
        record.set_mapq(mapq);
        record.set_insert_size(800);
        record.push_aux(ALIGNMENT_SCORE_TAG, Aux::I8(score)).unwrap();
        record
    }

    fn reference() -> Vec<u8> {
        vec![b'A'; 500]
    }

    fn covered(features: &[PositionFeatures]) -> Vec<usize> {
        features.iter().enumerate().filter(|(_, x)| x.coverage > 0).map(|(ind, _)| ind).collect()
    }

    #[test]
    fn single_read() {
        let mut reads = vec![record("r001", "AAAACCCC", -27, 60)];
        let features = contig_stats("Contig1", &reference(), &mut reads, &FeatureConfig::default()).unwrap();

        assert_eq!(features.len(), 500);
        assert_eq!(covered(&features), vec![0, 1, 2, 3, 420, 421, 422, 423]);
        for site in &features[0..4] {
            assert_eq!(site.base_counts, NucCounts::new(1, 0, 0, 0));
            assert_eq!((site.n_proper_match, site.num_snps()), (1, 0));
            assert_eq!((site.signals.min_alignment_score, site.signals.max_alignment_score), (-27, -27));
            assert_eq!(site.signals.mean_alignment_score, -27.0);
            assert_eq!(site.signals.mean_mapping_quality, 60.0);
            assert_eq!(site.signals.mean_insert_size, 800.0);
            assert!(site.signals.std_insert_size.is_nan());
        }
        for site in &features[420..424] {
            assert_eq!(site.base_counts, NucCounts::new(0, 1, 0, 0));
            assert_eq!((site.n_proper_snp, site.num_snps()), (1, 1));
            assert_eq!(site.signals.min_alignment_score, i8::MAX);
            assert!(site.signals.mean_alignment_score.is_nan());
        }
        assert!(features.iter().all(|x| x.entropy == 0.0 && x.gc_fraction == 0.0));
    }

    #[test]
    fn two_reads() {
        let mut reads = vec![record("r001", "AAAACCCC", 0, 6), record("r002", "AGGGTTTT", -28, 7)];
        let features = contig_stats("TwoReads", &reference(), &mut reads, &FeatureConfig::default()).unwrap();
        assert_eq!(covered(&features), vec![0, 1, 2, 3, 420, 421, 422, 423]);

        let first = &features[0];
        assert_eq!((first.coverage, first.n_proper_match), (2, 2));
        assert_eq!((first.signals.min_alignment_score, first.signals.max_alignment_score), (-28, 0));
        assert_eq!((first.signals.min_mapping_quality, first.signals.max_mapping_quality), (6, 7));
        assert_eq!(first.signals.mean_mapping_quality, 6.5);
        assert_eq!(first.signals.std_insert_size, 0.0);

        for site in &features[1..4] {
            assert_eq!(site.base_counts, NucCounts::new(1, 0, 1, 0));
            assert_eq!((site.coverage, site.n_proper_match, site.n_proper_snp), (2, 1, 1));
            assert_eq!((site.signals.min_alignment_score, site.signals.max_alignment_score), (0, 0));
            assert_eq!(site.signals.mean_mapping_quality, 6.0);
        }

        for site in &features[420..424] {
            assert_eq!(site.base_counts, NucCounts::new(0, 1, 0, 1));
            assert_eq!((site.coverage, site.n_proper_snp, site.num_snps()), (2, 2, 2));
            assert_eq!((site.signals.min_mapping_quality, site.signals.max_mapping_quality), (255, 255));
            assert_eq!((site.signals.min_alignment_score, site.signals.max_alignment_score), (127, 127));
            assert_eq!((site.signals.min_insert_size, site.signals.max_insert_size), (u32::MAX, u32::MAX));
            assert!(site.signals.mean_mapping_quality.is_nan());
            assert!(site.signals.mean_alignment_score.is_nan());
        }
    }

    #[test]
    fn no_reads() {
        let mut reads: Vec<Record> = Vec::new();
        let features = contig_stats("Empty", b"AAAATTTT", &mut reads, &FeatureConfig::default()).unwrap();
        assert_eq!(features.len(), 8);
        assert!(features.iter().all(|x| x.coverage == 0 && x.signals.mean_alignment_score.is_nan()));

        let entropy: Vec<f64> = features.iter().map(|x| (x.entropy * 1e6).round() / 1e6).collect();
        assert_eq!(entropy, vec![0.0, 0.811278, 1.0, 0.811278, 0.811278, 1.0, 0.811278, 0.0]);
    }

    #[test]
    fn window_width() {
        let mut reads: Vec<Record> = Vec::new();
        let config = FeatureConfig::new(1, CoverageMode::AllReads).unwrap();
        let features = contig_stats("Contig", b"ACgt", &mut reads, &config).unwrap();

        let gc: Vec<f64> = features.iter().map(|x| x.gc_fraction).collect();
        assert_eq!(gc, vec![0.0, 1.0, 1.0, 0.0]);
        assert!(features.iter().all(|x| x.entropy == 0.0));
        let bases: Vec<u8> = features.iter().map(|x| x.ref_base).collect();
        assert_eq!(bases, b"ACGT");
    }

    #[test]
    fn empty_reference() {
        let mut reads = vec![record("r001", "AAAACCCC", 0, 6)];
        let result = contig_stats("Contig1", b"", &mut reads, &FeatureConfig::default());
        assert!(matches!(result, Err(FeatureError::EmptyReference(contig)) if contig == "Contig1"));
    }

    #[test]
    fn failing_contig() {
        let mut reads = vec![record("r001", "AAAACCCC", 0, 6), record("r002", "AAAACCCC", 0, 6)];
        reads[1].set_pos(100);
        let result = contig_stats("Contig1", &reference(), &mut reads, &FeatureConfig::default());
        assert!(matches!(result, Err(FeatureError::OutOfBounds { pos: 523, len: 500, .. })));
    }

    #[test]
    fn consumed() {
        let mut aggregator = ContigStatsAggregator::new(FeatureConfig::default());
        let mut reads = vec![record("r001", "AAAACCCC", 0, 6), record("r002", "AGGGTTTT", -28, 7)];
        aggregator.run("First", &reference(), &mut reads).unwrap();
        aggregator.run("Second", &reference(), &mut reads).unwrap();
        assert_eq!(aggregator.consumed(), 4);
        assert_eq!(aggregator.config(), &FeatureConfig::default());
    }

    // Reports a large record count without feeding anything into the pileup
    struct Counted(u64);

    impl ReadsSource for Counted {
        type Read = Record;

        fn collide<C: ReadsCollider<Record>>(&mut self, _: &str, _: usize, _: &mut C) -> Result<u64> {
            Ok(self.0)
        }
    }

    #[test]
    fn consumed_past_u32() {
        let mut aggregator = ContigStatsAggregator::new(FeatureConfig::default());
        let mut source = Counted(u32::MAX as u64);
        for contig in ["First", "Second", "Third"] {
            aggregator.run(contig, &reference(), &mut source).unwrap();
        }
        assert_eq!(aggregator.consumed(), 3 * u32::MAX as u64);
    }
}
