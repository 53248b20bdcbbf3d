use crate::core::classify::BaseClass;
use crate::core::config::CoverageMode;
use crate::core::dna::{NucCounts, Nucleotide};
use crate::core::stats::summary::{std_dev, MinMeanMax};

/// Per-read values retained for proper-match reads.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct ReadSignals {
    pub alignment_score: Option<i8>,
    pub mapping_quality: u8,
    pub insert_size: u32,
}

/// Raw per-read signals of all reads that matched the reference at a position.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ProperMatchSignals {
    pub alignment_scores: Vec<i8>,
    pub mapping_qualities: Vec<u8>,
    pub insert_sizes: Vec<u32>,
}

impl ProperMatchSignals {
    #[inline]
    pub fn push(&mut self, signals: &ReadSignals) {
        if let Some(score) = signals.alignment_score {
            self.alignment_scores.push(score);
        }
        self.mapping_qualities.push(signals.mapping_quality);
        self.insert_sizes.push(signals.insert_size);
    }
}

/// Bounded replacement for [`ProperMatchSignals`]. Empty lists are reported with the
/// sentinels of [`MinMeanMax`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ContigStatsSummary {
    pub min_alignment_score: i8,
    pub mean_alignment_score: f64,
    pub max_alignment_score: i8,
    pub min_mapping_quality: u8,
    pub mean_mapping_quality: f64,
    pub max_mapping_quality: u8,
    pub min_insert_size: u32,
    pub mean_insert_size: f64,
    pub max_insert_size: u32,
    pub std_insert_size: f64,
}

impl From<&ProperMatchSignals> for ContigStatsSummary {
    fn from(signals: &ProperMatchSignals) -> Self {
        let scores = MinMeanMax::of(&signals.alignment_scores);
        let mapq = MinMeanMax::of(&signals.mapping_qualities);
        let inserts = MinMeanMax::of(&signals.insert_sizes);
        ContigStatsSummary {
            min_alignment_score: scores.min,
            mean_alignment_score: scores.mean,
            max_alignment_score: scores.max,
            min_mapping_quality: mapq.min,
            mean_mapping_quality: mapq.mean,
            max_mapping_quality: mapq.max,
            min_insert_size: inserts.min,
            mean_insert_size: inserts.mean,
            max_insert_size: inserts.max,
            std_insert_size: std_dev(&signals.insert_sizes, inserts.mean),
        }
    }
}

/// Everything known about a single reference base.
#[derive(Clone, PartialEq, Debug)]
pub struct PositionStats<Signals> {
    pub ref_base: u8,
    pub base_counts: NucCounts,
    pub coverage: u32,
    pub n_proper_match: u32,
    pub n_proper_snp: u32,
    pub n_discord: u32,
    pub n_sec: u32,
    pub n_sup: u32,
    pub n_orphan_match: u32,
    pub n_diff_strand: u32,
    pub signals: Signals,
    pub entropy: f64,
    pub gc_fraction: f64,
}

pub type RawPositionStats = PositionStats<ProperMatchSignals>;
pub type PositionFeatures = PositionStats<ContigStatsSummary>;

impl<Signals> PositionStats<Signals> {
    #[inline]
    pub fn refnuc(&self) -> Nucleotide {
        Nucleotide::from(self.ref_base)
    }

    /// Number of sequenced bases that disagree with the reference.
    #[inline]
    pub fn num_snps(&self) -> u32 {
        self.base_counts.mismatches(self.refnuc())
    }

    fn with_signals<T>(self, signals: T) -> PositionStats<T> {
        PositionStats {
            ref_base: self.ref_base,
            base_counts: self.base_counts,
            coverage: self.coverage,
            n_proper_match: self.n_proper_match,
            n_proper_snp: self.n_proper_snp,
            n_discord: self.n_discord,
            n_sec: self.n_sec,
            n_sup: self.n_sup,
            n_orphan_match: self.n_orphan_match,
            n_diff_strand: self.n_diff_strand,
            signals,
            entropy: self.entropy,
            gc_fraction: self.gc_fraction,
        }
    }
}

impl RawPositionStats {
    pub fn new(ref_base: u8) -> Self {
        PositionStats {
            ref_base: ref_base.to_ascii_uppercase(),
            base_counts: NucCounts::zeros(),
            coverage: 0,
            n_proper_match: 0,
            n_proper_snp: 0,
            n_discord: 0,
            n_sec: 0,
            n_sup: 0,
            n_orphan_match: 0,
            n_diff_strand: 0,
            signals: ProperMatchSignals::default(),
            entropy: 0.0,
            gc_fraction: 0.0,
        }
    }

    /// Account for a single read that sequenced `observed` at this position.
    #[inline]
    pub fn add(&mut self, class: BaseClass, observed: Nucleotide, read: &ReadSignals, mode: CoverageMode) {
        let counter = match class {
            BaseClass::ProperMatch => &mut self.n_proper_match,
            BaseClass::ProperSnp => &mut self.n_proper_snp,
            BaseClass::Discordant => &mut self.n_discord,
            BaseClass::Secondary => &mut self.n_sec,
            BaseClass::Supplementary => &mut self.n_sup,
            BaseClass::Orphan => &mut self.n_orphan_match,
            BaseClass::DifferentStrand => &mut self.n_diff_strand,
        };
        *counter += 1;

        if class == BaseClass::ProperMatch {
            self.signals.push(read);
        }
        if class.is_proper() || mode == CoverageMode::AllReads {
            self.coverage += 1;
            self.base_counts.increment(observed);
        }
    }

    /// Replace the raw per-read lists with their summaries.
    pub fn summarize(self) -> PositionFeatures {
        let summary = ContigStatsSummary::from(&self.signals);
        self.with_signals(summary)
    }
}
