use std::path::Path;

#[cfg(test)]
use mockall::mock;

use crate::core::config::FeatureConfig;
use crate::core::errors::{FeatureError, Result};
use crate::core::io::FastaReader;
use crate::core::rpileup::HtsReadsSource;
use crate::core::stats::{ContigStatsAggregator, PositionFeatures};

/// Per-thread state needed to process contigs one at a time.
pub trait ContigRunCtx {
    fn process(&mut self, contig: &str) -> Result<Vec<PositionFeatures>>;
    // Alignment records consumed by this context so far
    fn consumed(&self) -> u64;
}

#[cfg(test)]
mock! {
    pub ContigRunCtx {}
    impl ContigRunCtx for ContigRunCtx {
        fn process(&mut self, contig: &str) -> Result<Vec<PositionFeatures>>;
        fn consumed(&self) -> u64;
    }
}

pub struct BaseRunCtx {
    reads: HtsReadsSource,
    reference: FastaReader,
    aggregator: ContigStatsAggregator,
}

impl BaseRunCtx {
    pub fn new(bam: &Path, fasta: &Path, config: FeatureConfig) -> Result<Self> {
        let reads = HtsReadsSource::new(bam).map_err(|source| FeatureError::Open { path: bam.to_owned(), source })?;
        let reference = FastaReader::new(fasta)?;
        Ok(Self { reads, reference, aggregator: ContigStatsAggregator::new(config) })
    }
}

impl ContigRunCtx for BaseRunCtx {
    fn process(&mut self, contig: &str) -> Result<Vec<PositionFeatures>> {
        if self.reads.contig_len(contig).is_none() {
            return Err(FeatureError::ContigNotFound(contig.to_owned()));
        }
        let sequence = self.reference.fetch(contig)?;
        self.aggregator.run(contig, &sequence, &mut self.reads)
    }

    #[inline]
    fn consumed(&self) -> u64 {
        self.aggregator.consumed()
    }
}
