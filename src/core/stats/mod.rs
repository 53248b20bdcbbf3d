pub use contig::{contig_stats, ContigStatsAggregator};
pub use position::{
    ContigStatsSummary, PositionFeatures, PositionStats, ProperMatchSignals, RawPositionStats, ReadSignals,
};
pub use summary::{std_dev, MinMeanMax};

mod contig;
mod position;
mod summary;
