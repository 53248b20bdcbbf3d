use rust_htslib::bam::record::{Cigar, CigarStringView};

use crate::core::classify::classify;
use crate::core::config::CoverageMode;
use crate::core::dna::Nucleotide;
use crate::core::errors::{FeatureError, Result};
use crate::core::read::{flags, AlignedRead};
use crate::core::rpileup::ReadsCollider;
use crate::core::stats::{RawPositionStats, ReadSignals};

/// Per-position accumulator for all reads aligned to a single contig.
#[derive(Clone, Debug)]
pub struct ContigPileup {
    mode: CoverageMode,
    contig: String,
    stats: Vec<RawPositionStats>,
    // Reads that covered at least one reference base
    mapped: u64,
    // Reads without an alignment score
    unscored: u64,
}

impl ContigPileup {
    pub fn new(mode: CoverageMode) -> Self {
        Self { mode, contig: String::new(), stats: Vec::new(), mapped: 0, unscored: 0 }
    }

    /// Drop the current state and start a new contig with the given reference sequence.
    pub fn reset(&mut self, contig: &str, reference: &[u8]) {
        self.contig.clear();
        self.contig.push_str(contig);

        self.stats.clear();
        self.stats.extend(reference.iter().map(|x| RawPositionStats::new(*x)));

        self.mapped = 0;
        self.unscored = 0;
    }

    #[inline]
    pub fn contig(&self) -> &str {
        &self.contig
    }

    #[inline]
    pub fn stats(&self) -> &[RawPositionStats] {
        &self.stats
    }

    #[inline]
    pub fn mapped(&self) -> u64 {
        self.mapped
    }

    #[inline]
    pub fn unscored(&self) -> u64 {
        self.unscored
    }

    /// Move out the accumulated records, leaving the pileup empty.
    pub fn take(&mut self) -> Vec<RawPositionStats> {
        std::mem::take(&mut self.stats)
    }

    fn malformed(&self, read: &impl AlignedRead, reason: &str) -> FeatureError {
        FeatureError::MalformedRecord {
            contig: self.contig.clone(),
            read: read.name(),
            pos: read.pos(),
            reason: reason.to_owned(),
        }
    }

    fn validate(&self, read: &impl AlignedRead, cigar: &CigarStringView, seqlen: usize) -> Result<()> {
        if read.pos() < 0 {
            return Err(self.malformed(read, "negative alignment position"));
        }

        let end = cigar.end_pos();
        if end > self.stats.len() as i64 {
            return Err(FeatureError::OutOfBounds {
                contig: self.contig.clone(),
                read: read.name(),
                pos: end - 1,
                len: self.stats.len(),
            });
        }

        if seqlen > 0 && seqlen < query_span(cigar) {
            return Err(self.malformed(read, "query sequence is shorter than the CIGAR query span"));
        }
        Ok(())
    }
}

// Number of query bases consumed by the CIGAR
fn query_span(cigar: &CigarStringView) -> usize {
    cigar
        .iter()
        .map(|block| match block {
            Cigar::Match(ops) | Cigar::Equal(ops) | Cigar::Diff(ops) | Cigar::Ins(ops) | Cigar::SoftClip(ops) => {
                *ops as usize
            }
            Cigar::Del(_) | Cigar::RefSkip(_) | Cigar::HardClip(_) | Cigar::Pad(_) => 0,
        })
        .sum()
}

impl<R: AlignedRead> ReadsCollider<R> for ContigPileup {
    fn collide(&mut self, read: &R) -> Result<()> {
        if read.is_flagged(flags::UNMAPPED) {
            return Ok(());
        }

        let cigar = read.cigar();
        let sequence = read.seq();
        self.validate(read, &cigar, sequence.len())?;

        let class = classify(read);
        let signals = ReadSignals {
            alignment_score: read.alignment_score(),
            mapping_quality: read.mapq(),
            insert_size: read.insert_size().unsigned_abs().min(u32::MAX as u64) as u32,
        };
        if signals.alignment_score.is_none() {
            self.unscored += 1;
        }

        let (mut refpos, mut seqpos) = (read.pos() as usize, 0usize);
        let mut covered = false;
        for block in cigar.iter() {
            match block {
                Cigar::Match(ops) | Cigar::Equal(ops) | Cigar::Diff(ops) => {
                    for _ in 0..*ops {
                        // SEQ = * leaves nothing to observe
                        let observed = sequence.get(seqpos).map_or(Nucleotide::Unknown, |x| Nucleotide::from(*x));
                        let site = &mut self.stats[refpos];
                        let category = class.at_base(observed, site.refnuc());
                        site.add(category, observed, &signals, self.mode);

                        refpos += 1;
                        seqpos += 1;
                    }
                    covered |= *ops > 0;
                }
                Cigar::Del(ops) | Cigar::RefSkip(ops) => {
                    refpos += *ops as usize;
                }
                Cigar::SoftClip(ops) | Cigar::Ins(ops) => {
                    seqpos += *ops as usize;
                }
                Cigar::HardClip(_) | Cigar::Pad(_) => {}
            }
        }

        if covered {
            self.mapped += 1;
        }
        Ok(())
    }
}
