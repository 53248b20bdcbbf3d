use crate::core::dna::Nucleotide;
use crate::core::read::{flags, AlignedRead};

/// Pairing category of an alignment record. Mutually exclusive, see [`classify`].
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ReadClass {
    Secondary,
    Supplementary,
    Orphan,
    Discordant,
    DifferentStrand,
    Proper,
}

/// Category of a read at a single reference base. Proper reads are split by whether
/// the sequenced base agrees with the reference.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum BaseClass {
    ProperMatch,
    ProperSnp,
    Secondary,
    Supplementary,
    Orphan,
    Discordant,
    DifferentStrand,
}

impl BaseClass {
    #[inline]
    pub fn is_proper(&self) -> bool {
        matches!(self, BaseClass::ProperMatch | BaseClass::ProperSnp)
    }
}

impl ReadClass {
    /// Refine the read category at a base where `observed` was sequenced against `reference`.
    /// Unknown symbols never match, not even each other.
    #[inline]
    pub fn at_base(self, observed: Nucleotide, reference: Nucleotide) -> BaseClass {
        match self {
            ReadClass::Proper => {
                if observed != Nucleotide::Unknown && observed == reference {
                    BaseClass::ProperMatch
                } else {
                    BaseClass::ProperSnp
                }
            }
            ReadClass::Secondary => BaseClass::Secondary,
            ReadClass::Supplementary => BaseClass::Supplementary,
            ReadClass::Orphan => BaseClass::Orphan,
            ReadClass::Discordant => BaseClass::Discordant,
            ReadClass::DifferentStrand => BaseClass::DifferentStrand,
        }
    }
}

/// Assign the read to exactly one category. Checks are ordered, the first hit wins:
/// secondary, supplementary, orphan (unpaired or mate unmapped), discordant (not a proper
/// pair or mate on another contig), different strand (both mates on the same strand).
pub fn classify(read: &impl AlignedRead) -> ReadClass {
    let flags = read.flags();
    let is = |flag: u16| flags & flag != 0;

    if is(flags::SECONDARY) {
        ReadClass::Secondary
    } else if is(flags::SUPPLEMENTARY) {
        ReadClass::Supplementary
    } else if !is(flags::PAIRED) || is(flags::MATE_UNMAPPED) {
        ReadClass::Orphan
    } else if !is(flags::PROPER_PAIR) || read.tid() != read.mtid() {
        ReadClass::Discordant
    } else if read.strand() == read.mate_strand() {
        ReadClass::DifferentStrand
    } else {
        ReadClass::Proper
    }
}

#[cfg(test)]
mod tests {
    use crate::core::read::MockRead;

    use super::*;

    fn read(flags: u16, tid: i32, mtid: i32) -> MockRead {
        let mut read = MockRead::new();
        read.expect_flags().return_const(flags);
        read.expect_tid().return_const(tid);
        read.expect_mtid().return_const(mtid);
        read
    }

    #[test]
    fn classify() {
        for (flags, tid, mtid, expected) in [
            // 99/147: properly paired, FR orientation
            (99u16, 0, 0, ReadClass::Proper),
            (147, 0, 0, ReadClass::Proper),
            (83, 0, 0, ReadClass::Proper),
            (163, 0, 0, ReadClass::Proper),
            // secondary & supplementary take priority over anything else
            (99 | flags::SECONDARY, 0, 0, ReadClass::Secondary),
            (flags::SECONDARY | flags::SUPPLEMENTARY, 0, 0, ReadClass::Secondary),
            (99 | flags::SUPPLEMENTARY, 0, 0, ReadClass::Supplementary),
            (flags::SUPPLEMENTARY | flags::MATE_UNMAPPED | flags::PAIRED, 0, 0, ReadClass::Supplementary),
            // orphans: unpaired or lost mate
            (0, 0, -1, ReadClass::Orphan),
            (flags::REVERSE, 0, -1, ReadClass::Orphan),
            (73, 0, 0, ReadClass::Orphan),
            (flags::PAIRED | flags::PROPER_PAIR | flags::MATE_UNMAPPED, 0, 0, ReadClass::Orphan),
            // discordant: not a proper pair or mates on different contigs
            (97, 0, 0, ReadClass::Discordant),
            (81, 0, 0, ReadClass::Discordant),
            (99, 0, 1, ReadClass::Discordant),
            // inconsistent orientation
            (flags::PAIRED | flags::PROPER_PAIR, 0, 0, ReadClass::DifferentStrand),
            (flags::PAIRED | flags::PROPER_PAIR | flags::REVERSE | flags::MATE_REVERSE, 0, 0, ReadClass::DifferentStrand),
        ] {
            assert_eq!(super::classify(&read(flags, tid, mtid)), expected, "flags = {}", flags);
        }
    }

    #[test]
    fn at_base() {
        let proper = ReadClass::Proper;
        assert_eq!(proper.at_base(Nucleotide::A, Nucleotide::A), BaseClass::ProperMatch);
        assert_eq!(proper.at_base(Nucleotide::C, Nucleotide::A), BaseClass::ProperSnp);
        assert_eq!(proper.at_base(Nucleotide::Unknown, Nucleotide::A), BaseClass::ProperSnp);
        assert_eq!(proper.at_base(Nucleotide::Unknown, Nucleotide::Unknown), BaseClass::ProperSnp);
        assert_eq!(proper.at_base(Nucleotide::G, Nucleotide::Unknown), BaseClass::ProperSnp);

        for (class, expected) in [
            (ReadClass::Secondary, BaseClass::Secondary),
            (ReadClass::Supplementary, BaseClass::Supplementary),
            (ReadClass::Orphan, BaseClass::Orphan),
            (ReadClass::Discordant, BaseClass::Discordant),
            (ReadClass::DifferentStrand, BaseClass::DifferentStrand),
        ] {
            assert_eq!(class.at_base(Nucleotide::A, Nucleotide::A), expected);
            assert_eq!(class.at_base(Nucleotide::C, Nucleotide::A), expected);
            assert!(!expected.is_proper());
        }
        assert!(BaseClass::ProperMatch.is_proper() && BaseClass::ProperSnp.is_proper());
    }
}
