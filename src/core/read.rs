use bio_types::strand::ReqStrand;
#[cfg(test)]
use mockall::mock;
use rust_htslib::bam::record::{Aux, CigarStringView};
use rust_htslib::bam::Record;

/// SAM flag bits consulted by the feature extractor.
pub mod flags {
    pub const PAIRED: u16 = 0x1;
    pub const PROPER_PAIR: u16 = 0x2;
    pub const UNMAPPED: u16 = 0x4;
    pub const MATE_UNMAPPED: u16 = 0x8;
    pub const REVERSE: u16 = 0x10;
    pub const MATE_REVERSE: u16 = 0x20;
    pub const SECONDARY: u16 = 0x100;
    pub const SUPPLEMENTARY: u16 = 0x800;
}

pub const ALIGNMENT_SCORE_TAG: &[u8] = b"AS";

#[allow(clippy::len_without_is_empty)]
pub trait SequencedRead {
    // Lossy UTF-8 rendition of the read name
    fn name(&self) -> String;

    // Empty when the record doesn't store a sequence (SEQ = *)
    fn seq(&self) -> Vec<u8>;

    fn len(&self) -> usize;
}

pub trait AlignedRead: SequencedRead {
    fn cigar(&self) -> CigarStringView;
    fn mapq(&self) -> u8;
    fn pos(&self) -> i64;
    fn flags(&self) -> u16;
    // Reference ids of the read and its mate
    fn tid(&self) -> i32;
    fn mtid(&self) -> i32;
    // Signed observed template length (TLEN)
    fn insert_size(&self) -> i64;
    // Value of the AS tag, saturated to the i8 range
    fn alignment_score(&self) -> Option<i8>;

    #[inline]
    fn is_flagged(&self, flag: u16) -> bool {
        self.flags() & flag != 0
    }

    #[inline]
    fn strand(&self) -> ReqStrand {
        if self.is_flagged(flags::REVERSE) {
            ReqStrand::Reverse
        } else {
            ReqStrand::Forward
        }
    }

    #[inline]
    fn mate_strand(&self) -> ReqStrand {
        if self.is_flagged(flags::MATE_REVERSE) {
            ReqStrand::Reverse
        } else {
            ReqStrand::Forward
        }
    }
}

#[cfg(test)]
mock! {
    pub Read {}
    impl AlignedRead for Read {
        fn cigar(&self) -> CigarStringView;
        fn mapq(&self) -> u8;
        fn pos(&self) -> i64;
        fn flags(&self) -> u16;
        fn tid(&self) -> i32;
        fn mtid(&self) -> i32;
        fn insert_size(&self) -> i64;
        fn alignment_score(&self) -> Option<i8>;
    }

    impl SequencedRead for Read {
        fn name(&self) -> String;
        fn seq(&self) -> Vec<u8>;
        fn len(&self) -> usize;
    }
}

#[inline]
fn saturate(score: i64) -> i8 {
    score.clamp(i8::MIN as i64, i8::MAX as i64) as i8
}

impl SequencedRead for Record {
    #[inline]
    fn name(&self) -> String {
        String::from_utf8_lossy(self.qname()).into_owned()
    }

    #[inline]
    fn seq(&self) -> Vec<u8> {
        self.seq().as_bytes()
    }

    #[inline]
    fn len(&self) -> usize {
        self.seq_len()
    }
}

impl AlignedRead for Record {
    #[inline]
    fn cigar(&self) -> CigarStringView {
        self.cigar()
    }

    #[inline]
    fn mapq(&self) -> u8 {
        self.mapq()
    }

    #[inline]
    fn pos(&self) -> i64 {
        self.pos()
    }

    #[inline]
    fn flags(&self) -> u16 {
        self.flags()
    }

    #[inline]
    fn tid(&self) -> i32 {
        self.tid()
    }

    #[inline]
    fn mtid(&self) -> i32 {
        self.mtid()
    }

    #[inline]
    fn insert_size(&self) -> i64 {
        self.insert_size()
    }

    fn alignment_score(&self) -> Option<i8> {
        // Aligners store AS using the smallest integer type that fits
        match self.aux(ALIGNMENT_SCORE_TAG) {
            Ok(Aux::I8(x)) => Some(x),
            Ok(Aux::U8(x)) => Some(saturate(x as i64)),
            Ok(Aux::I16(x)) => Some(saturate(x as i64)),
            Ok(Aux::U16(x)) => Some(saturate(x as i64)),
            Ok(Aux::I32(x)) => Some(saturate(x as i64)),
            Ok(Aux::U32(x)) => Some(saturate(x as i64)),
            _ => None,
        }
    }
}
