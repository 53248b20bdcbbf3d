use std::path::Path;

use rust_htslib::bam::{IndexedReader, Read, Record};

use crate::core::errors::{FeatureError, Result};
use crate::core::rpileup::{ReadsCollider, ReadsSource};

pub struct HtsReadsSource {
    reader: IndexedReader,
}

impl HtsReadsSource {
    pub fn new(path: impl AsRef<Path>) -> rust_htslib::errors::Result<Self> {
        Ok(Self { reader: IndexedReader::from_path(path)? })
    }

    /// Length of the contig as declared in the header.
    pub fn contig_len(&self, contig: &str) -> Option<u64> {
        let header = self.reader.header();
        header.tid(contig.as_bytes()).and_then(|tid| header.target_len(tid))
    }
}

impl ReadsSource for HtsReadsSource {
    type Read = Record;

    fn collide<C: ReadsCollider<Record>>(&mut self, contig: &str, reflen: usize, collider: &mut C) -> Result<u64> {
        let header = self.contig_len(contig).ok_or_else(|| FeatureError::ContigNotFound(contig.to_owned()))?;
        if header != reflen as u64 {
            return Err(FeatureError::ReferenceLengthMismatch { contig: contig.to_owned(), reference: reflen, header });
        }

        let hts = |source| FeatureError::Hts { contig: contig.to_owned(), source };
        self.reader.fetch((contig, 0u64, header)).map_err(hts)?;

        let mut consumed = 0;
        let mut record = Record::new();
        while let Some(r) = self.reader.read(&mut record) {
            r.map_err(hts)?;
            collider.collide(&record)?;
            consumed += 1;
        }
        Ok(consumed)
    }
}
