use std::ffi::{c_void, CString};
use std::path::Path;
use std::slice;

use rust_htslib::htslib;

use crate::core::errors::{FeatureError, Result};

/// Indexed fasta file. The `.fai` index is created next to the file when missing.
pub struct FastaReader {
    faidx: *mut htslib::faidx_t,
}

// The handle is owned by a single reader and never shared, each worker thread opens its own reader
unsafe impl Send for FastaReader {}

impl FastaReader {
    pub fn new(path: &Path) -> Result<Self> {
        let failed = |reason: &str| FeatureError::Reference { path: path.to_owned(), reason: reason.to_owned() };
        if !path.is_file() {
            return Err(failed("file doesn't exist"));
        }
        let cpath = path.to_str().and_then(|x| CString::new(x).ok()).ok_or_else(|| failed("unsupported path"))?;

        let faidx = unsafe { htslib::fai_load(cpath.as_ptr()) };
        if faidx.is_null() {
            return Err(failed("not a valid fasta file or the index can't be created"));
        }
        Ok(Self { faidx })
    }

    /// Complete sequence of the contig, as stored in the file.
    pub fn fetch(&self, contig: &str) -> Result<Vec<u8>> {
        let failed = |reason: &str| FeatureError::Fasta { contig: contig.to_owned(), reason: reason.to_owned() };
        let name = CString::new(contig).map_err(|_| failed("invalid contig name"))?;

        if unsafe { htslib::faidx_has_seq(self.faidx, name.as_ptr()) } == 0 {
            return Err(failed("contig is absent from the fasta file"));
        }
        let total = unsafe { htslib::faidx_seq_len64(self.faidx, name.as_ptr()) };
        if total <= 0 {
            return Ok(Vec::new());
        }

        // Both ends are inclusive
        let mut fetched: htslib::hts_pos_t = 0;
        let ptr = unsafe { htslib::faidx_fetch_seq64(self.faidx, name.as_ptr(), 0, total - 1, &mut fetched) };
        if ptr.is_null() {
            return Err(failed("failed to read the sequence"));
        }

        let sequence = match usize::try_from(fetched) {
            Ok(len) => Ok(unsafe { slice::from_raw_parts(ptr as *const u8, len) }.to_vec()),
            Err(_) => Err(failed("failed to read the sequence")),
        };
        unsafe { htslib::hts_free(ptr as *mut c_void) };
        sequence
    }
}

impl Drop for FastaReader {
    fn drop(&mut self) {
        unsafe { htslib::fai_destroy(self.faidx) };
    }
}
