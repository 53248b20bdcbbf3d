use std::path::Path;

use itertools::Itertools;
use rust_htslib::bam::{IndexedReader, Read};

use crate::core::errors::{FeatureError, Result};

/// Names of all contigs declared in the header of an indexed BAM file, in header order.
pub fn contigs(path: &Path) -> Result<Vec<String>> {
    let reader = IndexedReader::from_path(path).map_err(|source| FeatureError::Open { path: path.to_owned(), source })?;
    let header = reader.header();
    Ok((0..header.target_count()).map(|tid| String::from_utf8_lossy(header.tid2name(tid)).into_owned()).collect_vec())
}
