use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Composition window width must be >= 1")]
    InvalidWindow,

    #[error("Reference sequence for contig {0} is empty or missing")]
    EmptyReference(String),

    #[error("Contig {0} is not present in the alignment file header")]
    ContigNotFound(String),

    #[error("Contig {contig} has {reference} bp in the reference, but {header} bp in the alignment file header")]
    ReferenceLengthMismatch { contig: String, reference: usize, header: u64 },

    #[error("{contig}:{pos}: malformed alignment record {read}: {reason}")]
    MalformedRecord { contig: String, read: String, pos: i64, reason: String },

    #[error("{contig}:{pos}: alignment record {read} runs past the end of the reference ({len} bp)")]
    OutOfBounds { contig: String, read: String, pos: i64, len: usize },

    #[error("Failed to read alignments for contig {contig} (HTS file corrupted?)")]
    Hts {
        contig: String,
        #[source]
        source: rust_htslib::errors::Error,
    },

    #[error(
        "Failed to open file {}\n\
        Possible reasons: the file doesn't exist or was not indexed (samtools index); you don't have read permissions",
        .path.display()
    )]
    Open {
        path: PathBuf,
        #[source]
        source: rust_htslib::errors::Error,
    },

    #[error("Failed to open the reference assembly {}: {reason}", .path.display())]
    Reference { path: PathBuf, reason: String },

    #[error("Failed to fetch the reference sequence for contig {contig}: {reason}")]
    Fasta { contig: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FeatureError>;
