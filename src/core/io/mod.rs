pub use fasta::FastaReader;
pub use hts::contigs;

mod fasta;
mod hts;
