pub use alphabet::{Nucleotide, ReqNucleotide};
pub use ncounts::NucCounts;

mod alphabet;
mod ncounts;
