/// Nucleotide as observed in a read or in the reference. Anything outside A/C/G/T
/// (ambiguity codes, N, gaps) collapses into `Unknown`.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Debug, Default)]
#[allow(non_snake_case)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    #[default]
    Unknown,
}

impl From<u8> for Nucleotide {
    fn from(symbol: u8) -> Self {
        match symbol {
            b'A' | b'a' => Nucleotide::A,
            b'C' | b'c' => Nucleotide::C,
            b'G' | b'g' => Nucleotide::G,
            b'T' | b't' => Nucleotide::T,
            _ => Nucleotide::Unknown,
        }
    }
}

/// One of the four canonical nucleotides.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[allow(non_snake_case)]
pub enum ReqNucleotide {
    A,
    C,
    G,
    T,
}

impl TryFrom<Nucleotide> for ReqNucleotide {
    type Error = ();

    fn try_from(nuc: Nucleotide) -> Result<Self, Self::Error> {
        match nuc {
            Nucleotide::A => Ok(ReqNucleotide::A),
            Nucleotide::C => Ok(ReqNucleotide::C),
            Nucleotide::G => Ok(ReqNucleotide::G),
            Nucleotide::T => Ok(ReqNucleotide::T),
            Nucleotide::Unknown => Err(()),
        }
    }
}
