use std::ops::{Index, IndexMut};

use derive_more::{Add, AddAssign};

use crate::core::dna::{Nucleotide, ReqNucleotide};

/// Number of A, C, G, T observed at a locus (or inside a window).
#[derive(Clone, Copy, Eq, PartialEq, Debug, Add, AddAssign, Default)]
#[allow(non_snake_case)]
pub struct NucCounts {
    pub A: u32,
    pub C: u32,
    pub G: u32,
    pub T: u32,
}

impl NucCounts {
    #[allow(non_snake_case)]
    pub fn new(A: u32, C: u32, G: u32, T: u32) -> Self {
        Self { A, C, G, T }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::default()
    }

    #[inline]
    pub fn increment(&mut self, nuc: Nucleotide) {
        if let Ok(nuc) = ReqNucleotide::try_from(nuc) {
            self[nuc] += 1;
        }
    }

    #[inline]
    pub fn coverage(&self) -> u32 {
        self.A + self.C + self.G + self.T
    }

    #[inline]
    pub fn mismatches(&self, reference: Nucleotide) -> u32 {
        match reference {
            Nucleotide::A => self.C + self.G + self.T,
            Nucleotide::C => self.A + self.G + self.T,
            Nucleotide::G => self.A + self.C + self.T,
            Nucleotide::T => self.A + self.C + self.G,
            Nucleotide::Unknown => self.coverage(),
        }
    }

    #[inline]
    pub fn gc(&self) -> u32 {
        self.C + self.G
    }

    /// Counts in the A, C, G, T order.
    #[inline]
    pub fn to_array(&self) -> [u32; 4] {
        [self.A, self.C, self.G, self.T]
    }

    /// Element-wise difference, `self` must dominate `other`.
    #[inline]
    pub fn minus(&self, other: &NucCounts) -> NucCounts {
        debug_assert!(self.A >= other.A && self.C >= other.C && self.G >= other.G && self.T >= other.T);
        NucCounts { A: self.A - other.A, C: self.C - other.C, G: self.G - other.G, T: self.T - other.T }
    }
}

impl Index<ReqNucleotide> for NucCounts {
    type Output = u32;

    fn index(&self, index: ReqNucleotide) -> &Self::Output {
        match index {
            ReqNucleotide::A => &self.A,
            ReqNucleotide::C => &self.C,
            ReqNucleotide::G => &self.G,
            ReqNucleotide::T => &self.T,
        }
    }
}

impl IndexMut<ReqNucleotide> for NucCounts {
    fn index_mut(&mut self, index: ReqNucleotide) -> &mut Self::Output {
        match index {
            ReqNucleotide::A => &mut self.A,
            ReqNucleotide::C => &mut self.C,
            ReqNucleotide::G => &mut self.G,
            ReqNucleotide::T => &mut self.T,
        }
    }
}

impl From<[u32; 4]> for NucCounts {
    fn from(counts: [u32; 4]) -> Self {
        Self { A: counts[0], C: counts[1], G: counts[2], T: counts[3] }
    }
}
