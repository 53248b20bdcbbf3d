pub use collider::ReadsCollider;
pub use hts::HtsReadsSource;
pub use pileup::ContigPileup;

use crate::core::errors::Result;
use crate::core::read::AlignedRead;

mod collider;
mod hts;
mod pileup;

/// Stream of alignment records for one contig.
pub trait ReadsSource {
    type Read: AlignedRead;

    /// Feed every record aligned to `contig` into the collider. `reflen` is the length of the
    /// reference sequence the records are walked against. Returns the number of records consumed.
    fn collide<C: ReadsCollider<Self::Read>>(&mut self, contig: &str, reflen: usize, collider: &mut C) -> Result<u64>;
}

// In-memory records, all assumed to be aligned to the requested contig
impl<R: AlignedRead> ReadsSource for Vec<R> {
    type Read = R;

    fn collide<C: ReadsCollider<R>>(&mut self, _: &str, _: usize, collider: &mut C) -> Result<u64> {
        for read in self.iter() {
            collider.collide(read)?;
        }
        Ok(self.len() as u64)
    }
}
