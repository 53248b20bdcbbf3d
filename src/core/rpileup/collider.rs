use crate::core::errors::Result;
use crate::core::read::AlignedRead;

// A function computed on top of all reads aligned to a contig
pub trait ReadsCollider<R: AlignedRead> {
    fn collide(&mut self, read: &R) -> Result<()>;
}
