use std::num::NonZeroUsize;
use std::ops::Range;

use crate::core::dna::NucCounts;

/// Sequence composition around a single base.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Composition {
    // Shannon entropy in bits
    pub entropy: f64,
    pub gc_fraction: f64,
}

/// Shannon entropy (bits) and GC fraction of the A/C/G/T distribution.
/// An empty distribution has zero entropy and zero GC.
pub fn entropy_gc(counts: &NucCounts) -> Composition {
    let total = counts.coverage();
    if total == 0 {
        return Composition::default();
    }
    let total = total as f64;

    let mut entropy = 0.0;
    for cnt in counts.to_array() {
        if cnt > 0 {
            let p = cnt as f64 / total;
            entropy -= p * p.log2();
        }
    }
    Composition { entropy, gc_fraction: counts.gc() as f64 / total }
}

/// Window of `min(width, len)` bases used for the position `pos`.
///
/// Positions in the first half of the sequence look forward (`[pos, pos + width)`), the rest
/// look backward (`(pos - width, pos]`). Windows that would cross a sequence end are shifted
/// back inside, so every window is fully contained in the sequence.
#[inline]
pub fn window(len: usize, width: NonZeroUsize, pos: usize) -> Range<usize> {
    debug_assert!(pos < len);
    let size = width.get().min(len);
    let start = if pos < len - 1 - pos { pos.min(len - size) } else { (pos + 1).saturating_sub(size) };
    start..start + size
}

/// Sliding-window composition of every base in the `sequence`.
pub fn composition(sequence: &[u8], width: NonZeroUsize) -> Vec<Composition> {
    // prefix[i] = counts in sequence[..i]
    let mut prefix = Vec::with_capacity(sequence.len() + 1);
    let mut running = NucCounts::zeros();
    prefix.push(running);
    for nuc in sequence {
        running.increment((*nuc).into());
        prefix.push(running);
    }

    (0..sequence.len())
        .map(|pos| {
            let w = window(sequence.len(), width, pos);
            entropy_gc(&prefix[w.end].minus(&prefix[w.start]))
        })
        .collect()
}
