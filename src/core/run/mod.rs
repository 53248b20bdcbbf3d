use std::cell::RefCell;

use rayon::prelude::*;
use thread_local::ThreadLocal;

pub use ctx::{BaseRunCtx, ContigRunCtx};
#[cfg(test)]
pub use ctx::MockContigRunCtx;

use crate::core::errors::{FeatureError, Result};
use crate::core::stats::PositionFeatures;

mod ctx;

#[derive(Clone, PartialEq, Debug)]
pub struct ContigFeatures {
    pub contig: String,
    pub features: Vec<PositionFeatures>,
}

// Contigs per worker thread held in memory at once
const CONTIGS_PER_THREAD: usize = 2;

/// Process all contigs in parallel on the current rayon pool, one context per worker thread.
/// Contigs are processed in chunks and each finished contig is passed to `oncontig` in the input
/// order, so only a chunk of feature matrices is kept in memory. Returns the total number of
/// consumed records.
pub fn contigs<Context, CtxBuilder, OnContig, E>(
    contigs: &[String],
    builder: CtxBuilder,
    mut oncontig: OnContig,
) -> std::result::Result<u64, E>
where
    Context: ContigRunCtx + Send,
    CtxBuilder: Fn() -> Result<Context> + Sync,
    OnContig: FnMut(ContigFeatures) -> std::result::Result<(), E>,
    E: From<FeatureError>,
{
    let ctxstore: ThreadLocal<RefCell<Context>> = ThreadLocal::new();
    let chunksize = rayon::current_num_threads().max(1) * CONTIGS_PER_THREAD;

    for chunk in contigs.chunks(chunksize) {
        let results = chunk
            .par_iter()
            .map(|contig| -> Result<ContigFeatures> {
                let ctx = ctxstore.get_or_try(|| builder().map(RefCell::new))?;
                let features = ctx.borrow_mut().process(contig)?;
                Ok(ContigFeatures { contig: contig.clone(), features })
            })
            .collect::<Result<Vec<_>>>()?;

        for result in results {
            oncontig(result)?;
        }
    }

    let consumed = ctxstore.into_iter().map(|x| x.into_inner().consumed()).sum();
    Ok(consumed)
}
