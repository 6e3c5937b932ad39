//! Static row partitioning and the encoder's worker pool.
//!
//! Every row costs the same (one registry probe), so `[0, nrows)` is cut into `k` contiguous
//! ranges up front and each worker owns one range and the matching slice of the output. There
//! is no shared iteration state and no further splitting.

use crate::error::EncodeResult;
use crate::options::EncodeOptions;
use std::ops::Range;

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use rayon::{prelude::*, ThreadPool};
#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use std::sync::OnceLock;

/// Crate-local Rayon pool.
///
/// Building our own pool instead of relying on the global one means a failed initialization
/// (e.g. thread limits on a crowded host) degrades to serial encoding instead of panicking.
#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
static ENCODE_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
fn desired_threads() -> usize {
    ["LABELENC_NUM_THREADS", "RAYON_NUM_THREADS"]
        .iter()
        .find_map(|var| {
            std::env::var(var)
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|&n| n > 0)
        })
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
}

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
fn build_pool() -> Option<ThreadPool> {
    let requested = desired_threads().max(1);
    let try_build = |n| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .thread_name(|i| format!("labelenc-{i}"))
            .build()
    };

    match try_build(requested) {
        Ok(pool) => Some(pool),
        Err(err) if requested > 1 => {
            log::warn!(
                "failed to build {requested}-thread encode pool ({err}); retrying with one thread"
            );
            try_build(1).ok()
        }
        Err(err) => {
            log::warn!("failed to build encode pool ({err}); encoding serially");
            None
        }
    }
}

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
fn encode_pool() -> Option<&'static ThreadPool> {
    ENCODE_POOL.get_or_init(build_pool).as_ref()
}

/// Number of threads the encoder can run on.
pub fn available_workers() -> usize {
    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    {
        encode_pool().map_or(1, ThreadPool::current_num_threads)
    }
    #[cfg(not(all(feature = "parallel", not(target_arch = "wasm32"))))]
    {
        1
    }
}

/// How many ranges to cut `nrows` into under `options`.
pub(crate) fn worker_count(nrows: usize, options: &EncodeOptions) -> usize {
    let requested = options.threads.unwrap_or_else(available_workers).max(1);
    let by_size = nrows.div_ceil(options.min_rows_per_worker.max(1));
    requested.min(by_size).max(1)
}

/// Split `[0, nrows)` into `workers` contiguous ranges whose lengths differ by at most one.
pub(crate) fn static_ranges(nrows: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.clamp(1, nrows.max(1));
    let base = nrows / workers;
    let extra = nrows % workers;

    let mut start = 0;
    (0..workers)
        .map(|w| {
            let len = base + usize::from(w < extra);
            let range = start..start + len;
            start += len;
            range
        })
        .collect()
}

/// Run `work(range, out_slice)` for every range, handing each worker the output slots of its
/// own rows. The first error is returned; remaining ranges may or may not have run.
pub(crate) fn for_each_range<T, F>(
    out: &mut [T],
    ranges: &[Range<usize>],
    work: F,
) -> EncodeResult<()>
where
    T: Send,
    F: Fn(Range<usize>, &mut [T]) -> EncodeResult<()> + Sync,
{
    let mut parts = Vec::with_capacity(ranges.len());
    let mut rest = out;
    for range in ranges {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        parts.push((range.clone(), head));
        rest = tail;
    }
    debug_assert!(rest.is_empty(), "ranges must cover the output");

    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    {
        if parts.len() > 1 {
            if let Some(pool) = encode_pool() {
                return pool.install(|| {
                    parts
                        .into_par_iter()
                        .try_for_each(|(range, slots)| work(range, slots))
                });
            }
        }
    }

    parts
        .into_iter()
        .try_for_each(|(range, slots)| work(range, slots))
}
