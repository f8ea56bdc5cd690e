//! Parallel folding and chunk-combination helpers.
//!
//! The [`Parallel`](crate::Parallel) selector splits a sized input across
//! the host's worker pool: every chunk is folded independently (the first
//! from the live register, the rest from zero), zero-extended to the end of
//! the message with [`process_zero_bytes`](crate::Crc::process_zero_bytes),
//! and the partial registers are XORed back together. Linearity of the CRC
//! over GF(2) makes the reduction exact, so the result is identical to the
//! sequential fold regardless of worker count.
//!
//! The crate owns no threads: rayon provides the worker-count hint and the
//! map/reduce primitive. Users who bring their own parallelism instead can
//! compute per-chunk checksums however they like and merge them with
//! [`checksum_chunks`] or [`combine_checksums`].
//!
//! ```
//! use crcfold::{parallel::checksum_chunks, Checksum, Crc32c};
//!
//! let data = b"The quick brown fox jumps over the lazy dog";
//! let chunks: Vec<&[u8]> = data.chunks(16).collect();
//!
//! assert_eq!(checksum_chunks::<Crc32c>(&chunks), Crc32c::checksum(data));
//! ```

use traits::ChecksumCombine;

use crate::algorithm::Sequential;

/// Split `data` across the worker pool, fold each chunk with `A`, and
/// reduce the zero-extended partial registers by XOR.
///
/// Chunk 0 absorbs the division remainder so every later chunk has the same
/// length; inputs too short to give every worker a chunk fall back to the
/// wrapped sequential algorithm.
#[cfg(feature = "parallel")]
pub(crate) fn update_parallel<A: Sequential, const WIDTH: u32, const POLY: u64, const REFIN: bool>(
  crc: u64,
  data: &[u8],
) -> u64 {
  use rayon::iter::{IntoParallelIterator, ParallelIterator};

  use crate::engine::zero_advance;

  let len = data.len();
  let workers = rayon::current_num_threads().max(1);
  let chunk = len / workers;
  if chunk == 0 || workers == 1 {
    return A::update::<WIDTH, POLY, REFIN>(crc, data);
  }
  let remainder = len - workers * chunk;

  (0..workers)
    .into_par_iter()
    .map(|i| {
      let begin = if i == 0 { 0 } else { remainder + i * chunk };
      let end = remainder + (i + 1) * chunk;
      let seed = if i == 0 { crc } else { 0 };
      let partial = A::update::<WIDTH, POLY, REFIN>(seed, &data[begin..end]);
      zero_advance::<WIDTH, POLY, REFIN>(partial, (len - end) as u64)
    })
    .reduce(|| 0, |a, b| a ^ b)
}

/// Without a parallel facility the selector degrades to its wrapped
/// algorithm, with observably identical output.
#[cfg(not(feature = "parallel"))]
pub(crate) fn update_parallel<A: Sequential, const WIDTH: u32, const POLY: u64, const REFIN: bool>(
  crc: u64,
  data: &[u8],
) -> u64 {
  A::update::<WIDTH, POLY, REFIN>(crc, data)
}

/// Checksum of the concatenation of `chunks`, via per-chunk checksums and
/// O(log n) combination.
///
/// Equivalent to computing the checksum of the concatenated data; the
/// chunks may have been checksummed on different threads, as long as they
/// are passed here in order. Empty input yields the checksum of empty data.
#[inline]
pub fn checksum_chunks<C: ChecksumCombine>(chunks: &[&[u8]]) -> C::Output {
  let Some((first, rest)) = chunks.split_first() else {
    return C::checksum(&[]);
  };

  let mut result = C::checksum(first);
  for chunk in rest {
    result = C::combine(result, C::checksum(chunk), chunk.len());
  }
  result
}

/// Combine pre-computed `(checksum, chunk_length)` pairs, in order, into
/// the checksum of the concatenated data. Returns `None` for an empty
/// slice.
///
/// ```
/// use crcfold::{parallel::combine_checksums, Checksum, Crc64Xz};
///
/// let data = b"hello world";
/// let (a, b) = data.split_at(6);
/// let parts = [(Crc64Xz::checksum(a), a.len()), (Crc64Xz::checksum(b), b.len())];
///
/// assert_eq!(combine_checksums::<Crc64Xz>(&parts), Some(Crc64Xz::checksum(data)));
/// ```
#[inline]
pub fn combine_checksums<C: ChecksumCombine>(checksums: &[(C::Output, usize)]) -> Option<C::Output> {
  let mut iter = checksums.iter();
  let &(first, _) = iter.next()?;

  let mut result = first;
  for &(crc, len) in iter {
    result = C::combine(result, crc, len);
  }
  Some(result)
}
