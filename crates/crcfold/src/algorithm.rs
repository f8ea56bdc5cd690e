//! Algorithm selectors.
//!
//! Selectors are zero-sized tag types dispatched statically, so picking one
//! costs nothing at run time. [`SliceBy`] is the sequential table-driven
//! strategy; [`Parallel`] wraps a sequential selector and spreads a sized
//! input across the host's worker pool. `Parallel<Parallel<_>>` does not
//! type-check, and `SliceBy<0>` fails constant evaluation of its tables.

use crate::engine;

mod sealed {
  pub trait Sealed {}
}

/// A processing strategy accepted by the `*_with` operations.
///
/// Implemented by [`SliceBy`] and [`Parallel`]; the trait is sealed.
pub trait Algorithm: Copy + sealed::Sealed {
  /// Advance a canonical register over `data`.
  #[doc(hidden)]
  fn update<const WIDTH: u32, const POLY: u64, const REFIN: bool>(crc: u64, data: &[u8]) -> u64;
}

/// Selectors that may be wrapped by [`Parallel`].
///
/// [`Parallel`] itself does not implement this, which is what makes nested
/// parallelism unrepresentable.
pub trait Sequential: Algorithm {}

/// Table-driven processing that consumes `N` bytes per loop iteration,
/// using `N` 256-entry lookup tables.
///
/// `SliceBy<1>` is plain byte-at-a-time processing; `SliceBy<8>` is the
/// default. Larger `N` trades table footprint (2 KiB per lane) for fewer
/// iterations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceBy<const N: usize>;

impl<const N: usize> sealed::Sealed for SliceBy<N> {}

impl<const N: usize> Algorithm for SliceBy<N> {
  #[inline]
  fn update<const WIDTH: u32, const POLY: u64, const REFIN: bool>(crc: u64, data: &[u8]) -> u64 {
    engine::update_slices::<WIDTH, POLY, REFIN, N>(crc, data)
  }
}

impl<const N: usize> Sequential for SliceBy<N> {}

/// Chunked processing of a sized input across the host's worker pool.
///
/// Each chunk is folded with `A` from a zero register (the first chunk from
/// the live register), zero-extended to the end of the message, and the
/// partial registers are XORed back together. Activates only when the
/// `parallel` feature is enabled and the input is long enough to split;
/// otherwise it delegates to `A` with an identical result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parallel<A: Sequential>(pub A);

impl<A: Sequential> sealed::Sealed for Parallel<A> {}

impl<A: Sequential> Algorithm for Parallel<A> {
  #[inline]
  fn update<const WIDTH: u32, const POLY: u64, const REFIN: bool>(crc: u64, data: &[u8]) -> u64 {
    crate::parallel::update_parallel::<A, WIDTH, POLY, REFIN>(crc, data)
  }
}

/// The selector used when none is given: [`SliceBy<8>`].
pub type DefaultAlgorithm = SliceBy<8>;
