//! Non-cryptographic checksum traits.
//!
//! Traits for checksum algorithms such as the CRC family.
//!
//! - **Streaming**: Incremental updates for large or fragmented data
//! - **Parallelism**: Combine operation for independently computed chunks
//! - **Zero-cost**: Everything is inline-friendly and allocation-free

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates and streaming data.
///
/// # Usage Pattern
///
/// ```text
/// // One-shot (fastest)
/// let crc = Crc32c::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Crc32c::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let crc = hasher.finalize();
/// ```
pub trait Checksum: Clone + Default {
  /// Checksum width in bits.
  ///
  /// CRC parameterizations range from 3 to 64 bits; widths that are not a
  /// whole number of bytes are common, so the width is reported in bits
  /// rather than bytes.
  const WIDTH: u32;

  /// The checksum output type.
  ///
  /// Wide enough to carry `WIDTH` bits; the value always fits in the low
  /// `WIDTH` bits.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  fn new() -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }
}

/// Checksums that support parallel computation via combination.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)`
/// in O(log n) time. This enables parallel checksum computation:
///
/// 1. Split data into chunks
/// 2. Compute checksums independently (possibly in parallel)
/// 3. Combine results in order
///
/// # Mathematical Background
///
/// CRC is linear over GF(2):
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
///
/// up to an affine correction for nonzero initial values. The exponentiation
/// uses square-and-multiply for O(log n) complexity.
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
