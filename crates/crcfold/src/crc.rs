//! The CRC register type and its operations.

use crate::algorithm::Algorithm;
use crate::bits::{bit_is_set, bottom_n_mask, reflect};
use crate::byte::{as_octets, ByteLike};
use crate::engine::{update_byte, update_slices, zero_advance};
use crate::params::{assert_params, canonical_width};

/// A CRC register, parameterized by the six values that define a CRC:
/// width, polynomial, initial value, input/output reflection, and final
/// XOR.
///
/// Declaring a new parameterization is a type alias and does no work; the
/// lookup tables behind it are materialized by the compiler the first time
/// the type is processed. The register itself is an opaque `Copy` value:
/// all operations consume a state and return a new one, and nothing here
/// allocates.
///
/// # Quick Start
///
/// ```
/// use crcfold::Crc32c;
///
/// // One-shot.
/// assert_eq!(Crc32c::compute(b"123456789"), 0xE3069283);
///
/// // Chunked: carry the state between calls.
/// let state = Crc32c::new().process(b"1234").process(b"56789");
/// assert_eq!(state.finalize(), 0xE3069283);
/// ```
///
/// # Compile-Time Evaluation
///
/// The sequential pathway is `const fn` end to end:
///
/// ```
/// use crcfold::Crc32c;
///
/// const CHECK: u64 = Crc32c::compute(b"123456789");
/// assert_eq!(CHECK, 0xE3069283);
/// ```
///
/// # Equality
///
/// Two states compare equal when they agree in the bits the
/// parameterization defines; garbage above the register width is ignored.
/// States of different parameterizations are different types and cannot be
/// compared at all.
#[derive(Clone, Copy, Debug)]
pub struct Crc<
  const WIDTH: u32,
  const POLY: u64,
  const INIT: u64,
  const REFIN: bool,
  const REFOUT: bool,
  const XOROUT: u64,
> {
  register: u64,
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  /// Structural validation of the six parameters. Referenced from every
  /// constructor, so an invalid parameterization fails to compile at its
  /// first use.
  const PARAMS_CHECKED: () = assert_params(WIDTH, POLY, INIT, XOROUT);

  /// Canonical form of the initial value: reflected when the
  /// parameterization reflects its input, left-aligned into a byte when the
  /// width is below 8.
  const INIT_REGISTER: u64 = {
    let () = Self::PARAMS_CHECKED;
    if REFIN {
      reflect(INIT, WIDTH)
    } else if WIDTH < 8 {
      INIT << (8 - WIDTH)
    } else {
      INIT
    }
  };

  /// The register value a well-formed `message || checksum` stream drives
  /// the register to: W shift steps from the final XOR value, then moved
  /// into the canonical bit layout.
  const RESIDUE: u64 = {
    let () = Self::PARAMS_CHECKED;
    let mask = bottom_n_mask(WIDTH);
    let mut residue = XOROUT;
    let mut i = 0;
    while i < WIDTH {
      residue = ((residue << 1) ^ (if bit_is_set(residue, WIDTH - 1) { POLY } else { 0 })) & mask;
      i += 1;
    }
    if REFIN {
      reflect(residue, WIDTH)
    } else if WIDTH < 8 {
      residue << (8 - WIDTH)
    } else {
      residue
    }
  };

  /// Fresh state carrying the canonical initial value.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { register: Self::INIT_REGISTER }
  }

  /// The zero state: the identity element of [`combine`](Self::combine).
  ///
  /// Partial results that will be XOR-combined later must start from here
  /// rather than from [`new`](Self::new), so the initial value enters the
  /// computation exactly once.
  #[inline]
  #[must_use]
  pub const fn zero() -> Self {
    let () = Self::PARAMS_CHECKED;
    Self { register: 0 }
  }

  /// Advance over `data` with the default algorithm (slice-by-8).
  ///
  /// Finalizing the result yields the CRC of everything this state has
  /// seen followed by `data`. Empty input returns the state unchanged.
  ///
  /// ```
  /// use crcfold::Crc64Xz;
  ///
  /// let state = Crc64Xz::new()
  ///   .process(b"Some data")
  ///   .process(b" processed in ")
  ///   .process(b"parts");
  /// assert_eq!(state.finalize(), Crc64Xz::compute(b"Some data processed in parts"));
  /// ```
  #[inline]
  #[must_use]
  pub const fn process(self, data: &[u8]) -> Self {
    Self { register: update_slices::<WIDTH, POLY, REFIN, 8>(self.register, data) }
  }

  /// Advance over byte-like `data` with an explicit algorithm selector.
  ///
  /// ```
  /// use crcfold::{Crc32c, SliceBy};
  ///
  /// let by_four = Crc32c::new().process_with(SliceBy::<4>, b"123456789");
  /// assert_eq!(by_four, Crc32c::new().process(b"123456789"));
  /// ```
  #[inline]
  #[must_use]
  pub fn process_with<A: Algorithm, T: ByteLike>(self, _algo: A, data: &[T]) -> Self {
    Self { register: A::update::<WIDTH, POLY, REFIN>(self.register, as_octets(data)) }
  }

  /// Advance over a pull-based byte sequence.
  ///
  /// Without random access there is no speed to be gained from slicing, so
  /// this is a plain byte-at-a-time loop. The result is identical to
  /// [`process`](Self::process) over a contiguous buffer with the same
  /// bytes.
  #[inline]
  #[must_use]
  pub fn process_iter<T, I>(self, bytes: I) -> Self
  where
    T: ByteLike,
    I: IntoIterator<Item = T>,
  {
    let mut register = self.register;
    for b in bytes {
      register = update_byte::<WIDTH, POLY, REFIN>(register, b.octet());
    }
    Self { register }
  }

  /// Advance as if `n` zero bytes had been processed, in O(log n) field
  /// multiplications.
  ///
  /// ```
  /// use crcfold::Crc32c;
  ///
  /// let s = Crc32c::new().process(b"abc");
  /// assert_eq!(s.process_zero_bytes(5), s.process(&[0u8; 5]));
  /// ```
  #[inline]
  #[must_use]
  pub const fn process_zero_bytes(self, n: u64) -> Self {
    Self { register: zero_advance::<WIDTH, POLY, REFIN>(self.register, n) }
  }

  /// XOR of two registers of the same parameterization.
  ///
  /// CRC is linear over GF(2): the CRC of the XOR of two equal-length
  /// zero-padded messages is the XOR of their CRCs. Together with
  /// [`process_zero_bytes`](Self::process_zero_bytes) this is what lets
  /// independently computed partial results be merged. Associative and
  /// commutative, with [`zero`](Self::zero) as identity.
  #[inline]
  #[must_use]
  pub const fn combine(self, other: Self) -> Self {
    Self { register: self.register ^ other.register }
  }

  /// The externally visible checksum of this state.
  ///
  /// Undoes sub-byte widening, applies the output reflection, and XORs the
  /// final mask. The value fits in the low `WIDTH` bits.
  #[inline]
  #[must_use]
  pub const fn finalize(self) -> u64 {
    let mut crc = self.register;
    if WIDTH < 8 && !REFIN {
      crc >>= 8 - WIDTH;
    }
    crc &= bottom_n_mask(WIDTH);
    if REFIN != REFOUT {
      crc = reflect(crc, WIDTH);
    }
    crc ^ XOROUT
  }

  /// Whether this state is the residue of a well-formed stream.
  ///
  /// A message followed by its own checksum (appended LSb-first when the
  /// parameterization reflects its output, MSb-first otherwise) always
  /// drives the register to the same constant; this compares against it.
  #[inline]
  #[must_use]
  pub const fn is_valid(self) -> bool {
    self.register & bottom_n_mask(canonical_width(WIDTH)) == Self::RESIDUE
  }

  /// One-shot checksum of `data` with the default algorithm.
  ///
  /// ```
  /// use crcfold::Crc16Modbus;
  ///
  /// assert_eq!(Crc16Modbus::compute(b"123456789"), 0x4B37);
  /// ```
  #[inline]
  #[must_use]
  pub const fn compute(data: &[u8]) -> u64 {
    Self::new().process(data).finalize()
  }

  /// One-shot checksum with an explicit algorithm selector.
  #[inline]
  #[must_use]
  pub fn compute_with<A: Algorithm, T: ByteLike>(algo: A, data: &[T]) -> u64 {
    Self::new().process_with(algo, data).finalize()
  }

  /// Validate a `message || checksum` stream with the default algorithm.
  ///
  /// ```
  /// use crcfold::Crc16Arc;
  ///
  /// let framed = [0x33u8, 0x22, 0x55, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 0x98, 0xAE];
  /// assert!(Crc16Arc::verify(&framed));
  /// ```
  #[inline]
  #[must_use]
  pub const fn verify(data: &[u8]) -> bool {
    Self::new().process(data).is_valid()
  }

  /// Validate with an explicit algorithm selector.
  #[inline]
  #[must_use]
  pub fn verify_with<A: Algorithm, T: ByteLike>(algo: A, data: &[T]) -> bool {
    Self::new().process_with(algo, data).is_valid()
  }

  /// `crc(A || B)` from the finalized `crc(A)`, `crc(B)`, and `len(B)`, in
  /// O(log len) time.
  ///
  /// The registers behind the two checksums are recovered, the first is
  /// advanced over `len_b` virtual zero bytes (corrected for the initial
  /// value, which must enter the stream exactly once), and the pieces are
  /// XORed back together.
  ///
  /// ```
  /// use crcfold::Crc32c;
  ///
  /// let (a, b) = (b"hello ".as_slice(), b"world".as_slice());
  /// let combined = Crc32c::combine_checksums(Crc32c::compute(a), Crc32c::compute(b), b.len() as u64);
  /// assert_eq!(combined, Crc32c::compute(b"hello world"));
  /// ```
  #[inline]
  #[must_use]
  pub const fn combine_checksums(crc_a: u64, crc_b: u64, len_b: u64) -> u64 {
    let extended = zero_advance::<WIDTH, POLY, REFIN>(Self::unfinalize(crc_a) ^ Self::INIT_REGISTER, len_b);
    Self { register: extended ^ Self::unfinalize(crc_b) }.finalize()
  }

  /// Inverse of [`finalize`](Self::finalize): the canonical register that
  /// finalizes to `crc`.
  const fn unfinalize(crc: u64) -> u64 {
    let mut register = (crc ^ XOROUT) & bottom_n_mask(WIDTH);
    if REFIN != REFOUT {
      register = reflect(register, WIDTH);
    }
    if WIDTH < 8 && !REFIN {
      register <<= 8 - WIDTH;
    }
    register
  }
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  Default for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  PartialEq for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    if REFIN {
      self.register == other.register
    } else {
      // Ignore whatever the shift register accumulated above the canonical
      // width; only the W-wide slice is the CRC.
      let mask = bottom_n_mask(canonical_width(WIDTH));
      self.register & mask == other.register & mask
    }
  }
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  Eq for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  traits::Checksum for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  const WIDTH: u32 = WIDTH;

  type Output = u64;

  #[inline]
  fn new() -> Self {
    Self::new()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    *self = (*self).process(data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    (*self).finalize()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::new();
  }

  #[inline]
  fn checksum(data: &[u8]) -> u64 {
    Self::compute(data)
  }
}

impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  traits::ChecksumCombine for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  #[inline]
  fn combine(crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    Self::combine_checksums(crc_a, crc_b, len_b as u64)
  }
}

/// Streams written into a state accumulate exactly as if passed to
/// [`Crc::process`], so `std::io::copy` can drive a checksum.
#[cfg(feature = "std")]
impl<const WIDTH: u32, const POLY: u64, const INIT: u64, const REFIN: bool, const REFOUT: bool, const XOROUT: u64>
  std::io::Write for Crc<WIDTH, POLY, INIT, REFIN, REFOUT, XOROUT>
{
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    *self = (*self).process(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use crate::catalog::{Crc10Atm, Crc32c, Crc5Usb, Crc64Xz};

  #[test]
  fn zero_is_combine_identity() {
    let s = Crc32c::new().process(b"payload");
    assert_eq!(s.combine(Crc32c::zero()), s);
    assert_eq!(Crc32c::zero().combine(s), s);
  }

  #[test]
  fn equality_ignores_register_garbage() {
    // The second message is the CRC-10/ATM generator polynomial itself, so
    // both streams leave the same remainder.
    let a = Crc10Atm::new().process_with(crate::SliceBy::<1>, &[0x00u8, 0x00]);
    let b = Crc10Atm::new().process_with(crate::SliceBy::<1>, &[0x06u8, 0x33]);
    assert_eq!(a, b);
  }

  #[test]
  fn sub_byte_round_trip() {
    // CRC-5/USB check value, through the widened pathway.
    assert_eq!(Crc5Usb::compute(b"123456789"), 0x19);
    let state = Crc5Usb::new().process(b"1234").process(b"56789");
    assert_eq!(state.finalize(), 0x19);
  }

  #[test]
  fn residue_reached_by_self_framed_stream() {
    let message = b"framing check";
    let crc = Crc64Xz::compute(message);
    let mut framed = message.to_vec();
    framed.extend_from_slice(&crc.to_le_bytes());
    assert!(Crc64Xz::verify(&framed));
    assert!(!Crc64Xz::verify(message));
  }

  #[cfg(feature = "std")]
  #[test]
  fn io_write_adapter() {
    use std::io::Write;

    let mut state = Crc32c::new();
    state.write_all(b"123").unwrap();
    write!(state, "456789").unwrap();
    assert_eq!(state.finalize(), 0xE306_9283);
  }
}
