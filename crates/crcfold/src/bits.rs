//! Bit-level helpers shared by the table generators and processors.
//!
//! Everything here is `const fn` so the rest of the crate can run at
//! compile time.

/// Mask selecting the bottom `w` bits; `w = 0` selects nothing.
#[inline]
pub(crate) const fn bottom_n_mask(w: u32) -> u64 {
  rshift(u64::MAX, 64 - w as i64)
}

/// Whether bit `b` of `n` is set. `b` must be below 64.
#[inline]
pub(crate) const fn bit_is_set(n: u64, b: u32) -> bool {
  (n >> b) & 1 != 0
}

/// Reflect the bottom `b` bits of `n`. The rest of the bits must be zero.
///
/// Reflects 10 bits at a time, transforming `JIHGFEDCBA` into `ABCDEFGHIJ`
/// with a pseudo-SIMD multiply sequence:
///
/// 1. Multiply to broadcast the bits:
///    ```text
///      ______________________________________________________JIHGFEDCBA
///    * _________1_________1_________1_________1_________1_________1____
///    = JIHGFEDCBAJIHGFEDCBAJIHGFEDCBAJIHGFEDCBAJIHGFEDCBAJIHGFEDCBA____
///    ```
/// 2. Mask out the bits we don't want:
///    ```text
///      JIHGFEDCBAJIHGFEDCBAJIHGFEDCBAJIHGFEDCBAJIHGFEDCBAJIHGFEDCBA____
///    & _____1____1_____1____1_____1____1_____1____1_____1____1_________
///    = _____E____J_____D____I_____C____H_____B____G_____A____F_________
///    ```
/// 3. Multiply again (equivalent to summing five shifted copies), which
///    gathers the surviving bits in reverse order at the top of the word.
/// 4. Shift right to extract the `b` reflected bits.
pub(crate) const fn reflect(n: u64, b: u32) -> u64 {
  if b <= 10 {
    ((n.wrapping_mul(0x0040_1004_0100_4010) & 0x0420_8410_8210_4200).wrapping_mul(0x0002_0020_0200_2002))
      >> (64 - b)
  } else {
    (reflect(n & 0x3FF, 10) << (b - 10)) | reflect(n >> 10, b - 10)
  }
}

/// A generalized left shift: shifting by 64 or more bits returns 0, and a
/// negative count shifts in the opposite direction (both are forbidden by
/// the builtin operator). This removes edge-case branches from the lane
/// arithmetic in the processors.
#[inline]
pub(crate) const fn lshift(n: u64, b: i64) -> u64 {
  if b.unsigned_abs() >= 64 {
    0
  } else if b < 0 {
    n >> -b
  } else {
    n << b
  }
}

/// Companion of [`lshift`].
#[inline]
pub(crate) const fn rshift(n: u64, b: i64) -> u64 {
  lshift(n, -b)
}
