//! Parameterized CRC engine with compile-time evaluation, slice-by-N
//! processing, and parallel folding.
//!
//! Every CRC in the catalogue of parametrised CRC algorithms is six values:
//! width, polynomial, initial register, input/output reflection, and final
//! XOR. This crate encodes them as const generics of one [`Crc`] type, so
//! the 100+ predefined parameterizations, and any the caller declares,
//! share a single engine. Lookup tables are built by the compiler on first
//! use; declaring a parameterization costs nothing.
//!
//! # Quick Start
//!
//! ```
//! use crcfold::{Crc16Modbus, Crc32c};
//!
//! // One-shot (the default algorithm is slice-by-8).
//! assert_eq!(Crc32c::compute(b"123456789"), 0xE3069283);
//! assert_eq!(Crc16Modbus::compute(b"123456789"), 0x4B37);
//!
//! // Chunked: states are plain values, carried between calls.
//! let state = Crc32c::new().process(b"1234").process(b"56789");
//! assert_eq!(state.finalize(), 0xE3069283);
//!
//! // Or at compile time.
//! const CHECK: u64 = Crc32c::compute(b"123456789");
//! assert_eq!(CHECK, 0xE3069283);
//! ```
//!
//! # Algorithm Selectors
//!
//! | Selector | Strategy |
//! |----------|----------|
//! | [`SliceBy<N>`](SliceBy) | N-byte table-driven folds; `SliceBy<1>` is byte-at-a-time |
//! | [`Parallel<A>`](Parallel) | Split a sized input across the worker pool, fold with `A`, merge |
//! | [`DefaultAlgorithm`] | `SliceBy<8>` |
//!
//! ```
//! use crcfold::{Crc64Xz, Parallel, SliceBy};
//!
//! let data = vec![0xA5u8; 1 << 20];
//! let sequential = Crc64Xz::compute_with(SliceBy::<8>, &data);
//! let parallel = Crc64Xz::compute_with(Parallel(SliceBy::<8>), &data);
//! assert_eq!(parallel, sequential);
//! ```
//!
//! # Algebraic Operations
//!
//! CRC is linear over GF(2), and the engine exposes the algebra directly:
//! [`Crc::process_zero_bytes`] advances a register over n zero bytes in
//! O(log n) field multiplications, [`Crc::combine`] XORs two registers, and
//! [`Crc::combine_checksums`] merges two finalized checksums. The
//! [`parallel`] module builds chunk-level helpers on top for callers who
//! bring their own threads.
//!
//! # Custom Parameterizations
//!
//! Any width from 1 to 64 works; the engine widens sub-byte registers
//! internally and validates the parameters at compile time:
//!
//! ```
//! use crcfold::Crc;
//!
//! // CRC-10/ATM, written out by hand.
//! type MyCrc10 = Crc<10, 0x233, 0x000, false, false, 0x000>;
//! assert_eq!(MyCrc10::compute(b"123456789"), 0x199);
//! ```
//!
//! # Feature Flags
//!
//! - `std` (default): the `std::io::Write` adapter
//! - `parallel` (default, implies `std`): the rayon-backed [`Parallel`]
//!   selector; without it the selector degrades to its wrapped algorithm
//!
//! # no_std Support
//!
//! With default features disabled the crate is `no_std` and
//! allocation-free; only the sequential and algebraic pathways remain,
//! with identical results.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod algorithm;
mod bits;
mod byte;
mod catalog;
mod crc;
mod engine;
mod gf2;
pub mod parallel;
mod params;
mod tables;

pub use algorithm::{Algorithm, DefaultAlgorithm, Parallel, Sequential, SliceBy};
pub use byte::ByteLike;
pub use catalog::*;
pub use crc::Crc;
// Re-export the trait vocabulary for convenience.
pub use traits::{Checksum, ChecksumCombine};
