//! Parallel checksum computation.
//!
//! CRC is linear over GF(2), so a message can be split, the pieces folded
//! independently, and the partial results merged. The `Parallel` selector
//! does this internally across the rayon worker pool; the chunk helpers do
//! the same for caller-owned parallelism.
//!
//! Run with: `cargo run --example parallel -p crcfold`

use crcfold::{parallel::combine_checksums, Checksum, Crc64Xz, Parallel, SliceBy};

fn main() {
  println!("=== Parallel Checksum Examples ===\n");

  parallel_selector();
  caller_owned_chunks();
}

fn parallel_selector() {
  println!("--- Parallel Selector ---\n");

  let data: Vec<u8> = (0..32_000_000u32).map(|i| (i.wrapping_mul(17) % 256) as u8).collect();

  let sequential = Crc64Xz::compute_with(SliceBy::<8>, &data);
  let parallel = Crc64Xz::compute_with(Parallel(SliceBy::<8>), &data);

  println!("sequential: {sequential:#018X}");
  println!("parallel:   {parallel:#018X}");
  assert_eq!(sequential, parallel);
  println!("match over {} MiB\n", data.len() >> 20);
}

fn caller_owned_chunks() {
  println!("--- Caller-Owned Parallelism ---\n");

  let data: Vec<u8> = (0..4_000_000u32).map(|i| (i % 251) as u8).collect();
  let chunk_size = data.len() / 4;

  // Compute each chunk wherever convenient (threads, rayon, another
  // machine), then merge in order.
  let parts: Vec<(u64, usize)> = data
    .chunks(chunk_size)
    .map(|chunk| (Crc64Xz::checksum(chunk), chunk.len()))
    .collect();

  let merged = combine_checksums::<Crc64Xz>(&parts).unwrap();
  let direct = Crc64Xz::checksum(&data);

  println!("merged: {merged:#018X}");
  println!("direct: {direct:#018X}");
  assert_eq!(merged, direct);
  println!("match over {} chunks\n", parts.len());
}
