//! Engine laws, checked over deterministic pseudo-random data.

use crcfold::*;

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

const LENGTHS: &[usize] = &[0, 1, 2, 3, 4, 7, 8, 9, 15, 16, 17, 31, 32, 63, 64, 65, 255, 256, 1024, 4093];

#[test]
fn every_slice_width_agrees_with_byte_at_a_time() {
  // The sample set spans reflected and unreflected parameterizations,
  // sub-byte widths, widths that are not a whole number of bytes, and
  // mixed reflection (crc12_umts).
  macro_rules! run_for {
    ($ty:ty, $name:expr) => {{
      let name = $name;
      for &len in LENGTHS {
        let data = gen_bytes(len, 0x9E37_79B9_7F4A_7C15 ^ len as u64);
        let reference = <$ty>::compute_with(SliceBy::<1>, &data);
        assert_eq!(<$ty>::compute_with(SliceBy::<2>, &data), reference, "{name} N=2 len={len}");
        assert_eq!(<$ty>::compute_with(SliceBy::<3>, &data), reference, "{name} N=3 len={len}");
        assert_eq!(<$ty>::compute_with(SliceBy::<5>, &data), reference, "{name} N=5 len={len}");
        assert_eq!(<$ty>::compute_with(SliceBy::<8>, &data), reference, "{name} N=8 len={len}");
        assert_eq!(<$ty>::compute_with(SliceBy::<16>, &data), reference, "{name} N=16 len={len}");
      }
    }};
  }
  run_for!(Crc3Rohc, "crc3_rohc");
  run_for!(Crc5EpcC1g2, "crc5_epc_c1g2");
  run_for!(Crc7Umts, "crc7_umts");
  run_for!(Crc10Atm, "crc10_atm");
  run_for!(Crc12Umts, "crc12_umts");
  run_for!(Crc16Modbus, "crc16_modbus");
  run_for!(Crc16Xmodem, "crc16_xmodem");
  run_for!(Crc24Openpgp, "crc24_openpgp");
  run_for!(Crc32c, "crc32c");
  run_for!(Crc32Mpeg2, "crc32_mpeg2");
  run_for!(Crc40Gsm, "crc40_gsm");
  run_for!(Crc64Xz, "crc64_xz");
  run_for!(Crc64We, "crc64_we");
}

#[test]
fn chunk_composition() {
  let data = gen_bytes(2048, 0xD1B5_4A32_D192_ED03);
  let whole32 = Crc32c::new().process(&data);
  let whole64 = Crc64Xz::new().process(&data);
  for &split in &[0usize, 1, 7, 8, 100, 1024, 2047, 2048] {
    let (a, b) = data.split_at(split);
    assert_eq!(Crc32c::new().process(a).process(b), whole32, "split={split}");
    assert_eq!(Crc64Xz::new().process(a).process(b), whole64, "split={split}");
  }
}

#[test]
fn empty_input_is_identity() {
  let s = Crc32c::new().process(b"prefix");
  assert_eq!(s.process(b""), s);
  assert_eq!(s.process_iter([0u8; 0]), s);
  assert_eq!(Crc10Atm::new().process(b""), Crc10Atm::new());
}

#[test]
fn zero_byte_fast_path() {
  fn go<F, G>(process_zeros: F, process: G, name: &str)
  where
    F: Fn(u64) -> u64,
    G: Fn(&[u8]) -> u64,
  {
    for n in 0..64u64 {
      let zeros = vec![0u8; n as usize];
      assert_eq!(process_zeros(n), process(&zeros), "{name} n={n}");
    }
  }
  let s32 = Crc32c::new().process(b"seed material");
  go(|n| s32.process_zero_bytes(n).finalize(), |z| s32.process(z).finalize(), "crc32c");
  let s10 = Crc10Atm::new().process(b"seed material");
  go(|n| s10.process_zero_bytes(n).finalize(), |z| s10.process(z).finalize(), "crc10_atm");
  let s5 = Crc5Usb::new().process(b"seed");
  go(|n| s5.process_zero_bytes(n).finalize(), |z| s5.process(z).finalize(), "crc5_usb");
  let s64 = Crc64We::new().process(b"seed");
  go(|n| s64.process_zero_bytes(n).finalize(), |z| s64.process(z).finalize(), "crc64_we");

  // Power-of-two counts up to 2^63 must complete in bounded time.
  for k in 0..64 {
    let _ = s64.process_zero_bytes(1u64 << k);
  }
  let _ = s32.process_zero_bytes(u64::MAX);
}

#[test]
fn combine_laws() {
  let a = Crc64Xz::zero().process(b"alpha");
  let b = Crc64Xz::zero().process(b"bravo");
  let c = Crc64Xz::zero().process(b"charlie");
  assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
  assert_eq!(a.combine(b), b.combine(a));
  assert_eq!(a.combine(Crc64Xz::zero()), a);
}

#[test]
fn parallel_matches_sequential() {
  for &len in &[0usize, 1, 3, 7, 100, 4096, 1 << 20] {
    let data = gen_bytes(len, 0x5D58_39A7_3D87_1CEB ^ len as u64);
    assert_eq!(
      Crc32c::compute_with(Parallel(SliceBy::<8>), &data),
      Crc32c::compute_with(SliceBy::<8>, &data),
      "crc32c len={len}"
    );
    assert_eq!(
      Crc64Xz::compute_with(Parallel(SliceBy::<8>), &data),
      Crc64Xz::compute_with(SliceBy::<8>, &data),
      "crc64_xz len={len}"
    );
    assert_eq!(
      Crc10Atm::compute_with(Parallel(SliceBy::<4>), &data),
      Crc10Atm::compute_with(SliceBy::<4>, &data),
      "crc10_atm len={len}"
    );
    assert_eq!(
      Crc5Usb::compute_with(Parallel(SliceBy::<1>), &data),
      Crc5Usb::compute_with(SliceBy::<1>, &data),
      "crc5_usb len={len}"
    );
  }
}

#[test]
fn parallel_carries_live_state() {
  // The first chunk must continue from the caller's register, not from a
  // fresh one.
  let head = gen_bytes(333, 1);
  let tail = gen_bytes(1 << 18, 2);
  let mut whole = head.clone();
  whole.extend_from_slice(&tail);
  let split = Crc64Xz::new().process(&head).process_with(Parallel(SliceBy::<8>), &tail);
  assert_eq!(split.finalize(), Crc64Xz::compute(&whole));
}

#[test]
fn pull_based_input_matches_contiguous() {
  let data = gen_bytes(777, 42);
  let from_slice = Crc32c::new().process(&data);
  assert_eq!(Crc32c::new().process_iter(data.iter().copied()), from_slice);

  // A fragmented source: the same bytes pulled out of scattered chunks.
  let fragments: Vec<Vec<u8>> = data.chunks(13).map(|c| c.to_vec()).collect();
  let from_fragments = Crc32c::new().process_iter(fragments.iter().flat_map(|f| f.iter().copied()));
  assert_eq!(from_fragments, from_slice);

  assert_eq!(Crc40Gsm::new().process_iter(data.iter().copied()), Crc40Gsm::new().process(&data));
}

#[test]
fn signed_bytes_are_octets() {
  let unsigned: Vec<u8> = gen_bytes(100, 7);
  let signed: Vec<i8> = unsigned.iter().map(|&b| b as i8).collect();
  assert_eq!(
    Crc32c::compute_with(SliceBy::<8>, &signed),
    Crc32c::compute_with(SliceBy::<8>, &unsigned)
  );
  assert_eq!(
    Crc16Modbus::new().process_iter(signed.iter().copied()),
    Crc16Modbus::new().process_iter(unsigned.iter().copied())
  );
}

#[test]
fn streaming_trait_matches_oneshot() {
  let data = gen_bytes(1500, 99);
  let mut hasher = Crc64Xz::new();
  for chunk in data.chunks(97) {
    hasher.update(chunk);
  }
  assert_eq!(Checksum::finalize(&hasher), Crc64Xz::compute(&data));

  hasher.reset();
  hasher.update(b"123456789");
  assert_eq!(Checksum::finalize(&hasher), 0x995DC9BBDF1939FA);
  assert_eq!(Crc64Xz::checksum(&data), Crc64Xz::compute(&data));
}

#[test]
fn finalized_combination() {
  fn go<F: Fn(&[u8]) -> u64, G: Fn(u64, u64, u64) -> u64>(compute: F, combine: G, name: &str) {
    let data = gen_bytes(512, 0xBADC_0FFE);
    for &split in &[0usize, 1, 8, 63, 256, 511, 512] {
      let (a, b) = data.split_at(split);
      assert_eq!(
        combine(compute(a), compute(b), b.len() as u64),
        compute(&data),
        "{name} split={split}"
      );
    }
  }
  go(|d| Crc32c::compute(d), Crc32c::combine_checksums, "crc32c");
  go(|d| Crc64Xz::compute(d), Crc64Xz::combine_checksums, "crc64_xz");
  go(|d| Crc16Xmodem::compute(d), Crc16Xmodem::combine_checksums, "crc16_xmodem");
  go(|d| Crc24Openpgp::compute(d), Crc24Openpgp::combine_checksums, "crc24_openpgp");
  go(|d| Crc5Usb::compute(d), Crc5Usb::combine_checksums, "crc5_usb");
  go(|d| Crc12Umts::compute(d), Crc12Umts::combine_checksums, "crc12_umts");
}

// Concrete end-to-end scenarios.

#[test]
fn crc64_xz_streamed_in_three_parts() {
  let state = Crc64Xz::new()
    .process(b"Some data")
    .process(b" processed in ")
    .process(b"parts");
  assert_eq!(state.finalize(), Crc64Xz::compute(b"Some data processed in parts"));
  assert_eq!(state.finalize(), 0x0B29_4BF5_8D16_8906);
}

#[test]
fn crc32c_framed_message_is_valid() {
  let framed: &[u8] = &[
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1A, 0x1B, 0x1C, 0x1D, 0x1E, 0x1F,
    0x4E, 0x79, 0xDD, 0x46,
  ];
  assert!(Crc32c::verify(framed));
  assert!(!Crc32c::verify(&framed[..35]));
}

#[test]
fn crc16_arc_framed_message_is_valid() {
  let framed: &[u8] = &[0x33, 0x22, 0x55, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 0x98, 0xAE];
  assert!(Crc16Arc::verify(framed));
}

#[test]
fn self_framed_streams_are_valid() {
  // Reflected output appends the checksum LSb-first; unreflected output
  // appends it MSb-first.
  let message = gen_bytes(57, 0xFEED);

  let mut framed = message.clone();
  framed.extend_from_slice(&Crc32c::compute(&message).to_le_bytes()[..4]);
  assert!(Crc32c::verify(&framed));

  let mut framed = message.clone();
  framed.extend_from_slice(&Crc16Gsm::compute(&message).to_be_bytes()[6..]);
  assert!(Crc16Gsm::verify(&framed));

  let mut framed = message.clone();
  framed.extend_from_slice(&Crc64Xz::compute(&message).to_le_bytes());
  assert!(Crc64Xz::verify(&framed));

  assert!(!Crc32c::verify(&message));
}
