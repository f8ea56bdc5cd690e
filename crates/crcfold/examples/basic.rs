//! Basic usage: one-shot, streaming, custom parameterizations, validation.
//!
//! Run with: `cargo run --example basic -p crcfold`

use crcfold::{Checksum, Crc, Crc16Modbus, Crc32c, Crc64Xz};

fn main() {
  println!("=== Basic Checksum Examples ===\n");

  one_shot();
  streaming();
  custom_parameterization();
  validation();
}

fn one_shot() {
  println!("--- One-Shot ---\n");

  println!("CRC-32C(\"123456789\")      = {:#010X}", Crc32c::compute(b"123456789"));
  println!("CRC-16/MODBUS(\"123456789\") = {:#06X}", Crc16Modbus::compute(b"123456789"));
  println!("CRC-64/XZ(\"123456789\")    = {:#018X}\n", Crc64Xz::compute(b"123456789"));
}

fn streaming() {
  println!("--- Streaming ---\n");

  // States are plain values; carry one between calls.
  let state = Crc64Xz::new()
    .process(b"Some data")
    .process(b" processed in ")
    .process(b"parts");
  println!("chunked:  {:#018X}", state.finalize());
  println!("one-shot: {:#018X}", Crc64Xz::compute(b"Some data processed in parts"));
  assert_eq!(state.finalize(), Crc64Xz::compute(b"Some data processed in parts"));

  // Or through the streaming trait.
  let mut hasher = Crc32c::new();
  hasher.update(b"hello ");
  hasher.update(b"world");
  println!("hasher:   {:#010X}\n", Checksum::finalize(&hasher));
}

fn custom_parameterization() {
  println!("--- Custom Parameterization ---\n");

  // Any width from 1 to 64 bits; this is CRC-10/ATM written out by hand.
  type MyCrc10 = Crc<10, 0x233, 0x000, false, false, 0x000>;
  println!("CRC-10/ATM(\"123456789\") = {:#05X}\n", MyCrc10::compute(b"123456789"));
  assert_eq!(MyCrc10::compute(b"123456789"), 0x199);
}

fn validation() {
  println!("--- Validation ---\n");

  let message = b"frame payload";
  let mut framed = message.to_vec();
  framed.extend_from_slice(&Crc32c::compute(message).to_le_bytes()[..4]);

  println!("verify(message ++ crc) = {}", Crc32c::verify(&framed));
  println!("verify(message alone)  = {}", Crc32c::verify(message));
  assert!(Crc32c::verify(&framed));
}
