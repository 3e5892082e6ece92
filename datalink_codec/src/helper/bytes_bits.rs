use bitvec::prelude::*;

use crate::{DefaultConfig, LinkError};

/// An owned bit sequence, most significant bit first.
pub type Bits = BitVec<u8, Msb0>;

/// bytes to bits, MSB of every byte first.
pub fn bytes_to_bits(bytes: &[u8]) -> Bits {
  bytes.view_bits::<Msb0>().to_bitvec()
}

/// the reverse process of [`bytes_to_bits`].
/// `bits.len()` must be a multiple of 8.
pub fn bits_to_bytes(bits: &BitSlice<u8, Msb0>) -> Result<Vec<u8>, LinkError> {
  if bits.len() % DefaultConfig::BITS_PER_CHAR != 0 {
    return Err(LinkError::invariant(
      "bits_to_bytes",
      format!("{} bits is not a whole number of bytes", bits.len()),
    ));
  }
  Ok(
    bits
      .chunks_exact(DefaultConfig::BITS_PER_CHAR)
      .map(|byte| bits_to_int(byte) as u8)
      .collect(),
  )
}

/// The 8-bit representation of every character of `text`, concatenated in order.
pub fn chars_to_bits(text: &str) -> Bits {
  bytes_to_bits(text.as_bytes())
}

/// Turn a decoded bit stream back into text.
///
/// Every all-zero byte is taken to be padding and dropped.
/// **NOTE:** this is lossy, a message which really contains NUL loses those bytes.
pub fn bits_to_chars(bits: &BitSlice<u8, Msb0>) -> Result<String, LinkError> {
  let bytes: Vec<u8> = bits_to_bytes(bits)?.into_iter().filter(|&b| b != 0).collect();
  Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a bit string as an unsigned big-endian integer.
/// Bits beyond the 64 least significant ones are shifted out.
pub fn bits_to_int(bits: &BitSlice<u8, Msb0>) -> u64 {
  bits.iter().by_vals().fold(0, |acc, bit| (acc << 1) | bit as u64)
}

/// The lowest `width` bits of `value`, MSB first.
pub fn int_to_bits(value: u64, width: usize) -> Bits {
  (0..width).rev().map(|i| i < 64 && (value >> i) & 1 == 1).collect()
}

/// Render bits as a string of `'0'` and `'1'`.
pub fn bits_to_string(bits: &BitSlice<u8, Msb0>) -> String {
  bits.iter().by_vals().map(|bit| if bit { '1' } else { '0' }).collect()
}

/// Parse a string of `'0'` and `'1'`, `None` on any other character.
pub fn parse_bits(s: &str) -> Option<Bits> {
  s.chars()
    .map(|c| match c {
      '0' => Some(false),
      '1' => Some(true),
      _ => None,
    })
    .collect()
}
