use bitvec::prelude::*;

use crate::{
  helper::{bits_to_int, bits_to_string, int_to_bits, Bits},
  DefaultConfig, LinkError,
};

const DELIM_LEN: usize = DefaultConfig::POST_CODE_BITS;

/// the frame delimiter as a bit sequence
pub fn delimiter() -> Bits {
  int_to_bits(DefaultConfig::FRAME_DELIMITER as u64, DELIM_LEN)
}

/// Does `bits` begin with the frame delimiter?
pub fn starts_with_delimiter(bits: &BitSlice<u8, Msb0>) -> bool {
  bits.len() >= DELIM_LEN && bits_to_int(&bits[..DELIM_LEN]) == DefaultConfig::FRAME_DELIMITER as u64
}

/// Does `bits` end with the frame delimiter?
pub fn ends_with_delimiter(bits: &BitSlice<u8, Msb0>) -> bool {
  bits.len() >= DELIM_LEN && bits_to_int(&bits[bits.len() - DELIM_LEN..]) == DefaultConfig::FRAME_DELIMITER as u64
}

/// Wrap line coded bits with a delimiter on both sides.
pub fn frame(bits: &BitSlice<u8, Msb0>) -> Bits {
  let mut framed = Bits::with_capacity(bits.len() + 2 * DELIM_LEN);
  framed.extend_from_bitslice(&delimiter());
  framed.extend_from_bitslice(bits);
  framed.extend_from_bitslice(&delimiter());
  framed
}

/// Strip the delimiters added by [`frame`].
pub fn deframe(bits: &BitSlice<u8, Msb0>) -> Result<Bits, LinkError> {
  if bits.len() < 2 * DELIM_LEN || !starts_with_delimiter(bits) || !ends_with_delimiter(bits) {
    return Err(LinkError::desync(format!(
      "{} is not enclosed by frame delimiters",
      bits_to_string(bits)
    )));
  }
  Ok(bits[DELIM_LEN..bits.len() - DELIM_LEN].to_bitvec())
}
