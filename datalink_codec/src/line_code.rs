use bitvec::prelude::*;

use crate::{
  helper::{bits_to_int, int_to_bits, Bits},
  DefaultConfig, LinkError,
};

/// 4B5B data codewords, indexed by the 4-bit value.
pub const ENCODE_4B5B: [u8; 16] = [
  0b11110, 0b01001, 0b10100, 0b10101, 0b01010, 0b01011, 0b01110, 0b01111, //
  0b10010, 0b10011, 0b10110, 0b10111, 0b11010, 0b11011, 0b11100, 0b11101,
];

/// marks a 5-bit pattern that is not a data codeword
const CONTROL: u8 = 0xff;

/// inverse of [`ENCODE_4B5B`], indexed by the 5-bit value.
/// Control symbols (including the frame delimiter) map to `CONTROL`.
const DECODE_4B5B: [u8; 32] = {
  let mut table = [CONTROL; 32];
  let mut i = 0;
  while i < 16 {
    table[ENCODE_4B5B[i] as usize] = i as u8;
    i += 1;
  }
  table
};

/// Map every 4-bit group to its 5-bit codeword.
/// `bits.len()` must be a multiple of 4.
pub fn encode_4b5b(bits: &BitSlice<u8, Msb0>) -> Result<Bits, LinkError> {
  const PRE: usize = DefaultConfig::PRE_CODE_BITS;
  const POST: usize = DefaultConfig::POST_CODE_BITS;
  if bits.len() % PRE != 0 {
    return Err(LinkError::invariant(
      "encode_4b5b",
      format!("{} bits is not a whole number of {PRE}-bit groups", bits.len()),
    ));
  }
  let mut code = Bits::with_capacity(bits.len() / PRE * POST);
  for group in bits.chunks_exact(PRE) {
    let codeword = ENCODE_4B5B[bits_to_int(group) as usize];
    code.extend_from_bitslice(&int_to_bits(codeword as u64, POST));
  }
  Ok(code)
}

/// the reverse process of [`encode_4b5b`].
/// `bits.len()` must be a multiple of 5 and every group must be a data codeword.
pub fn decode_4b5b(bits: &BitSlice<u8, Msb0>) -> Result<Bits, LinkError> {
  const PRE: usize = DefaultConfig::PRE_CODE_BITS;
  const POST: usize = DefaultConfig::POST_CODE_BITS;
  if bits.len() % POST != 0 {
    return Err(LinkError::invariant(
      "decode_4b5b",
      format!("{} bits is not a whole number of {POST}-bit groups", bits.len()),
    ));
  }
  let mut data = Bits::with_capacity(bits.len() / POST * PRE);
  for group in bits.chunks_exact(POST) {
    let codeword = bits_to_int(group) as u8;
    match DECODE_4B5B[codeword as usize] {
      CONTROL => return Err(LinkError::InvalidCodeword(codeword)),
      value => data.extend_from_bitslice(&int_to_bits(value as u64, PRE)),
    }
  }
  Ok(data)
}

/// Is the 5-bit pattern reserved for control purposes?
pub fn is_control_symbol(codeword: u8) -> bool {
  DECODE_4B5B.get(codeword as usize).map_or(true, |&v| v == CONTROL)
}
