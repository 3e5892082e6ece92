use bitvec::prelude::*;

use super::Bits;
use crate::{DefaultConfig, LinkError};

const fn gcd(a: usize, b: usize) -> usize {
  if b == 0 {
    a
  } else {
    gcd(b, a % b)
  }
}

/// Length of the framed bit stream for a padded message of `padded_len` bits:
/// every 4-bit group grows to 5 bits, plus a delimiter on each side.
fn framed_len(padded_len: usize) -> usize {
  padded_len / DefaultConfig::PRE_CODE_BITS * DefaultConfig::POST_CODE_BITS + 2 * DefaultConfig::POST_CODE_BITS
}

/// The minimum number of zero bits to put in front of a `len`-bit message, such that
/// - the padded message splits into whole 4-bit line code groups and whole bytes,
/// - the framed message splits into whole blocks of `msg_bits` bits.
///
/// Candidates advance by `lcm(4, 8)` bits, which grows the framed length by 10 bits each step.
/// The framed length of the first candidate is already a multiple of 10,
/// so a fit is reached within `msg_bits / gcd(10, msg_bits)` steps.
pub fn min_pad_bits(len: usize, msg_bits: usize) -> Result<usize, LinkError> {
  if msg_bits == 0 {
    return Err(LinkError::Config("msg_bits must be positive".into()));
  }
  const PRE: usize = DefaultConfig::PRE_CODE_BITS;
  const BYTE: usize = DefaultConfig::BITS_PER_CHAR;
  const LCM: usize = PRE / gcd(PRE, BYTE) * BYTE;
  let step_growth = LCM / PRE * DefaultConfig::POST_CODE_BITS;
  let period = msg_bits / gcd(step_growth, msg_bits);

  let first = len + (LCM - len % LCM) % LCM;
  (0..=period)
    .map(|k| first + k * LCM)
    .find(|&padded| framed_len(padded) % msg_bits == 0)
    .map(|padded| padded - len)
    .ok_or_else(|| LinkError::invariant("min_pad_bits", format!("no padding for len={len} msg_bits={msg_bits}")))
}

/// add `pad_len` zero bits at the beginning of the sequence.
pub fn add_padding(bits: &BitSlice<u8, Msb0>, pad_len: usize) -> Bits {
  let mut padded = Bits::repeat(false, pad_len);
  padded.extend_from_bitslice(bits);
  padded
}
