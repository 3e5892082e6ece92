use bitvec::prelude::*;

use crate::{
  helper::{bits_to_string, Bits},
  DefaultConfig, LinkError,
};

fn is_parity_position(idx: usize) -> bool {
  idx.is_power_of_two()
}

/// 1-indexed positions checked by the parity bit at `p`:
/// starting at `p`, take `p` positions, skip `p` positions, and so on until `n`.
fn covered_by(p: usize, n: usize) -> impl Iterator<Item = usize> {
  (p..=n).filter(move |idx| idx & p != 0)
}

/// Parity of the positions covered by `p`, leaving out position `p` itself.
/// `code` is 0-indexed, position `i` lives at `code[i - 1]`.
fn parity(code: &BitSlice<u8, Msb0>, p: usize) -> bool {
  covered_by(p, code.len())
    .filter(|&idx| idx != p)
    .fold(false, |acc, idx| acc ^ code[idx - 1])
}

/// The smallest `r >= 1` with `msg_bits + r + 1 <= 2^r`, `None` if that does not fit in a `usize`.
pub fn min_redundant_bits(msg_bits: usize) -> Option<usize> {
  (1..usize::BITS as usize).find_map(|r| {
    let needed = msg_bits.checked_add(r + 1)?;
    (needed <= 1 << r).then_some(r)
  })
}

/// Size of one Hamming block: `msg_bits` data bits protected by `red_bits` parity bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingLayout {
  msg_bits: usize,
  red_bits: usize,
}

impl HammingLayout {
  pub fn new(msg_bits: usize) -> Result<Self, LinkError> {
    if msg_bits == 0 {
      return Err(LinkError::Config("msg_bits must be positive".into()));
    }
    // no wire format carries more than 8 bits per datagram byte
    let max_bits = DefaultConfig::MAX_BLOCK_LEN * 8;
    let red_bits = min_redundant_bits(msg_bits)
      .filter(|red_bits| msg_bits + red_bits <= max_bits)
      .ok_or_else(|| LinkError::Config(format!("msg_bits={msg_bits} exceeds a block of {max_bits} bits")))?;
    Ok(Self { msg_bits, red_bits })
  }
  /// data bits per block
  pub fn msg_bits(&self) -> usize {
    self.msg_bits
  }
  /// parity bits per block
  pub fn red_bits(&self) -> usize {
    self.red_bits
  }
  /// total bits per block
  pub fn block_bits(&self) -> usize {
    self.msg_bits + self.red_bits
  }

  /// Spread `data` over the non power-of-two positions and fill in the parity bits.
  /// `data` must hold exactly `msg_bits` bits.
  pub fn encode(&self, data: &BitSlice<u8, Msb0>) -> Result<Bits, LinkError> {
    if data.len() != self.msg_bits {
      return Err(LinkError::invariant(
        "hamming encode",
        format!("expected {} data bits, got {}", self.msg_bits, data.len()),
      ));
    }
    let n = self.block_bits();
    let mut code = Bits::with_capacity(n);
    let mut data_bits = data.iter().by_vals();
    for idx in 1..=n {
      if is_parity_position(idx) {
        code.push(false);
      } else {
        // every non-parity slot takes one data bit
        code.push(data_bits.next().unwrap_or(false));
      }
    }
    for p in (0..self.red_bits).map(|i| 1 << i) {
      let bit = parity(&code, p);
      code.set(p - 1, bit);
    }
    Ok(code)
  }
}

/// Position (1-indexed) of the bit that [`correct`] would flip, 0 if every parity agrees.
pub fn syndrome(code: &BitSlice<u8, Msb0>) -> usize {
  (0..usize::BITS)
    .map(|i| 1usize << i)
    .take_while(|&p| p <= code.len())
    .filter(|&p| parity(code, p) != code[p - 1])
    .sum()
}

/// Correct at most one flipped bit of a received block in place.
/// Returns the flipped position (1-indexed), `None` when nothing was flipped.
///
/// Two or more flips produce a wrong syndrome and a silently wrong block.
/// A syndrome past the end of the block can only come from such damage, the block is then left as received.
pub fn correct_in_place(code: &mut BitSlice<u8, Msb0>) -> Option<usize> {
  match syndrome(code) {
    0 => None,
    pos if pos <= code.len() => {
      let bit = code[pos - 1];
      code.set(pos - 1, !bit);
      Some(pos)
    }
    pos => {
      log::warn!(
        "hamming: syndrome {pos} outside block {}, left uncorrected",
        bits_to_string(code)
      );
      None
    }
  }
}

/// Copying version of [`correct_in_place`].
pub fn correct(code: &BitSlice<u8, Msb0>) -> Bits {
  let mut fixed = code.to_bitvec();
  correct_in_place(&mut fixed);
  fixed
}

/// The data bits of a block, i.e. all bits at non power-of-two positions.
pub fn extract_message(code: &BitSlice<u8, Msb0>) -> Bits {
  code
    .iter()
    .by_vals()
    .enumerate()
    .filter(|&(i, _)| !is_parity_position(i + 1))
    .map(|(_, bit)| bit)
    .collect()
}
