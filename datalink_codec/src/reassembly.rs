use bitvec::prelude::*;

use crate::{
  framing::{deframe, ends_with_delimiter, starts_with_delimiter},
  helper::{bits_to_chars, bits_to_string, Bits},
  line_code::decode_4b5b,
  DefaultConfig, LinkError,
};

const DELIM_LEN: usize = DefaultConfig::POST_CODE_BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReassemblyState {
  /// no start delimiter seen yet
  AwaitingStart,
  /// the buffer starts with a delimiter, waiting for the closing one
  InFrame,
}

/// Collects the data bits of consecutive blocks until a whole frame has arrived.
///
/// Blocks are assumed to arrive complete and in order; nothing here re-synchronizes on its own.
/// After a [`LinkError::FramingDesync`] the caller either gives up or calls [`Reassembler::reset`].
pub struct Reassembler {
  state: ReassemblyState,
  buffer: Bits,
}

impl Default for Reassembler {
  fn default() -> Self {
    Self::new()
  }
}

impl Reassembler {
  pub fn new() -> Self {
    Self {
      state: ReassemblyState::AwaitingStart,
      buffer: Bits::new(),
    }
  }

  pub fn state(&self) -> ReassemblyState {
    self.state
  }

  /// number of bits held for the frame in progress
  pub fn buffered_bits(&self) -> usize {
    self.buffer.len()
  }

  /// Drop the partial frame and wait for a new start delimiter.
  pub fn reset(&mut self) {
    self.buffer.clear();
    self.state = ReassemblyState::AwaitingStart;
  }

  /// Append the data bits of one block.
  /// Returns the decoded message once the closing delimiter arrives.
  pub fn push(&mut self, bits: &BitSlice<u8, Msb0>) -> Result<Option<String>, LinkError> {
    self.buffer.extend_from_bitslice(bits);

    if self.state == ReassemblyState::AwaitingStart && self.buffer.len() >= DELIM_LEN {
      if !starts_with_delimiter(&self.buffer) {
        return Err(LinkError::desync(format!(
          "frame does not start with a delimiter: {}",
          bits_to_string(&self.buffer)
        )));
      }
      log::trace!("reassembly: start delimiter found");
      self.state = ReassemblyState::InFrame;
    }

    if self.state == ReassemblyState::InFrame
      && self.buffer.len() >= 2 * DELIM_LEN
      && ends_with_delimiter(&self.buffer)
    {
      log::debug!("reassembly: frame complete, {} bits", self.buffer.len());
      let frame = std::mem::take(&mut self.buffer);
      self.state = ReassemblyState::AwaitingStart;
      let message = bits_to_chars(&decode_4b5b(&deframe(&frame)?)?)?;
      return Ok(Some(message));
    }

    Ok(None)
  }
}
