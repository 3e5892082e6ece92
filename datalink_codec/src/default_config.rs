use crate::{hamming::HammingLayout, wire::WireFormat, LinkError};

/// Fixed protocol constants shared by both ends of the link.
pub struct DefaultConfig;
impl DefaultConfig {
  /// bits per message character
  pub const BITS_PER_CHAR: usize = 8;
  /// group size before 4B5B line coding
  pub const PRE_CODE_BITS: usize = 4;
  /// group size after 4B5B line coding
  pub const POST_CODE_BITS: usize = 5;
  /// reserved control symbol marking both ends of a frame
  pub const FRAME_DELIMITER: u8 = 0b00001;
  /// largest block (in wire bytes) a datagram may carry
  pub const MAX_BLOCK_LEN: usize = 1_000_000;
  /// the port to which the sender delivers its blocks
  pub const SEND_PORT: u16 = 8567;
  /// where the sender delivers its blocks
  pub const SEND_ADDR: &'static str = "127.0.0.1:8567";
  /// the port on which the receiver listens
  pub const RECV_PORT: u16 = 9567;
}

/// Runtime link parameters, agreed on by sender and receiver out of band.
///
/// `msg_bits` is the number of frame bits carried by a single Hamming block.
/// The ASCII receiver can work without it, because block length is self-describing there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkConfig {
  pub msg_bits: Option<usize>,
  pub wire: WireFormat,
}

impl LinkConfig {
  pub fn new(msg_bits: usize, wire: WireFormat) -> Self {
    Self {
      msg_bits: Some(msg_bits),
      wire,
    }
  }

  /// receiver side configuration that learns the block size from each datagram
  pub fn ascii_receiver() -> Self {
    Self {
      msg_bits: None,
      wire: WireFormat::Ascii,
    }
  }

  /// Check the configuration and return the block layout, if one is known.
  pub fn layout(&self) -> Result<Option<HammingLayout>, LinkError> {
    let layout = match self.msg_bits {
      Some(msg_bits) => HammingLayout::new(msg_bits)?,
      None if self.wire == WireFormat::Packed => {
        return Err(LinkError::Config("packed wire format needs msg_bits".into()))
      }
      None => return Ok(None),
    };
    let wire_len = self.wire.wire_len(layout.block_bits());
    if wire_len > DefaultConfig::MAX_BLOCK_LEN {
      return Err(LinkError::Config(format!(
        "block of {wire_len} bytes exceeds the maximum of {}",
        DefaultConfig::MAX_BLOCK_LEN
      )));
    }
    Ok(Some(layout))
  }
}
