use bitvec::prelude::*;

use crate::{helper::Bits, LinkError};

/// How the bits of a block are laid out in a datagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
  /// one printable `'0'`/`'1'` byte per bit
  #[default]
  Ascii,
  /// eight bits per byte, MSB first, last byte filled up with zeros
  Packed,
}

impl WireFormat {
  /// number of datagram bytes for a block of `block_bits` bits
  pub fn wire_len(&self, block_bits: usize) -> usize {
    match self {
      WireFormat::Ascii => block_bits,
      WireFormat::Packed => (block_bits + 7) / 8,
    }
  }

  pub fn encode(&self, block: &BitSlice<u8, Msb0>) -> Vec<u8> {
    match self {
      WireFormat::Ascii => block.iter().by_vals().map(|bit| if bit { b'1' } else { b'0' }).collect(),
      WireFormat::Packed => block
        .chunks(8)
        .map(|chunk| {
          chunk
            .iter()
            .by_vals()
            .enumerate()
            .fold(0u8, |byte, (i, bit)| byte | ((bit as u8) << (7 - i)))
        })
        .collect(),
    }
  }

  /// Read a block back out of a datagram.
  /// `block_bits` is required for [`WireFormat::Packed`]; for ASCII it is checked when given.
  pub fn decode(&self, bytes: &[u8], block_bits: Option<usize>) -> Result<Bits, LinkError> {
    if let Some(block_bits) = block_bits {
      let expected = self.wire_len(block_bits);
      if bytes.len() != expected {
        return Err(LinkError::BlockLength {
          expected,
          actual: bytes.len(),
        });
      }
    }
    match self {
      WireFormat::Ascii => bytes
        .iter()
        .enumerate()
        .map(|(offset, &byte)| match byte {
          b'0' => Ok(false),
          b'1' => Ok(true),
          _ => Err(LinkError::InvalidWireByte { byte, offset }),
        })
        .collect(),
      WireFormat::Packed => {
        let block_bits =
          block_bits.ok_or_else(|| LinkError::Config("packed wire format needs the block size".into()))?;
        let mut bits = bytes.view_bits::<Msb0>().to_bitvec();
        bits.truncate(block_bits);
        Ok(bits)
      }
    }
  }
}

impl std::str::FromStr for WireFormat {
  type Err = LinkError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "ascii" => Ok(WireFormat::Ascii),
      "packed" => Ok(WireFormat::Packed),
      other => Err(LinkError::Config(format!("unknown wire format {other:?}"))),
    }
  }
}
