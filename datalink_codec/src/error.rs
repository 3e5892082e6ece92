/// Everything that can go wrong while moving a message across the link.
///
/// Multi-bit corruption inside one block is *not* represented here:
/// the Hamming code cannot tell it apart from a single flip and silently mis-corrects.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
  /// A stage received input whose length it cannot handle.
  /// Only a padding or framing bug upstream can cause this.
  #[error("invariant violated in {stage}: {detail}")]
  InvariantViolation { stage: &'static str, detail: String },

  /// The received bits do not start or end with the frame delimiter where they must.
  #[error("framing desync: {detail}")]
  FramingDesync { detail: String },

  /// A 5-bit group which is not a data codeword of the 4B5B table.
  #[error("invalid 5b codeword {0:#07b}")]
  InvalidCodeword(u8),

  /// ASCII wire blocks may only contain `'0'` and `'1'`.
  #[error("invalid wire byte {byte:#04x} at offset {offset}")]
  InvalidWireByte { byte: u8, offset: usize },

  /// A datagram whose size does not match the configured block size.
  #[error("block length mismatch: expected {expected} bytes, got {actual}")]
  BlockLength { expected: usize, actual: usize },

  #[error("configuration error: {0}")]
  Config(String),

  #[error("transport error: {0}")]
  Transport(#[from] std::io::Error),

  /// The other end of an in-process channel is gone.
  #[error("channel closed")]
  ChannelClosed,
}

impl LinkError {
  pub(crate) fn invariant(stage: &'static str, detail: impl Into<String>) -> Self {
    Self::InvariantViolation {
      stage,
      detail: detail.into(),
    }
  }
  pub(crate) fn desync(detail: impl Into<String>) -> Self {
    Self::FramingDesync { detail: detail.into() }
  }

  /// Damage confined to the message in progress: the receiver can drop it and wait for the next frame.
  /// Everything else points at the configuration or the transport.
  pub fn is_recoverable(&self) -> bool {
    matches!(
      self,
      Self::FramingDesync { .. } | Self::InvalidCodeword(_) | Self::InvalidWireByte { .. } | Self::BlockLength { .. }
    )
  }
}

impl From<LinkError> for std::io::Error {
  fn from(err: LinkError) -> Self {
    use std::io::ErrorKind;
    match err {
      LinkError::Transport(err) => err,
      LinkError::Config(_) => std::io::Error::new(ErrorKind::InvalidInput, err),
      LinkError::ChannelClosed => std::io::Error::new(ErrorKind::BrokenPipe, err),
      _ => std::io::Error::new(ErrorKind::InvalidData, err),
    }
  }
}
