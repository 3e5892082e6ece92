use crate::{
  framing::frame,
  hamming::{correct_in_place, extract_message, HammingLayout},
  helper::{add_padding, bits_to_string, chars_to_bits, min_pad_bits, Bits},
  line_code::encode_4b5b,
  reassembly::Reassembler,
  traits::{PacketReceiver, PacketSender},
  wire::WireFormat,
  LinkConfig, LinkError,
};

/// Every intermediate stage of encoding one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
  /// 8 bits per character
  pub binary: Bits,
  /// number of zero bits put in front of `binary`
  pub pad_bits: usize,
  pub padded: Bits,
  /// after 4B5B
  pub line_coded: Bits,
  /// `line_coded` between two delimiters
  pub framed: Bits,
  /// one Hamming code word per `msg_bits` bits of `framed`
  pub blocks: Vec<Bits>,
}

/// The transmitting end: text in, one datagram per Hamming block out.
pub struct LinkSender {
  layout: HammingLayout,
  wire: WireFormat,
}

impl LinkSender {
  pub fn new(config: LinkConfig) -> Result<Self, LinkError> {
    let layout = config
      .layout()?
      .ok_or_else(|| LinkError::Config("the sender needs msg_bits".into()))?;
    Ok(Self {
      layout,
      wire: config.wire,
    })
  }

  pub fn layout(&self) -> HammingLayout {
    self.layout
  }

  /// Run the whole encoding pipeline over `text`.
  pub fn encode(&self, text: &str) -> Result<Encoded, LinkError> {
    let msg_bits = self.layout.msg_bits();

    let binary = chars_to_bits(text);
    let pad_bits = min_pad_bits(binary.len(), msg_bits)?;
    let padded = add_padding(&binary, pad_bits);
    let line_coded = encode_4b5b(&padded)?;
    let framed = frame(&line_coded);
    if framed.len() % msg_bits != 0 {
      return Err(LinkError::invariant(
        "split blocks",
        format!("{} framed bits do not split into {msg_bits}-bit blocks", framed.len()),
      ));
    }
    let blocks = framed
      .chunks_exact(msg_bits)
      .map(|chunk| self.layout.encode(chunk))
      .collect::<Result<Vec<_>, _>>()?;

    log::debug!("binary: {} ({} bits)", bits_to_string(&binary), binary.len());
    log::debug!("padding: {pad_bits} bits -> {}", bits_to_string(&padded));
    log::debug!("4b5b: {} ({} bits)", bits_to_string(&line_coded), line_coded.len());
    log::debug!("framed: {} ({} bits)", bits_to_string(&framed), framed.len());
    log::debug!(
      "{} blocks of {}+{} bits",
      blocks.len(),
      msg_bits,
      self.layout.red_bits()
    );

    Ok(Encoded {
      binary,
      pad_bits,
      padded,
      line_coded,
      framed,
      blocks,
    })
  }

  /// Encode `text` and push every block through `tx`, in order.
  /// The whole message is encoded before the first block leaves.
  pub fn send<S, E>(&self, tx: &mut S, text: &str) -> Result<Encoded, LinkError>
  where
    S: PacketSender<Vec<u8>, E>,
    E: Into<LinkError>,
  {
    let encoded = self.encode(text)?;
    for block in &encoded.blocks {
      log::trace!("send block {}", bits_to_string(block));
      tx.send(self.wire.encode(block)).map_err(Into::into)?;
    }
    Ok(encoded)
  }
}

/// The receiving end: datagrams in, messages out.
pub struct LinkReceiver {
  block_bits: Option<usize>,
  wire: WireFormat,
  reassembler: Reassembler,
}

impl LinkReceiver {
  pub fn new(config: LinkConfig) -> Result<Self, LinkError> {
    let block_bits = config.layout()?.map(|layout| layout.block_bits());
    Ok(Self {
      block_bits,
      wire: config.wire,
      reassembler: Reassembler::new(),
    })
  }

  pub fn reassembler(&self) -> &Reassembler {
    &self.reassembler
  }

  /// Throw away the partial frame, e.g. after a desync.
  pub fn reset(&mut self) {
    self.reassembler.reset();
  }

  /// Process one datagram: correct it, keep its data bits, and return the message it completes, if any.
  pub fn accept(&mut self, packet: &[u8]) -> Result<Option<String>, LinkError> {
    let mut code = self.wire.decode(packet, self.block_bits)?;
    if let Some(pos) = correct_in_place(&mut code) {
      log::info!("corrected bit {pos}, block is now {}", bits_to_string(&code));
    }
    self.reassembler.push(&extract_message(&code))
  }

  /// Block on `rx` until one complete message has been received.
  pub fn recv_message<R, E>(&mut self, rx: &mut R) -> Result<String, LinkError>
  where
    R: PacketReceiver<Vec<u8>, E>,
    E: Into<LinkError>,
  {
    loop {
      let packet = rx.recv().map_err(Into::into)?;
      if let Some(message) = self.accept(&packet)? {
        return Ok(message);
      }
    }
  }
}
