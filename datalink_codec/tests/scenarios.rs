use datalink_codec::{
  helper::{bits_to_string, parse_bits},
  reassembly::ReassemblyState,
  wire::WireFormat,
  LinkConfig, LinkError, LinkReceiver, LinkSender,
};

fn hi_sender() -> LinkSender {
  LinkSender::new(LinkConfig::new(5, WireFormat::Ascii)).unwrap()
}

const HI_BLOCKS: [&str; 6] = [
  "100000011",
  "010010100",
  "001100100",
  "000111100",
  "101100111",
  "100000011",
];

#[test]
fn hi_stages() {
  let encoded = hi_sender().encode("Hi").unwrap();
  assert_eq!(bits_to_string(&encoded.binary), "0100100001101001");
  assert_eq!(encoded.pad_bits, 0);
  assert_eq!(encoded.padded, encoded.binary);
  assert_eq!(bits_to_string(&encoded.line_coded), "01010100100111010011");
  assert_eq!(bits_to_string(&encoded.framed), "000010101010010011101001100001");
  let blocks: Vec<String> = encoded.blocks.iter().map(|b| bits_to_string(b)).collect();
  assert_eq!(blocks, HI_BLOCKS);
}

#[test]
fn hi_with_padding() {
  let sender = LinkSender::new(LinkConfig::new(7, WireFormat::Ascii)).unwrap();
  let encoded = sender.encode("Hi").unwrap();
  assert_eq!(encoded.pad_bits, 32);
  assert_eq!(
    bits_to_string(&encoded.framed),
    "0000111110111101111011110111101111011110111100101010010011101001100001"
  );
  let blocks: Vec<String> = encoded.blocks.iter().map(|b| bits_to_string(b)).collect();
  assert_eq!(
    blocks,
    [
      "00000001111",
      "10101011111",
      "01011110101",
      "00101101111",
      "10100110110",
      "01111110011",
      "00111000101",
      "00011001100",
      "10101101100",
      "10111001001",
    ]
  );

  let mut receiver = LinkReceiver::new(LinkConfig::ascii_receiver()).unwrap();
  let mut messages = vec![];
  for block in &encoded.blocks {
    if let Some(m) = receiver.accept(&WireFormat::Ascii.encode(block)).unwrap() {
      messages.push(m);
    }
  }
  assert_eq!(messages, ["Hi"]);
}

#[test]
fn hi_received_clean() {
  let mut receiver = LinkReceiver::new(LinkConfig::ascii_receiver()).unwrap();
  let blocks = HI_BLOCKS;
  let (last, init) = blocks.split_last().unwrap();
  for block in init {
    assert_eq!(receiver.accept(block.as_bytes()).unwrap(), None);
  }
  assert_eq!(receiver.accept(last.as_bytes()).unwrap().as_deref(), Some("Hi"));
}

/// one flipped bit in one block is repaired
#[test]
fn hi_single_bit_error() {
  for block_idx in 0..HI_BLOCKS.len() {
    for bit in 0..9 {
      let mut receiver = LinkReceiver::new(LinkConfig::ascii_receiver()).unwrap();
      let mut messages = vec![];
      for (i, block) in HI_BLOCKS.iter().enumerate() {
        let mut bytes = block.as_bytes().to_vec();
        if i == block_idx {
          bytes[bit] ^= b'0' ^ b'1';
        }
        if let Some(m) = receiver.accept(&bytes).unwrap() {
          messages.push(m);
        }
      }
      assert_eq!(messages, ["Hi"], "block={block_idx} bit={bit}");
    }
  }
}

/// Two flips in the second block: the syndrome points at bit 3, a good data bit,
/// so the first 4B5B group turns from 01010 into 11010 and 'H' (0x48) arrives as 0xc8.
/// The damage goes unnoticed by the link, only the text shows it.
#[test]
fn hi_double_bit_error() {
  let mut receiver = LinkReceiver::new(LinkConfig::ascii_receiver()).unwrap();
  let mut messages = vec![];
  for (i, block) in HI_BLOCKS.iter().enumerate() {
    let mut bits = parse_bits(block).unwrap();
    if i == 1 {
      for k in [0, 1] {
        let bit = bits[k];
        bits.set(k, !bit);
      }
    }
    if let Some(m) = receiver.accept(&WireFormat::Ascii.encode(&bits)).unwrap() {
      messages.push(m);
    }
  }
  assert_eq!(messages, ["\u{fffd}i"]);
  assert_ne!(messages, ["Hi"]);
}

#[test]
fn hi_double_bit_invalid_codeword() {
  let mut receiver = LinkReceiver::new(LinkConfig::ascii_receiver()).unwrap();
  // syndrome 1 ^ 4 = 5 flips a data bit, turning 10010 into control symbol 00010
  let mut damaged = parse_bits(HI_BLOCKS[1]).unwrap();
  for k in [0, 3] {
    let bit = damaged[k];
    damaged.set(k, !bit);
  }
  let blocks = HI_BLOCKS;
  let (last, head) = blocks.split_last().unwrap();
  for (i, block) in head.iter().enumerate() {
    let bits = if i == 1 { damaged.clone() } else { parse_bits(block).unwrap() };
    assert_eq!(receiver.accept(&WireFormat::Ascii.encode(&bits)).unwrap(), None);
  }
  let err = receiver
    .accept(&WireFormat::Ascii.encode(&parse_bits(last).unwrap()))
    .unwrap_err();
  assert!(matches!(err, LinkError::InvalidCodeword(0b00010)));
  assert!(err.is_recoverable());
  assert_eq!(receiver.reassembler().state(), ReassemblyState::AwaitingStart);
  assert_eq!(receiver.reassembler().buffered_bits(), 0);

  receiver.reset();
  let mut messages = vec![];
  for block in HI_BLOCKS {
    let bits = parse_bits(block).unwrap();
    if let Some(m) = receiver.accept(&WireFormat::Ascii.encode(&bits)).unwrap() {
      messages.push(m);
    }
  }
  assert_eq!(messages, ["Hi"]);
}

#[test]
fn garbage_before_frame() {
  let mut receiver = LinkReceiver::new(LinkConfig::ascii_receiver()).unwrap();
  // 11110 is the code word of a data nibble, not a delimiter
  let stray = LinkSender::new(LinkConfig::new(5, WireFormat::Ascii))
    .unwrap()
    .layout()
    .encode(&parse_bits("11110").unwrap())
    .unwrap();
  let err = receiver.accept(&WireFormat::Ascii.encode(&stray)).unwrap_err();
  assert!(matches!(err, LinkError::FramingDesync { .. }));

  receiver.reset();
  for block in HI_BLOCKS {
    if let Some(m) = receiver.accept(block.as_bytes()).unwrap() {
      assert_eq!(m, "Hi");
    }
  }
}
