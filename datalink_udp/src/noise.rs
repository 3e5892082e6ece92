use datalink_codec::wire::WireFormat;
use rand::Rng;

/// Flip one uniformly chosen bit of a block in wire layout.
/// Returns the flipped bit position (0-indexed), `None` for an empty packet.
///
/// For [`WireFormat::Packed`] the fill bits of the last byte can be hit too, which the receiver ignores.
pub fn flip_random_bit<R: Rng>(packet: &mut [u8], wire: WireFormat, rng: &mut R) -> Option<usize> {
  if packet.is_empty() {
    return None;
  }
  match wire {
    WireFormat::Ascii => {
      let bit = rng.gen_range(0..packet.len());
      packet[bit] = match packet[bit] {
        b'0' => b'1',
        b'1' => b'0',
        other => other,
      };
      Some(bit)
    }
    WireFormat::Packed => {
      let bit = rng.gen_range(0..packet.len() * 8);
      packet[bit / 8] ^= 0x80 >> (bit % 8);
      Some(bit)
    }
  }
}

/// Apply [`flip_random_bit`] with probability `prob`.
pub fn maybe_flip<R: Rng>(packet: &mut [u8], wire: WireFormat, prob: f64, rng: &mut R) -> Option<usize> {
  if rng.gen_bool(prob.clamp(0.0, 1.0)) {
    flip_random_bit(packet, wire, rng)
  } else {
    None
  }
}
