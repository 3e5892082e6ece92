use rand::{distributions::Standard, Rng};

use super::{
  add_padding, bits_to_bytes, bits_to_chars, bits_to_int, bits_to_string, bytes_to_bits, chars_to_bits, int_to_bits,
  min_pad_bits, parse_bits,
};
use crate::LinkError;

const TESTS: usize = 100;

#[test]
fn bytes_bits_identity() {
  for _ in 0..TESTS {
    let len = rand::thread_rng().gen_range(0..64);
    let bytes: Vec<u8> = rand::thread_rng().sample_iter(Standard).take(len).collect();
    let bits = bytes_to_bits(&bytes);
    assert_eq!(bits.len(), 8 * len);
    assert_eq!(bits_to_bytes(&bits).unwrap(), bytes);
  }
}

#[test]
fn msb_first() {
  assert_eq!(bits_to_string(&chars_to_bits("Hi")), "0100100001101001");
  assert_eq!(bits_to_string(&chars_to_bits("")), "");
}

#[test]
fn chars_identity() {
  for text in ["Hi", "hello, world", "The quick brown fox", "~!@#$%^&*()_+"] {
    assert_eq!(bits_to_chars(&chars_to_bits(text)).unwrap(), text);
  }
}

#[test]
fn zero_bytes_are_dropped() {
  let bits = parse_bits("000000000100100000000000").unwrap();
  assert_eq!(bits_to_chars(&bits).unwrap(), "H");
  // a NUL inside the message is indistinguishable from padding
  assert_eq!(bits_to_chars(&chars_to_bits("a\0b")).unwrap(), "ab");
}

#[test]
fn partial_byte() {
  let bits = parse_bits("0100100").unwrap();
  assert!(matches!(bits_to_bytes(&bits), Err(LinkError::InvariantViolation { .. })));
  assert!(matches!(bits_to_chars(&bits), Err(LinkError::InvariantViolation { .. })));
}

#[test]
fn int_conversion() {
  assert_eq!(bits_to_int(&parse_bits("00001").unwrap()), 1);
  assert_eq!(bits_to_int(&parse_bits("11110").unwrap()), 30);
  assert_eq!(bits_to_string(&int_to_bits(0b10100, 5)), "10100");
  assert_eq!(bits_to_string(&int_to_bits(3, 8)), "00000011");
  for value in 0..256 {
    assert_eq!(bits_to_int(&int_to_bits(value, 8)), value);
  }
}

#[test]
fn parse() {
  assert_eq!(parse_bits("0110").map(|b| bits_to_string(&b)).as_deref(), Some("0110"));
  assert_eq!(parse_bits("01a"), None);
}

#[test]
fn padding_prepends_zeros() {
  let bits = parse_bits("11").unwrap();
  assert_eq!(bits_to_string(&add_padding(&bits, 3)), "00011");
  assert_eq!(add_padding(&bits, 0), bits);
}

fn padding_fits(len: usize, pad: usize, msg_bits: usize) -> bool {
  let padded = len + pad;
  padded % 4 == 0 && padded % 8 == 0 && (padded / 4 * 5 + 10) % msg_bits == 0
}

/// the returned padding fits, and no smaller one does
#[test]
fn padding_minimal() {
  for msg_bits in 1..=40 {
    for len in (0..=160).step_by(8) {
      let pad = min_pad_bits(len, msg_bits).unwrap();
      assert!(padding_fits(len, pad, msg_bits), "len={len} msg_bits={msg_bits} pad={pad}");
      assert!(
        (0..pad).all(|smaller| !padding_fits(len, smaller, msg_bits)),
        "len={len} msg_bits={msg_bits} pad={pad} is not minimal"
      );
    }
  }
}

#[test]
fn padding_known_values() {
  // "Hi" is 16 bits: 16 -> 30 framed bits, already a multiple of 5 and 10
  assert_eq!(min_pad_bits(16, 5).unwrap(), 0);
  assert_eq!(min_pad_bits(16, 10).unwrap(), 0);
  // 30 + 10k must be a multiple of 7: k = 4
  assert_eq!(min_pad_bits(16, 7).unwrap(), 32);
  // unaligned lengths are rounded up to a whole byte first
  assert_eq!(min_pad_bits(3, 1).unwrap(), 5);
  assert!(matches!(min_pad_bits(16, 0), Err(LinkError::Config(_))));
}
