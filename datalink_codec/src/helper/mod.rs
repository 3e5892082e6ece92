mod bytes_bits;
pub use bytes_bits::{
  bits_to_bytes, bits_to_chars, bits_to_int, bits_to_string, bytes_to_bits, chars_to_bits, int_to_bits, parse_bits, Bits,
};

mod paddings;
pub use paddings::{add_padding, min_pad_bits};

#[cfg(test)]
mod tests;
