/// bit/byte conversions and padding
pub mod helper;

/// define [`traits::PacketSender`] and [`traits::PacketReceiver`] traits.
pub mod traits;

/// 4B5B line code
pub mod line_code;

/// frame delimiters
pub mod framing;

/// Hamming single error correction over fixed size blocks.
pub mod hamming;

/// receiver side frame reassembly state machine
pub mod reassembly;

/// datagram layout of a block
pub mod wire;

/// sender and receiver pipelines built from the stages above.
mod pipeline;
pub use pipeline::{Encoded, LinkReceiver, LinkSender};

/// in-process transport, order preserving and lossless.
mod loopback;
pub use loopback::{loopback, LoopbackRx, LoopbackTx};

mod default_config;
pub use default_config::{DefaultConfig, LinkConfig};

mod error;
pub use error::LinkError;
