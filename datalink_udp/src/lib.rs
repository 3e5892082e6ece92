/// Datagram transport for link blocks over a UDP socket.
mod udp_link;
pub use udp_link::{resolve_addr, UdpLink};

/// Single bit error injection for the relay between sender and receiver.
pub mod noise;

/// styled terminal output for the binaries.
pub mod cli_util;
