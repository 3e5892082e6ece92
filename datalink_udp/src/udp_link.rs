use datalink_codec::{
  traits::{PacketReceiver, PacketSender},
  DefaultConfig,
};
use std::{
  io::{Error, ErrorKind, Result},
  net::{SocketAddr, ToSocketAddrs, UdpSocket},
};

/// A UDP socket that carries exactly one link block per datagram.
/// No ordering, delivery or integrity guarantee beyond what UDP gives.
pub struct UdpLink {
  socket: UdpSocket,
  peer: Option<SocketAddr>,
  buffer: Vec<u8>,
}

/// The first socket address `addr` resolves to.
pub fn resolve_addr<A: ToSocketAddrs>(addr: A) -> Result<SocketAddr> {
  addr
    .to_socket_addrs()?
    .next()
    .ok_or_else(|| Error::new(ErrorKind::InvalidInput, "address resolves to nothing"))
}

impl UdpLink {
  pub fn bind<A: ToSocketAddrs>(addr: A) -> Result<Self> {
    let socket = UdpSocket::bind(addr)?;
    log::debug!("udp link bound on {:?}", socket.local_addr()?);
    Ok(Self {
      socket,
      peer: None,
      buffer: vec![0; DefaultConfig::MAX_BLOCK_LEN],
    })
  }

  /// Fix the peer to which [`PacketSender::send`] delivers blocks.
  pub fn with_peer<A: ToSocketAddrs>(mut self, peer: A) -> Result<Self> {
    self.peer = Some(resolve_addr(peer)?);
    Ok(self)
  }

  pub fn peer(&self) -> Option<SocketAddr> {
    self.peer
  }

  pub fn local_addr(&self) -> Result<SocketAddr> {
    self.socket.local_addr()
  }

  /// Send one block as one datagram.
  /// A partial write is an error, the receiver could not make sense of the rest.
  pub fn send_to(&self, block: &[u8], addr: SocketAddr) -> Result<()> {
    if block.len() > DefaultConfig::MAX_BLOCK_LEN {
      return Err(Error::new(
        ErrorKind::InvalidInput,
        format!("block of {} bytes exceeds {}", block.len(), DefaultConfig::MAX_BLOCK_LEN),
      ));
    }
    let bytes_written = self.socket.send_to(block, addr)?;
    if bytes_written != block.len() {
      return Err(Error::new(
        ErrorKind::WriteZero,
        format!("sent {bytes_written} of {} bytes", block.len()),
      ));
    }
    Ok(())
  }

  /// Block until one datagram arrives, return it with its source address.
  pub fn recv_from(&mut self) -> Result<(Vec<u8>, SocketAddr)> {
    let (len, src) = self.socket.recv_from(&mut self.buffer)?;
    log::trace!("{len} bytes from {src}");
    Ok((self.buffer[..len].to_vec(), src))
  }
}

impl PacketSender<Vec<u8>, Error> for UdpLink {
  fn send(&mut self, packet: Vec<u8>) -> Result<()> {
    let peer = self
      .peer
      .ok_or_else(|| Error::new(ErrorKind::NotConnected, "udp link has no peer"))?;
    self.send_to(&packet, peer)
  }
}

impl PacketReceiver<Vec<u8>, Error> for UdpLink {
  fn recv(&mut self) -> Result<Vec<u8>> {
    self.recv_from().map(|(packet, _)| packet)
  }
}
