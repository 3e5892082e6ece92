use crossbeam_channel::{unbounded as channel, Receiver, Sender};

use crate::{
  traits::{PacketReceiver, PacketSender},
  LinkError,
};

/// Sending half of an in-process datagram channel.
#[derive(Clone)]
pub struct LoopbackTx(Sender<Vec<u8>>);

/// Receiving half of an in-process datagram channel.
pub struct LoopbackRx(Receiver<Vec<u8>>);

/// An in-process, order preserving, lossless stand-in for the datagram transport.
pub fn loopback() -> (LoopbackTx, LoopbackRx) {
  let (tx, rx) = channel();
  (LoopbackTx(tx), LoopbackRx(rx))
}

impl PacketSender<Vec<u8>, LinkError> for LoopbackTx {
  fn send(&mut self, packet: Vec<u8>) -> Result<(), LinkError> {
    self.0.send(packet).map_err(|_| LinkError::ChannelClosed)
  }
}

impl PacketReceiver<Vec<u8>, LinkError> for LoopbackRx {
  fn recv(&mut self) -> Result<Vec<u8>, LinkError> {
    self.0.recv().map_err(|_| LinkError::ChannelClosed)
  }
}

impl LoopbackRx {
  /// Take a packet if one is already queued.
  pub fn try_recv(&mut self) -> Option<Vec<u8>> {
    self.0.try_recv().ok()
  }
}
