/// Something that carries one datagram of type `T` towards a peer.
/// A transport failure is reported as `E`.
pub trait PacketSender<T, E> {
  /// Hand over one packet.
  /// Nothing is promised about delivery, order or integrity.
  fn send(&mut self, packet: T) -> Result<(), E>;
}

/// Something that yields the datagrams of type `T` arriving from a peer.
pub trait PacketReceiver<T, E> {
  /// Wait for the next packet.
  fn recv(&mut self) -> Result<T, E>;
}
