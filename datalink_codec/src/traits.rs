mod packet;
pub use packet::{PacketReceiver, PacketSender};
