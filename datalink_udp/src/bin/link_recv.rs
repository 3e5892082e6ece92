use clap::Parser;
use datalink_codec::{wire::WireFormat, DefaultConfig, LinkConfig, LinkReceiver};
use datalink_udp::{
  cli_util::{message_prompt, note_prompt},
  UdpLink,
};
use std::io::Result;

#[derive(Parser)]
struct Cli {
  /// The port to listen on
  #[arg(long, default_value_t = DefaultConfig::RECV_PORT)]
  port: u16,
  /// Block layout on the wire: ascii or packed
  #[arg(long, default_value = "ascii")]
  wire: WireFormat,
  /// Number of frame bits per block, required for the packed layout
  #[arg(long)]
  msg_bits: Option<usize>,
  /// Drop the damaged message and keep listening after a desync or an undecodable frame
  #[arg(long)]
  resync: bool,
}

fn main() -> Result<()> {
  env_logger::init();
  const SELF_ADDR: &str = "0.0.0.0";

  let Cli {
    port,
    wire,
    msg_bits,
    resync,
  } = Cli::parse();

  let mut receiver = LinkReceiver::new(LinkConfig { msg_bits, wire })?;
  let mut link = UdpLink::bind((SELF_ADDR, port))?;
  println!("Udp link bound on {SELF_ADDR}:{port}");

  loop {
    let (packet, src) = link.recv_from()?;
    println!(
      "{} {} bytes from {src}: {}",
      note_prompt("Got block:"),
      packet.len(),
      String::from_utf8_lossy(&packet)
    );
    match receiver.accept(&packet) {
      Ok(Some(message)) => println!("{} {message}", message_prompt("Message Received:")),
      Ok(None) => {}
      Err(err) if resync && err.is_recoverable() => {
        log::warn!("{err}, message dropped, waiting for the next frame");
        receiver.reset();
      }
      Err(err) => return Err(err.into()),
    }
  }
}
