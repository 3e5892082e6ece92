use clap::Parser;
use datalink_codec::{helper::bits_to_string, wire::WireFormat, DefaultConfig, LinkConfig, LinkSender};
use datalink_udp::{
  cli_util::{note_prompt, show_stage, stage_prompt},
  UdpLink,
};
use std::io::Result;

#[derive(Parser)]
struct Cli {
  /// The message to send
  message: String,
  /// Number of frame bits carried by one Hamming block
  msg_bits: usize,
  /// Where the blocks go
  #[arg(long, default_value = DefaultConfig::SEND_ADDR)]
  dest: String,
  /// Local address of the socket
  #[arg(long, default_value = "0.0.0.0:0")]
  bind: String,
  /// Block layout on the wire: ascii or packed
  #[arg(long, default_value = "ascii")]
  wire: WireFormat,
}

fn main() -> Result<()> {
  env_logger::init();
  let Cli {
    message,
    msg_bits,
    dest,
    bind,
    wire,
  } = Cli::parse();

  let sender = LinkSender::new(LinkConfig::new(msg_bits, wire))?;
  let mut link = UdpLink::bind(bind.as_str())?.with_peer(dest.as_str())?;

  println!("{} {}", stage_prompt("Input Message:"), message);
  println!("{} {}\n", note_prompt("Length:"), message.len());

  let encoded = sender.send(&mut link, &message)?;

  show_stage("Binary representation (8-bit per character)", &bits_to_string(&encoded.binary));
  println!("{} {}", stage_prompt("Number of padding bits required:"), encoded.pad_bits);
  show_stage("Padded message", &bits_to_string(&encoded.padded));
  show_stage("Pre-coded string", &bits_to_string(&encoded.line_coded));
  show_stage("Framed string", &bits_to_string(&encoded.framed));

  let layout = sender.layout();
  println!("{} {}", note_prompt("No. of message bits:"), layout.msg_bits());
  println!("{} {}", note_prompt("No. of check bits  :"), layout.red_bits());
  println!("{} {}\n", note_prompt("No. of block bits  :"), layout.block_bits());

  for block in &encoded.blocks {
    println!(
      "Sent block to {dest} with content: {} of length: {}",
      bits_to_string(block),
      block.len()
    );
  }
  Ok(())
}
