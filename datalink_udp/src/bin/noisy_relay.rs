use clap::Parser;
use datalink_codec::{wire::WireFormat, DefaultConfig};
use datalink_udp::{cli_util::note_prompt, noise::maybe_flip, resolve_addr, UdpLink};
use rand::{rngs::StdRng, SeedableRng};
use std::io::Result;

#[derive(Parser)]
struct Cli {
  /// Where the sender delivers its blocks
  #[arg(long, default_value_t = format!("0.0.0.0:{}", DefaultConfig::SEND_PORT))]
  listen: String,
  /// Where the receiver listens
  #[arg(long, default_value_t = format!("127.0.0.1:{}", DefaultConfig::RECV_PORT))]
  forward: String,
  /// Probability that a forwarded block gets one bit flipped
  #[arg(long, default_value_t = 0.5)]
  flip_prob: f64,
  /// Seed for reproducible noise
  #[arg(long)]
  seed: Option<u64>,
  /// Block layout on the wire: ascii or packed
  #[arg(long, default_value = "ascii")]
  wire: WireFormat,
}

fn main() -> Result<()> {
  env_logger::init();
  let Cli {
    listen,
    forward,
    flip_prob,
    seed,
    wire,
  } = Cli::parse();

  let mut rng = match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };
  let mut link = UdpLink::bind(listen.as_str())?;
  let forward = resolve_addr(forward.as_str())?;
  println!("Relay {listen} -> {forward}, flip probability {flip_prob}");

  let mut count = 0;
  loop {
    let (mut packet, src) = link.recv_from()?;
    count += 1;
    match maybe_flip(&mut packet, wire, flip_prob, &mut rng) {
      Some(bit) => println!("[{count}] from {src}: flipped bit {bit}"),
      None => println!("[{count}] from {src}: {}", note_prompt("untouched")),
    }
    link.send_to(&packet, forward)?;
  }
}
