use console::{style, StyledObject};

pub fn stage_prompt<D>(prompt: D) -> StyledObject<D> {
  style(prompt).green().bold()
}
pub fn message_prompt<D>(prompt: D) -> StyledObject<D> {
  style(prompt).red().bold()
}
pub fn note_prompt<D>(prompt: D) -> StyledObject<D> {
  style(prompt).yellow().dim()
}

/// Print one encoding stage as a bit string with its length.
pub fn show_stage(label: &str, bits: &str) {
  println!("{} {}", stage_prompt(format!("{label}:")), bits);
  println!("{} {}\n", note_prompt("Length:"), bits.len());
}
