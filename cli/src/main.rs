mod config;
mod error;
mod log;

use crate::{error::*, log::*};
use config::parse_opts;

fn main() -> Result<()> {
  init_logger();

  let view = match parse_opts() {
    Ok(view) => view,
    Err(e) => {
      error!("{e}");
      std::process::exit(1);
    }
  };

  println!("{}", serde_json::to_string_pretty(&view)?);
  Ok(())
}
