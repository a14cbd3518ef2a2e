mod parse_opts;
mod subcmd_deployment;
mod subcmd_endpoints;
mod subcmd_ui;

use crate::{error::*, log::*};
use clap::{Arg, ArgAction, ArgMatches, Command};
use libconfig::{
  descriptor::{GlobalDescriptor, DEFAULT_DESCRIPTOR_PATH},
  load_descriptor,
};
pub use parse_opts::parse_opts;
use serde_json::Value;
use url::Url;

trait ClapSubCommand {
  fn subcmd() -> Command;

  fn exec_matches(sub_m: &ArgMatches) -> Result<Value>;
}

/// Arguments shared by every subcommand to locate and load the descriptor
fn with_descriptor_args(cmd: Command) -> Command {
  cmd
    .arg(
      Arg::new("descriptor")
        .short('d')
        .long("descriptor")
        .value_name("PATH")
        .default_value(DEFAULT_DESCRIPTOR_PATH)
        .help("Deployment descriptor (JSON) file path"),
    )
    .arg(
      Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Check origins, callback url and tenant of the descriptor before printing"),
    )
}

fn descriptor_from_matches(sub_m: &ArgMatches) -> Result<GlobalDescriptor> {
  let Some(path) = sub_m.get_one::<String>("descriptor") else {
    bail!("Descriptor path must be specified");
  };
  let strict = sub_m.get_flag("strict");
  let descriptor = load_descriptor(path, strict)?;
  info!("Loaded descriptor {path} (strict: {strict})");
  Ok(descriptor)
}

fn to_value<T: serde::Serialize>(view: &T) -> Result<Value> {
  serde_json::to_value(view).map_err(|e| anyhow!("Failed to serialize view: {e}"))
}

pub(crate) fn verify_url(arg_val: &str) -> Result<String, String> {
  let url = Url::parse(arg_val).map_err(|e| format!("Could not parse \"{arg_val}\" as a server host: {e}"))?;
  if !matches!(url.scheme(), "http" | "https") {
    return Err(format!("Server host must be http or https, not \"{}\"", url.scheme()));
  }
  if url.cannot_be_a_base() {
    return Err(format!("\"{}\" cannot be a base of endpoint paths.", arg_val));
  }
  Ok(url.to_string())
}
