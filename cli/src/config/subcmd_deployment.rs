use super::{descriptor_from_matches, to_value, with_descriptor_args, ClapSubCommand};
use crate::error::*;
use clap::{ArgMatches, Command};
use libconfig::deployment_config;
use serde_json::Value;

pub(super) struct Deployment {}

impl ClapSubCommand for Deployment {
  fn subcmd() -> Command {
    with_descriptor_args(Command::new("deployment").about("Print the deployment config"))
  }

  fn exec_matches(sub_m: &ArgMatches) -> Result<Value> {
    let descriptor = descriptor_from_matches(sub_m)?;
    to_value(&deployment_config(&descriptor))
  }
}
