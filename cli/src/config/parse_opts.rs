use super::{subcmd_deployment::Deployment, subcmd_endpoints::Endpoints, subcmd_ui::Ui, ClapSubCommand};
use crate::error::*;
use clap::command;
use serde_json::Value;

/// Parse command line options and build the requested view
pub fn parse_opts() -> Result<Value> {
  let _ = include_str!("../../Cargo.toml");

  let options = command!()
    .subcommand_required(true)
    .subcommand(Endpoints::subcmd())
    .subcommand(Deployment::subcmd())
    .subcommand(Ui::subcmd());

  let matches = options.get_matches();

  match matches.subcommand() {
    Some(("endpoints", sub_m)) => Endpoints::exec_matches(sub_m),
    Some(("deployment", sub_m)) => Deployment::exec_matches(sub_m),
    Some(("ui", sub_m)) => Ui::exec_matches(sub_m),
    _ => {
      bail!("none");
    }
  }
}
