use super::{descriptor_from_matches, to_value, verify_url, with_descriptor_args, ClapSubCommand};
use crate::{error::*, log::*};
use clap::{Arg, ArgMatches, Command};
use libconfig::{service_resource_endpoints, ServiceResourceEndpoints};
use serde_json::Value;

pub(super) struct Endpoints {}

impl ClapSubCommand for Endpoints {
  fn subcmd() -> Command {
    with_descriptor_args(Command::new("endpoints").about("Print the service resource endpoints")).arg(
      Arg::new("server_host")
        .short('s')
        .long("server-host")
        .value_parser(verify_url)
        .value_name("URL")
        .conflicts_with_all(["descriptor", "strict"])
        .help("Server origin with tenant like \"https://localhost:9443/t/wso2.com\", used instead of loading a descriptor"),
    )
  }

  fn exec_matches(sub_m: &ArgMatches) -> Result<Value> {
    let endpoints = match sub_m.get_one::<String>("server_host") {
      Some(host) => {
        debug!("Server host given as option: {host}");
        ServiceResourceEndpoints::resolve(host.trim_end_matches('/'))
      }
      None => service_resource_endpoints(&descriptor_from_matches(sub_m)?),
    };
    to_value(&endpoints)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn server_host_option_overrides_descriptor() {
    let matches = Endpoints::subcmd()
      .try_get_matches_from(["endpoints", "-s", "https://localhost:9443"])
      .unwrap();
    let value = Endpoints::exec_matches(&matches).unwrap();
    assert_eq!(value["token"], "https://localhost:9443/oauth2/token");
    assert_eq!(value["me"], "https://localhost:9443/scim2/Me");
  }

  #[test]
  fn server_host_conflicts_with_descriptor_args() {
    let strict = Endpoints::subcmd().try_get_matches_from([
      "endpoints",
      "--strict",
      "-d",
      "/nonexistent.json",
      "-s",
      "https://localhost:9443",
    ]);
    assert_eq!(strict.unwrap_err().kind(), clap::error::ErrorKind::ArgumentConflict);

    let strict_only = Endpoints::subcmd().try_get_matches_from(["endpoints", "--strict", "-s", "https://localhost:9443"]);
    assert_eq!(strict_only.unwrap_err().kind(), clap::error::ErrorKind::ArgumentConflict);

    let descriptor =
      Endpoints::subcmd().try_get_matches_from(["endpoints", "-d", "/nonexistent.json", "-s", "https://localhost:9443"]);
    assert_eq!(descriptor.unwrap_err().kind(), clap::error::ErrorKind::ArgumentConflict);
  }

  #[test]
  fn invalid_server_host_is_rejected() {
    let res = Endpoints::subcmd().try_get_matches_from(["endpoints", "--server-host", "ftp://localhost"]);
    assert!(res.is_err());
  }

  #[test]
  fn endpoints_from_descriptor_file() {
    let path = std::env::temp_dir().join(format!("portal-cli-endpoints-{}.json", std::process::id()));
    fs::write(
      &path,
      r#"{ "serverOrigin": "https://localhost:9443", "serverOriginWithTenant": "https://localhost:9443/t/wso2.com" }"#,
    )
    .unwrap();
    let path_str = path.to_string_lossy().to_string();

    let matches = Endpoints::subcmd()
      .try_get_matches_from(["endpoints", "--strict", "-d", path_str.as_str()])
      .unwrap();
    let value = Endpoints::exec_matches(&matches);
    fs::remove_file(&path).unwrap();

    let value = value.unwrap();
    assert_eq!(value["jwks"], "https://localhost:9443/t/wso2.com/oauth2/jwks");
    assert_eq!(value.as_object().unwrap().len(), 25);
  }

  #[test]
  fn missing_descriptor_file_is_an_error() {
    let matches = Endpoints::subcmd()
      .try_get_matches_from(["endpoints", "-d", "/nonexistent/descriptor.json"])
      .unwrap();
    assert!(Endpoints::exec_matches(&matches).is_err());
  }
}
