use super::{descriptor_from_matches, to_value, with_descriptor_args, ClapSubCommand};
use crate::error::*;
use clap::{ArgMatches, Command};
use libconfig::ui_config;
use serde_json::Value;

pub(super) struct Ui {}

impl ClapSubCommand for Ui {
  fn subcmd() -> Command {
    with_descriptor_args(Command::new("ui").about("Print the UI config with the copyright of this year"))
  }

  fn exec_matches(sub_m: &ArgMatches) -> Result<Value> {
    let descriptor = descriptor_from_matches(sub_m)?;
    to_value(&ui_config(&descriptor))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn ui_from_descriptor_file() {
    let path = std::env::temp_dir().join(format!("portal-cli-ui-{}.json", std::process::id()));
    fs::write(
      &path,
      r#"{ "appTitle": "User Portal", "ui": { "appCopyright": "WSO2 Identity Server" } }"#,
    )
    .unwrap();
    let path_str = path.to_string_lossy().to_string();

    let matches = Ui::subcmd().try_get_matches_from(["ui", "-d", path_str.as_str()]).unwrap();
    let value = Ui::exec_matches(&matches);
    fs::remove_file(&path).unwrap();

    let value = value.unwrap();
    assert_eq!(value["titleText"], "User Portal");
    let copyright = value["copyrightText"].as_str().unwrap();
    assert!(copyright.starts_with("WSO2 Identity Server \u{a9} "));
    assert_eq!(copyright.rsplit(' ').next().map(|y| y.len()), Some(4));
  }
}
