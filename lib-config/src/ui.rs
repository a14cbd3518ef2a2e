use crate::{constants::*, log::*};
use chrono::{Datelike, Local};
use libcommon::GlobalDescriptor;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Display strings of the interface chrome
pub struct UiConfig {
  pub authenticator_app: AuthenticatorAppConfig,
  /// `<holder> © <year>`
  pub copyright_text: String,
  pub title_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatorAppConfig {
  pub apps: Vec<AuthenticatorApp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatorApp {
  pub link: String,
  pub name: String,
}

impl Default for AuthenticatorAppConfig {
  /// A single placeholder entry
  fn default() -> Self {
    Self {
      apps: vec![AuthenticatorApp {
        link: AUTHENTICATOR_APP_PLACEHOLDER_LINK.to_string(),
        name: AUTHENTICATOR_APP_PLACEHOLDER_NAME.to_string(),
      }],
    }
  }
}

/// UI view of the descriptor with the copyright year taken from the local clock
pub fn ui_config(descriptor: &GlobalDescriptor) -> UiConfig {
  ui_config_for_year(descriptor, Local::now().year())
}

/// UI view of the descriptor with the given copyright year
pub fn ui_config_for_year(descriptor: &GlobalDescriptor, year: i32) -> UiConfig {
  let copyright_text = match descriptor.ui.app_copyright.as_deref() {
    Some(holder) => format!("{holder} {COPYRIGHT_SIGN} {year}"),
    None => {
      debug!("No copyright holder given in the descriptor");
      format!("{COPYRIGHT_SIGN} {year}")
    }
  };
  UiConfig {
    authenticator_app: AuthenticatorAppConfig::default(),
    copyright_text,
    title_text: descriptor.app_title.clone(),
  }
}
