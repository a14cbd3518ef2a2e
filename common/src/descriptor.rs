use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
/// Deployment descriptor the portal is bootstrapped with.
/// Every leaf is optional: an absent value simply propagates as `None` into the projected views.
pub struct GlobalDescriptor {
  /// Base path of the portal without the tenant segment, e.g. `/user-portal`
  pub app_base: Option<String>,
  /// Base path of the portal including the tenant segment, e.g. `/t/wso2.com/user-portal`
  pub app_base_with_tenant: Option<String>,
  /// Title shown in the browser tab
  pub app_title: Option<String>,
  #[serde(rename = "clientID")]
  pub client_id: Option<String>,
  #[validate(url)]
  pub client_origin: Option<String>,
  #[validate(url)]
  pub client_origin_with_tenant: Option<String>,
  #[serde(rename = "loginCallbackURL")]
  #[validate(url)]
  pub login_callback_url: Option<String>,
  pub product_version: Option<String>,
  #[validate(url)]
  pub server_origin: Option<String>,
  /// Server origin including the tenant path. Every service resource endpoint is built on top of it.
  #[validate(url)]
  pub server_origin_with_tenant: Option<String>,
  #[validate(length(min = 1))]
  pub tenant: Option<String>,
  pub tenant_path: Option<String>,
  pub routes: RoutesDescriptor,
  pub ui: UiDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Route paths inside the portal
pub struct RoutesDescriptor {
  pub home: Option<String>,
  pub login: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Branding strings
pub struct UiDescriptor {
  pub app_name: Option<String>,
  pub app_copyright: Option<String>,
}

impl GlobalDescriptor {
  /// Parse a descriptor from a JSON document
  pub fn from_json_str(json: &str) -> Result<Self> {
    let descriptor = serde_json::from_str::<Self>(json).map_err(|e| anyhow!("Failed to parse descriptor: {e}"))?;
    Ok(descriptor)
  }

  /// Read and parse a descriptor file
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content =
      fs::read_to_string(path).map_err(|e| anyhow!("Failed to read descriptor {}: {e}", path.display()))?;
    debug!("Read descriptor from {}", path.display());
    Self::from_json_str(&content)
  }

  /// Structural check of the values that are given.
  /// Projections never call this, it is opt-in for callers wanting to fail early.
  pub fn check(&self) -> Result<()> {
    self.validate()?;
    Ok(())
  }
}
