mod constants;
mod deployment;
mod endpoints;
mod error;
mod log;
mod resource;
mod ui;

use std::path::Path;

pub use deployment::{deployment_config, DeploymentConfig};
pub use endpoints::{service_resource_endpoints, ServiceResourceEndpoints};
pub use error::{ConfigError, ConfigResult};
pub use resource::ServiceResource;
pub use ui::{ui_config, ui_config_for_year, AuthenticatorApp, AuthenticatorAppConfig, UiConfig};
pub mod descriptor {
  pub use libcommon::*;
}

use libcommon::GlobalDescriptor;

/// Load the deployment descriptor from a JSON file.
/// With `strict`, the given values are checked structurally before being handed to the projections.
pub fn load_descriptor<P: AsRef<Path>>(path: P, strict: bool) -> ConfigResult<GlobalDescriptor> {
  let descriptor = GlobalDescriptor::from_file(path)?;
  if strict {
    descriptor.check()?;
  }
  Ok(descriptor)
}
