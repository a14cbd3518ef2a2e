use crate::log::*;
use libcommon::GlobalDescriptor;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// How this portal instance is deployed: tenant, hosts, client and routes.
/// Every field is taken verbatim from the descriptor under a renamed key.
pub struct DeploymentConfig {
  pub app_base_name: Option<String>,
  pub app_base_name_without_tenant: Option<String>,
  pub app_home_path: Option<String>,
  pub app_login_path: Option<String>,
  pub application_name: Option<String>,
  pub client_host: Option<String>,
  #[serde(rename = "clientID")]
  pub client_id: Option<String>,
  pub client_origin: Option<String>,
  pub login_callback_url: Option<String>,
  pub product_version: Option<String>,
  /// Server origin with tenant
  pub server_host: Option<String>,
  pub server_origin: Option<String>,
  pub tenant: Option<String>,
  pub tenant_path: Option<String>,
}

/// Deployment view of the descriptor. Recomputed on every call.
pub fn deployment_config(descriptor: &GlobalDescriptor) -> DeploymentConfig {
  debug!("Projecting deployment config of tenant {:?}", descriptor.tenant);
  DeploymentConfig {
    app_base_name: descriptor.app_base_with_tenant.clone(),
    app_base_name_without_tenant: descriptor.app_base.clone(),
    app_home_path: descriptor.routes.home.clone(),
    app_login_path: descriptor.routes.login.clone(),
    application_name: descriptor.ui.app_name.clone(),
    client_host: descriptor.client_origin_with_tenant.clone(),
    client_id: descriptor.client_id.clone(),
    client_origin: descriptor.client_origin.clone(),
    login_callback_url: descriptor.login_callback_url.clone(),
    product_version: descriptor.product_version.clone(),
    server_host: descriptor.server_origin_with_tenant.clone(),
    server_origin: descriptor.server_origin.clone(),
    tenant: descriptor.tenant.clone(),
    tenant_path: descriptor.tenant_path.clone(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use libcommon::{RoutesDescriptor, UiDescriptor};

  fn descriptor() -> GlobalDescriptor {
    GlobalDescriptor {
      app_base: Some("user-portal".to_string()),
      app_base_with_tenant: Some("/t/wso2.com/user-portal".to_string()),
      app_title: Some("User Portal".to_string()),
      client_id: Some("USER_PORTAL".to_string()),
      client_origin: Some("https://localhost:9000".to_string()),
      client_origin_with_tenant: Some("https://localhost:9000/t/wso2.com".to_string()),
      login_callback_url: Some("https://localhost:9000/t/wso2.com/user-portal/login".to_string()),
      product_version: Some("5.10.0".to_string()),
      server_origin: Some("https://localhost:9443".to_string()),
      server_origin_with_tenant: Some("https://localhost:9443/t/wso2.com".to_string()),
      tenant: Some("wso2.com".to_string()),
      tenant_path: Some("/t/wso2.com".to_string()),
      routes: RoutesDescriptor {
        home: Some("/overview".to_string()),
        login: Some("/login".to_string()),
      },
      ui: UiDescriptor {
        app_name: Some("User Portal".to_string()),
        app_copyright: Some("WSO2 Identity Server".to_string()),
      },
    }
  }

  #[test]
  fn fields_are_renamed_verbatim() {
    let d = descriptor();
    let config = deployment_config(&d);
    assert_eq!(config.server_host, d.server_origin_with_tenant);
    assert_eq!(config.server_origin, d.server_origin);
    assert_eq!(config.app_base_name, d.app_base_with_tenant);
    assert_eq!(config.app_base_name_without_tenant, d.app_base);
    assert_eq!(config.app_home_path, d.routes.home);
    assert_eq!(config.app_login_path, d.routes.login);
    assert_eq!(config.application_name, d.ui.app_name);
    assert_eq!(config.client_host, d.client_origin_with_tenant);
    assert_eq!(config.client_id, d.client_id);
    assert_eq!(config.client_origin, d.client_origin);
    assert_eq!(config.login_callback_url, d.login_callback_url);
    assert_eq!(config.product_version, d.product_version);
    assert_eq!(config.tenant, d.tenant);
    assert_eq!(config.tenant_path, d.tenant_path);
  }

  #[test]
  fn missing_fields_propagate_as_none() {
    let d = GlobalDescriptor {
      server_origin_with_tenant: Some("https://localhost:9443".to_string()),
      ..Default::default()
    };
    let config = deployment_config(&d);
    assert_eq!(config.server_host.as_deref(), Some("https://localhost:9443"));
    assert_eq!(
      config,
      DeploymentConfig {
        server_host: Some("https://localhost:9443".to_string()),
        ..Default::default()
      }
    );
  }

  #[test]
  fn serialized_keys() {
    let value = serde_json::to_value(deployment_config(&descriptor())).unwrap();
    assert_eq!(value["serverHost"], "https://localhost:9443/t/wso2.com");
    assert_eq!(value["clientID"], "USER_PORTAL");
    assert_eq!(value["loginCallbackUrl"], "https://localhost:9000/t/wso2.com/user-portal/login");
    assert_eq!(value["appBaseNameWithoutTenant"], "user-portal");
    assert_eq!(value.as_object().unwrap().len(), 14);
  }
}
