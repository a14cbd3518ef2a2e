use crate::{deployment::deployment_config, error::*, log::*, resource::ServiceResource};
use libcommon::GlobalDescriptor;
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Absolute urls of every [`ServiceResource`], each being the server host followed by the resource path.
/// Nothing is validated here: a malformed host simply yields malformed urls.
pub struct ServiceResourceEndpoints {
  applications: String,
  associations: String,
  authorize: String,
  challenge_answers: String,
  challenges: String,
  consents: String,
  federated_associations: String,
  fido_end: String,
  fido_meta_data: String,
  fido_start: String,
  fido_start_usernameless: String,
  issuer: String,
  jwks: String,
  logout: String,
  me: String,
  pending_approvals: String,
  profile_schemas: String,
  receipts: String,
  revoke: String,
  sessions: String,
  token: String,
  totp: String,
  totp_secret: String,
  user: String,
  well_known: String,
}

impl ServiceResourceEndpoints {
  /// Build all endpoints on top of the given host, e.g. `https://localhost:9443/t/wso2.com`
  pub fn resolve(host: &str) -> Self {
    let at = |resource: ServiceResource| format!("{}{}", host, resource.path());
    Self {
      applications: at(ServiceResource::Applications),
      associations: at(ServiceResource::Associations),
      authorize: at(ServiceResource::Authorize),
      challenge_answers: at(ServiceResource::ChallengeAnswers),
      challenges: at(ServiceResource::Challenges),
      consents: at(ServiceResource::Consents),
      federated_associations: at(ServiceResource::FederatedAssociations),
      fido_end: at(ServiceResource::FidoEnd),
      fido_meta_data: at(ServiceResource::FidoMetaData),
      fido_start: at(ServiceResource::FidoStart),
      fido_start_usernameless: at(ServiceResource::FidoStartUsernameless),
      issuer: at(ServiceResource::Issuer),
      jwks: at(ServiceResource::Jwks),
      logout: at(ServiceResource::Logout),
      me: at(ServiceResource::Me),
      pending_approvals: at(ServiceResource::PendingApprovals),
      profile_schemas: at(ServiceResource::ProfileSchemas),
      receipts: at(ServiceResource::Receipts),
      revoke: at(ServiceResource::Revoke),
      sessions: at(ServiceResource::Sessions),
      token: at(ServiceResource::Token),
      totp: at(ServiceResource::Totp),
      totp_secret: at(ServiceResource::TotpSecret),
      user: at(ServiceResource::User),
      well_known: at(ServiceResource::WellKnown),
    }
  }

  /// Endpoint of the given resource
  pub fn get(&self, resource: ServiceResource) -> &str {
    match resource {
      ServiceResource::Applications => &self.applications,
      ServiceResource::Associations => &self.associations,
      ServiceResource::Authorize => &self.authorize,
      ServiceResource::ChallengeAnswers => &self.challenge_answers,
      ServiceResource::Challenges => &self.challenges,
      ServiceResource::Consents => &self.consents,
      ServiceResource::FederatedAssociations => &self.federated_associations,
      ServiceResource::FidoEnd => &self.fido_end,
      ServiceResource::FidoMetaData => &self.fido_meta_data,
      ServiceResource::FidoStart => &self.fido_start,
      ServiceResource::FidoStartUsernameless => &self.fido_start_usernameless,
      ServiceResource::Issuer => &self.issuer,
      ServiceResource::Jwks => &self.jwks,
      ServiceResource::Logout => &self.logout,
      ServiceResource::Me => &self.me,
      ServiceResource::PendingApprovals => &self.pending_approvals,
      ServiceResource::ProfileSchemas => &self.profile_schemas,
      ServiceResource::Receipts => &self.receipts,
      ServiceResource::Revoke => &self.revoke,
      ServiceResource::Sessions => &self.sessions,
      ServiceResource::Token => &self.token,
      ServiceResource::Totp => &self.totp,
      ServiceResource::TotpSecret => &self.totp_secret,
      ServiceResource::User => &self.user,
      ServiceResource::WellKnown => &self.well_known,
    }
  }

  /// Iterate over `(resource, endpoint)` pairs in key order
  pub fn iter(&self) -> impl Iterator<Item = (ServiceResource, &str)> + '_ {
    ServiceResource::ALL
      .into_iter()
      .map(move |resource| (resource, self.get(resource)))
  }

  /// Endpoint of the given resource parsed as [`Url`], for http clients requiring it
  pub fn url(&self, resource: ServiceResource) -> ConfigResult<Url> {
    Url::parse(self.get(resource)).map_err(|source| ConfigError::InvalidEndpointUrl { resource, source })
  }
}

/// Service resource endpoints of the deployment, built on its server host (origin with tenant).
/// Without `serverOriginWithTenant` in the descriptor, every endpoint is the bare relative path.
pub fn service_resource_endpoints(descriptor: &GlobalDescriptor) -> ServiceResourceEndpoints {
  let deployment = deployment_config(descriptor);
  let server_host = match deployment.server_host.as_deref() {
    Some(host) => host,
    None => {
      warn!("No server host given in the descriptor. Endpoints are relative paths.");
      ""
    }
  };
  debug!("Resolving service resource endpoints on {server_host}");
  ServiceResourceEndpoints::resolve(server_host)
}
