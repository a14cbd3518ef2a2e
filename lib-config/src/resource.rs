use crate::{constants::*, error::*};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Logical name of a backend capability consumed by the portal.
/// The set is closed: every variant has exactly one fixed path relative to the server host.
pub enum ServiceResource {
  Applications,
  Associations,
  Authorize,
  ChallengeAnswers,
  Challenges,
  Consents,
  FederatedAssociations,
  FidoEnd,
  FidoMetaData,
  FidoStart,
  FidoStartUsernameless,
  Issuer,
  Jwks,
  Logout,
  Me,
  PendingApprovals,
  ProfileSchemas,
  Receipts,
  Revoke,
  Sessions,
  Token,
  Totp,
  TotpSecret,
  User,
  WellKnown,
}

impl ServiceResource {
  /// All resources, in key order
  pub const ALL: [ServiceResource; 25] = [
    Self::Applications,
    Self::Associations,
    Self::Authorize,
    Self::ChallengeAnswers,
    Self::Challenges,
    Self::Consents,
    Self::FederatedAssociations,
    Self::FidoEnd,
    Self::FidoMetaData,
    Self::FidoStart,
    Self::FidoStartUsernameless,
    Self::Issuer,
    Self::Jwks,
    Self::Logout,
    Self::Me,
    Self::PendingApprovals,
    Self::ProfileSchemas,
    Self::Receipts,
    Self::Revoke,
    Self::Sessions,
    Self::Token,
    Self::Totp,
    Self::TotpSecret,
    Self::User,
    Self::WellKnown,
  ];

  /// Key of the resource in the endpoint map, e.g. `wellKnown`
  pub fn key(&self) -> &'static str {
    match self {
      Self::Applications => "applications",
      Self::Associations => "associations",
      Self::Authorize => "authorize",
      Self::ChallengeAnswers => "challengeAnswers",
      Self::Challenges => "challenges",
      Self::Consents => "consents",
      Self::FederatedAssociations => "federatedAssociations",
      Self::FidoEnd => "fidoEnd",
      Self::FidoMetaData => "fidoMetaData",
      Self::FidoStart => "fidoStart",
      Self::FidoStartUsernameless => "fidoStartUsernameless",
      Self::Issuer => "issuer",
      Self::Jwks => "jwks",
      Self::Logout => "logout",
      Self::Me => "me",
      Self::PendingApprovals => "pendingApprovals",
      Self::ProfileSchemas => "profileSchemas",
      Self::Receipts => "receipts",
      Self::Revoke => "revoke",
      Self::Sessions => "sessions",
      Self::Token => "token",
      Self::Totp => "totp",
      Self::TotpSecret => "totpSecret",
      Self::User => "user",
      Self::WellKnown => "wellKnown",
    }
  }

  /// Path of the resource relative to the server host
  pub fn path(&self) -> &'static str {
    match self {
      Self::Applications => ENDPOINT_APPLICATIONS_PATH,
      Self::Associations => ENDPOINT_ASSOCIATIONS_PATH,
      Self::Authorize => ENDPOINT_AUTHORIZE_PATH,
      Self::ChallengeAnswers => ENDPOINT_CHALLENGE_ANSWERS_PATH,
      Self::Challenges => ENDPOINT_CHALLENGES_PATH,
      Self::Consents => ENDPOINT_CONSENTS_PATH,
      Self::FederatedAssociations => ENDPOINT_FEDERATED_ASSOCIATIONS_PATH,
      Self::FidoEnd => ENDPOINT_FIDO_END_PATH,
      Self::FidoMetaData => ENDPOINT_FIDO_META_DATA_PATH,
      Self::FidoStart => ENDPOINT_FIDO_START_PATH,
      Self::FidoStartUsernameless => ENDPOINT_FIDO_START_USERNAMELESS_PATH,
      Self::Issuer => ENDPOINT_ISSUER_PATH,
      Self::Jwks => ENDPOINT_JWKS_PATH,
      Self::Logout => ENDPOINT_LOGOUT_PATH,
      Self::Me => ENDPOINT_ME_PATH,
      Self::PendingApprovals => ENDPOINT_PENDING_APPROVALS_PATH,
      Self::ProfileSchemas => ENDPOINT_PROFILE_SCHEMAS_PATH,
      Self::Receipts => ENDPOINT_RECEIPTS_PATH,
      Self::Revoke => ENDPOINT_REVOKE_PATH,
      Self::Sessions => ENDPOINT_SESSIONS_PATH,
      Self::Token => ENDPOINT_TOKEN_PATH,
      Self::Totp => ENDPOINT_TOTP_PATH,
      Self::TotpSecret => ENDPOINT_TOTP_SECRET_PATH,
      Self::User => ENDPOINT_USER_PATH,
      Self::WellKnown => ENDPOINT_WELL_KNOWN_PATH,
    }
  }
}

impl fmt::Display for ServiceResource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

impl FromStr for ServiceResource {
  type Err = ConfigError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|resource| resource.key() == s)
      .ok_or_else(|| ConfigError::UnknownServiceResource(s.to_string()))
  }
}
