// Paths of the service resources relative to the server host (origin with tenant)

// users api of the authenticated user
pub const ENDPOINT_APPLICATIONS_PATH: &str = "/api/users/v1/me/applications";
pub const ENDPOINT_ASSOCIATIONS_PATH: &str = "/api/users/v1/me/associations";
pub const ENDPOINT_CHALLENGE_ANSWERS_PATH: &str = "/api/users/v1/me/challenge-answers";
pub const ENDPOINT_CHALLENGES_PATH: &str = "/api/users/v1/me/challenges";
pub const ENDPOINT_FEDERATED_ASSOCIATIONS_PATH: &str = "/api/users/v1/me/federated-associations";
pub const ENDPOINT_PENDING_APPROVALS_PATH: &str = "/api/users/v1/me/approval-tasks";
pub const ENDPOINT_SESSIONS_PATH: &str = "/api/users/v1/me/sessions";
pub const ENDPOINT_TOTP_PATH: &str = "/api/users/v1/me/totp";
pub const ENDPOINT_TOTP_SECRET_PATH: &str = "/api/users/v1/me/totp/secret";

// webauthn
pub const ENDPOINT_FIDO_END_PATH: &str = "/api/users/v2/me/webauthn/finish-registration";
pub const ENDPOINT_FIDO_META_DATA_PATH: &str = "/api/users/v2/me/webauthn";
pub const ENDPOINT_FIDO_START_PATH: &str = "/api/users/v2/me/webauthn/start-registration";
pub const ENDPOINT_FIDO_START_USERNAMELESS_PATH: &str = "/api/users/v2/me/webauthn/start-usernameless-registration";

// consent management
pub const ENDPOINT_CONSENTS_PATH: &str = "/api/identity/consent-mgt/v1.0/consents";
pub const ENDPOINT_RECEIPTS_PATH: &str = "/api/identity/consent-mgt/v1.0/consents/receipts";

pub const ENDPOINT_USER_PATH: &str = "/api/identity/user/v1.0/me";

// scim2
pub const ENDPOINT_ME_PATH: &str = "/scim2/Me";
pub const ENDPOINT_PROFILE_SCHEMAS_PATH: &str = "/scim2/Schemas";

// oauth2 / oidc
pub const ENDPOINT_AUTHORIZE_PATH: &str = "/oauth2/authorize";
/// Issuer shares the path with the token endpoint
pub const ENDPOINT_ISSUER_PATH: &str = "/oauth2/token";
pub const ENDPOINT_JWKS_PATH: &str = "/oauth2/jwks";
pub const ENDPOINT_LOGOUT_PATH: &str = "/oidc/logout";
pub const ENDPOINT_REVOKE_PATH: &str = "/oauth2/revoke";
pub const ENDPOINT_TOKEN_PATH: &str = "/oauth2/token";
pub const ENDPOINT_WELL_KNOWN_PATH: &str = "/oauth2/oidcdiscovery/.well-known/openid-configuration";

/// Placeholder entry of the authenticator app list shown in the UI
pub const AUTHENTICATOR_APP_PLACEHOLDER_NAME: &str = "";
pub const AUTHENTICATOR_APP_PLACEHOLDER_LINK: &str = "";
/// Separator between the copyright holder and the year
pub const COPYRIGHT_SIGN: char = '\u{a9}';
