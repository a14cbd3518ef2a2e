use crate::resource::ServiceResource;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Describes things that can go wrong around the config views.
/// Building the views themselves never fails.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Unknown service resource: {0}")]
  UnknownServiceResource(String),

  #[error("Endpoint of {resource} is not a valid url: {source}")]
  InvalidEndpointUrl {
    resource: ServiceResource,
    source: url::ParseError,
  },

  // black hole
  #[error(transparent)]
  Other(#[from] anyhow::Error),
}
