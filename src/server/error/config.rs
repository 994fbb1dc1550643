use thiserror::Error;

/// Startup configuration failures raised by `Config::from_env`.
///
/// These never reach a client under normal operation; if one is wrapped in `Error` it is
/// answered with the generic 500.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Environment variable {var} has invalid value: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
