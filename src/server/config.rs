use crate::server::error::config::ConfigError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `DATABASE_URL` and `VALKEY_URL` are required, `HOST` and `PORT` fall back to
    /// `127.0.0.1:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port.parse().map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: format!("{}", e),
                })?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }

    /// Address to bind the HTTP listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
