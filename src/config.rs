//! Configuration, built from environment variables.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Relay configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SMTP relay hostname.
    pub smtp_host: String,
    /// SMTP relay port.
    pub smtp_port: u16,
    /// SMTP account username.
    pub username: String,
    /// SMTP account password.
    pub password: SecretString,
    /// Outbound sender address (defaults to the username).
    pub from_address: String,
    /// HTTP listen port.
    pub listen_port: u16,
    /// Timeout applied to each SMTP send.
    pub send_timeout: Duration,
}

impl Config {
    /// Build config from environment variables.
    ///
    /// `EMAIL_SMTP_HOST` is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let smtp_host = std::env::var("EMAIL_SMTP_HOST")
            .map_err(|_| ConfigError::MissingEnvVar("EMAIL_SMTP_HOST".into()))?;

        let smtp_port: u16 = std::env::var("EMAIL_SMTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(587);

        let username = std::env::var("EMAIL_USERNAME").unwrap_or_default();
        let password = SecretString::from(std::env::var("EMAIL_PASSWORD").unwrap_or_default());
        let from_address = std::env::var("EMAIL_FROM_ADDRESS").unwrap_or_else(|_| username.clone());

        let listen_port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let send_timeout_secs: u64 = std::env::var("EMAIL_SEND_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            smtp_host,
            smtp_port,
            username,
            password,
            from_address,
            listen_port,
            send_timeout: Duration::from_secs(send_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_smtp_host() {
        // SAFETY: This test runs in isolation; no other thread reads EMAIL_SMTP_HOST concurrently.
        unsafe { std::env::remove_var("EMAIL_SMTP_HOST") };
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingEnvVar(_))
        ));
    }
}
