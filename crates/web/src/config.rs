use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub identity_provider_url: String,
    pub identity_client_id: String,
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            identity_provider_url: std::env::var("IDENTITY_PROVIDER_URL")
                .context("Cannot load IDENTITY_PROVIDER_URL env variable")?,
            identity_client_id: std::env::var("IDENTITY_CLIENT_ID")
                .context("Cannot load IDENTITY_CLIENT_ID env variable")?,
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173,capacitor://localhost".to_string()),
        })
    }
}
