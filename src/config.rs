use crate::error::Error;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}

fn require_var(var: &str) -> Result<String, Error> {
    std::env::var(var).map_err(|_| Error::MissingEnvVar(var.to_string()))
}
