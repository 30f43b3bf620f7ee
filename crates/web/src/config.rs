use anyhow::{Context, Result};
use storage::DEFAULT_MAX_CONNECTIONS;

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    /// HS256 secret shared with the token issuer
    pub app_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let app_secret = lookup("APP_SECRET").context("Cannot load APP_SECRET env variable")?;
        if app_secret.trim().is_empty() {
            anyhow::bail!("APP_SECRET must not be empty");
        }

        Ok(Self {
            host: lookup("HOST").context("Cannot load HOST env variable")?,
            port: lookup("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: lookup("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            database_max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
                Some(value) => value
                    .parse()
                    .context("DATABASE_MAX_CONNECTIONS must be a number")?,
                None => DEFAULT_MAX_CONNECTIONS,
            },
            app_secret,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars = vars(pairs);
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const BASE: &[(&str, &str)] = &[
        ("HOST", "0.0.0.0"),
        ("PORT", "4000"),
        ("DATABASE_URL", "postgres://localhost/leaderboard"),
        ("APP_SECRET", "s3cret"),
    ];

    #[test]
    fn test_loads_required_variables() {
        let config = load(BASE).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:4000");
        assert_eq!(config.database_max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.app_secret, "s3cret");
    }

    #[test]
    fn test_max_connections_override() {
        let mut pairs = BASE.to_vec();
        pairs.push(("DATABASE_MAX_CONNECTIONS", "3"));
        assert_eq!(load(&pairs).unwrap().database_max_connections, 3);
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let pairs: Vec<_> = BASE
            .iter()
            .copied()
            .filter(|(k, _)| *k != "APP_SECRET")
            .collect();
        assert!(load(&pairs).is_err());

        let mut blank = BASE.to_vec();
        blank.retain(|(k, _)| *k != "APP_SECRET");
        blank.push(("APP_SECRET", "  "));
        assert!(load(&blank).is_err());
    }

    #[test]
    fn test_port_must_be_numeric() {
        let mut pairs = BASE.to_vec();
        pairs.retain(|(k, _)| *k != "PORT");
        pairs.push(("PORT", "http"));
        assert!(load(&pairs).is_err());
    }
}
