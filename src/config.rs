use std::env;

/// Environment-driven settings. Pass-through values only; no business logic
/// hangs off any of them.
#[derive(Debug, Clone)]
pub struct Config {
    pub secret_key: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
    pub allowed_hosts: Vec<String>,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            secret_key: required("SECRET_KEY"),
            debug: env::var("DEBUG").map(|v| v == "1").unwrap_or(false),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            allowed_hosts: env::var("ALLOWED_HOSTS")
                .map(|v| v.split(',').map(|h| h.trim().to_string()).collect())
                .unwrap_or_default(),
            database_url: required("DATABASE_URL"),
        }
    }
}

fn required(key: &str) -> String {
    env::var(key).unwrap_or_else(|e| {
        panic!("failed to get env with name '{key}': {e:?}");
    })
}
