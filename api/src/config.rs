use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Reject finishing or cancelling an order that already reached a terminal status
    pub strict_status_transitions: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(p) => p
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", p))?,
            Err(_) => 8080,
        };

        let strict_status_transitions = match env::var("STRICT_STATUS_TRANSITIONS") {
            Ok(v) => parse_flag(&v).with_context(|| {
                format!("STRICT_STATUS_TRANSITIONS must be true or false, got: {}", v)
            })?,
            Err(_) => false,
        };

        Ok(Self {
            database_url,
            port,
            strict_status_transitions,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
