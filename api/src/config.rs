use std::env;

use anyhow::Context;
use chrono::TimeDelta;

use crate::app::service_config::{
    parse_service_zone, ServiceConfig, DEFAULT_BCRYPT_COST, DEFAULT_INVITE_LIMIT,
    DEFAULT_INVITE_TTL_DAYS, DEFAULT_SERVICE_ZONE,
};

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the ViaCEP-compatible postal code API
    pub address_lookup_url: String,
    /// Neighborhoods the platform currently serves
    pub service_zone: Vec<String>,
    /// Maximum invites a single client may send
    pub invite_limit: u64,
    /// Invites older than this are expired by the sweep
    pub invite_ttl: TimeDelta,
    pub bcrypt_cost: u32,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let service_zone = match var("SERVICE_ZONE") {
            Some(raw) => parse_service_zone(&raw),
            None => DEFAULT_SERVICE_ZONE.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            database_url,
            address_lookup_url: var("ADDRESS_LOOKUP_URL")
                .unwrap_or_else(|| "https://viacep.com.br".to_string()),
            service_zone,
            invite_limit: parse_or("INVITE_LIMIT", var("INVITE_LIMIT"), DEFAULT_INVITE_LIMIT)?,
            invite_ttl: parse_ttl(var("INVITE_TTL_DAYS"))?,
            bcrypt_cost: parse_or("BCRYPT_COST", var("BCRYPT_COST"), DEFAULT_BCRYPT_COST)?,
            port: parse_or("PORT", var("PORT"), 8080)?,
        })
    }

    /// Settings handed to the account and invite services
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            service_zone: self.service_zone.clone(),
            invite_limit: self.invite_limit,
            bcrypt_cost: self.bcrypt_cost,
        }
    }
}

/// Parse `INVITE_TTL_DAYS` into a positive duration
fn parse_ttl(value: Option<String>) -> anyhow::Result<TimeDelta> {
    let days: i64 = parse_or("INVITE_TTL_DAYS", value, DEFAULT_INVITE_TTL_DAYS)?;
    if days <= 0 {
        anyhow::bail!("INVITE_TTL_DAYS must be positive, got {}", days);
    }
    TimeDelta::try_days(days)
        .with_context(|| format!("INVITE_TTL_DAYS is out of range: {}", days))
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, raw)),
        None => Ok(default),
    }
}
