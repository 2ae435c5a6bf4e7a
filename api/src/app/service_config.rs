//! Service configuration
//!
//! Service zone and invite quota settings, passed explicitly to the account
//! and invite services.

/// Maximum number of invites a client may send
pub const DEFAULT_INVITE_LIMIT: u64 = 10;

/// Days after which a pending invite is expired
pub const DEFAULT_INVITE_TTL_DAYS: i64 = 30;

/// bcrypt work factor for password hashes
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Random bytes in an invite token (hex encoded, so twice as many chars)
pub const INVITE_TOKEN_BYTES: usize = 32;

/// Neighborhoods served when `SERVICE_ZONE` is not set
pub const DEFAULT_SERVICE_ZONE: &[&str] = &[
    "Benfica",
    "Caju",
    "Mangueira",
    "São Cristóvão",
    "Vasco da Gama",
];

/// Settings shared by the account and invite services
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Neighborhood names, as returned by the postal code lookup
    pub service_zone: Vec<String>,
    pub invite_limit: u64,
    pub bcrypt_cost: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_zone: DEFAULT_SERVICE_ZONE.iter().map(|s| s.to_string()).collect(),
            invite_limit: DEFAULT_INVITE_LIMIT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl ServiceConfig {
    /// Whether the platform serves the given neighborhood
    pub fn serves(&self, neighborhood: &str) -> bool {
        self.service_zone.iter().any(|n| n == neighborhood)
    }
}

/// Parse a comma separated neighborhood list, skipping blank entries
pub fn parse_service_zone(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
