//! Input validation
//!
//! Postal code and email checks shared by the account and invite services.

use std::sync::OnceLock;

use regex::Regex;

use crate::app::service_config::ServiceConfig;
use crate::domain::ports::{AddressLookup, AddressRecord};
use crate::error::AppError;

/// Validate a postal code and resolve it to an address
///
/// An absent or blank code, and every kind of lookup failure, is reported as
/// `InvalidPostalCode`. A resolved address outside the service zone is
/// reported as `PostalCodeOutOfServiceArea`.
pub async fn validate_postal_code<AL>(
    lookup: &AL,
    config: &ServiceConfig,
    postal_code: Option<&str>,
) -> Result<AddressRecord, AppError>
where
    AL: AddressLookup + ?Sized,
{
    let code = match postal_code.map(str::trim) {
        Some(code) if !code.is_empty() => code,
        _ => return Err(AppError::InvalidPostalCode),
    };

    let address = lookup.lookup(code).await.map_err(|e| {
        tracing::debug!(error = %e, postal_code = code, "Postal code lookup failed");
        AppError::InvalidPostalCode
    })?;

    if !config.serves(&address.neighborhood) {
        tracing::debug!(
            postal_code = code,
            neighborhood = %address.neighborhood,
            "Postal code outside service zone"
        );
        return Err(AppError::PostalCodeOutOfServiceArea);
    }

    Ok(address)
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9.+_-]+@[A-Za-z0-9._-]+\.[A-Za-z]+$").expect("valid email regex")
    })
}

/// Check that an email looks like `local@domain.tld`
///
/// Purely syntactic: no DNS or mailbox verification.
pub fn validate_email_syntax(email: &str) -> bool {
    email_regex().is_match(email)
}
