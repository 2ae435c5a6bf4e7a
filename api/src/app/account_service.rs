//! Account service
//!
//! Handles user registration, client sign-up and password checks.

use std::sync::Arc;

use crate::app::service_config::ServiceConfig;
use crate::app::validation::validate_postal_code;
use crate::domain::entities::{
    normalize_email, Client, ClientId, NewAddress, NewClient, NewUser, User, UserProfile,
    POSTAL_CODE_MAX_LEN,
};
use crate::domain::ports::{AddressLookup, ClientRepository, UserRepository};
use crate::error::AppError;

/// Service for managing user and client accounts
pub struct AccountService<UR, CR, AL>
where
    UR: UserRepository,
    CR: ClientRepository,
    AL: AddressLookup,
{
    users: Arc<UR>,
    clients: Arc<CR>,
    lookup: Arc<AL>,
    config: ServiceConfig,
}

impl<UR, CR, AL> AccountService<UR, CR, AL>
where
    UR: UserRepository,
    CR: ClientRepository,
    AL: AddressLookup,
{
    pub fn new(users: Arc<UR>, clients: Arc<CR>, lookup: Arc<AL>, config: ServiceConfig) -> Self {
        Self {
            users,
            clients,
            lookup,
            config,
        }
    }

    /// Create a plain user account
    pub async fn create_user(
        &self,
        email: Option<&str>,
        password: &str,
        profile: UserProfile,
    ) -> Result<User, AppError> {
        let new_user = self.prepare_user(email, password, profile)?;

        let user = self.users.create(&new_user).await?;
        tracing::info!(user_id = %user.id, "User created");

        Ok(user)
    }

    /// Create a client account
    ///
    /// Steps:
    /// 1. Resolve the postal code and check it is inside the service zone
    /// 2. Build the user exactly as `create_user` does
    /// 3. Store user, address and client together
    ///
    /// The address keeps the postal code as the caller typed it, not the
    /// formatted code returned by the lookup.
    pub async fn create_client(
        &self,
        email: Option<&str>,
        password: &str,
        postal_code: Option<&str>,
        profile: UserProfile,
    ) -> Result<Client, AppError> {
        let raw_code = postal_code.map(str::trim);
        if raw_code.is_some_and(|c| c.chars().count() > POSTAL_CODE_MAX_LEN) {
            return Err(AppError::InvalidPostalCode);
        }

        let record = validate_postal_code(self.lookup.as_ref(), &self.config, raw_code).await?;
        let user = self.prepare_user(email, password, profile)?;

        let new_client = NewClient {
            user,
            address: NewAddress {
                neighborhood: record.neighborhood,
                postal_code: raw_code.map(str::to_string),
                city: record.city,
                street: record.street,
                region: record.region,
                complement: record.complement,
            },
        };

        let client = self.clients.create(&new_client).await?;
        tracing::info!(
            client_id = %client.id,
            user_id = %client.user.id,
            neighborhood = %client.address.neighborhood,
            "Client created"
        );

        Ok(client)
    }

    /// Check an email/password pair
    ///
    /// Returns `None` for unknown emails, wrong passwords and inactive users.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let user = match self.users.find_by_email(&normalize_email(email)).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if !user.is_active || !verify_password(password, &user.password_hash) {
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Find a client by ID
    pub async fn find_client(&self, id: &ClientId) -> Result<Option<Client>, AppError> {
        Ok(self.clients.find_by_id(id).await?)
    }

    fn prepare_user(
        &self,
        email: Option<&str>,
        password: &str,
        profile: UserProfile,
    ) -> Result<NewUser, AppError> {
        let email = email
            .map(normalize_email)
            .filter(|e| !e.is_empty())
            .ok_or(AppError::MissingEmail)?;

        Ok(NewUser {
            email,
            password_hash: hash_password(password, self.config.bcrypt_cost)?,
            profile,
        })
    }
}

/// Hash a password for storage
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(password, cost).map_err(|e| AppError::Internal(format!("bcrypt: {}", e)))
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
