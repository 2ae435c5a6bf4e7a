//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{
    Address, AddressId, Client, ClientId, Invite, InviteId, NewClient, NewInvite, NewUser, User,
    UserId,
};
use crate::domain::ports::{
    AddressLookup, AddressRecord, ClientRepository, InviteNotification, InviteNotifier,
    InviteRepository, Mailer, UserRepository,
};
use crate::error::{DomainError, LookupError, NotificationError};

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.read().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::AlreadyExists(format!(
                "User with email {} already exists",
                user.email
            )));
        }

        let created = User {
            id: UserId::new(),
            email: user.email.clone(),
            name: user.profile.name.clone(),
            is_active: user.profile.is_active,
            is_staff: user.profile.is_staff,
            password_hash: user.password_hash.clone(),
            created_at: Utc::now(),
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }
}

// ============================================================================
// In-Memory Client Repository
// ============================================================================

/// Client store sharing its user table with an `InMemoryUserRepository`
pub struct InMemoryClientRepository {
    users: Arc<InMemoryUserRepository>,
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
}

impl InMemoryClientRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            users,
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Pre-populate with a client for testing
    pub fn with_client(self, client: Client) -> Self {
        self.users
            .users
            .write()
            .unwrap()
            .insert(client.user.id, client.user.clone());
        self.clients.write().unwrap().insert(client.id, client);
        self
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError> {
        Ok(self.clients.read().unwrap().get(id).cloned())
    }

    async fn create(&self, client: &NewClient) -> Result<Client, DomainError> {
        // The user insert is the only step that can fail, so a conflict
        // leaves both tables untouched.
        let user = self.users.create(&client.user).await?;

        let created = Client {
            id: ClientId::new(),
            user,
            address: Address {
                id: AddressId::new(),
                neighborhood: client.address.neighborhood.clone(),
                postal_code: client.address.postal_code.clone(),
                city: client.address.city.clone(),
                street: client.address.street.clone(),
                region: client.address.region.clone(),
                complement: client.address.complement.clone(),
            },
            created_at: Utc::now(),
        };
        self.clients
            .write()
            .unwrap()
            .insert(created.id, created.clone());
        Ok(created)
    }
}

// ============================================================================
// In-Memory Invite Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryInviteRepository {
    invites: Arc<RwLock<HashMap<InviteId, Invite>>>,
}

impl InMemoryInviteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an invite as-is, bypassing the limit
    pub fn insert(&self, invite: Invite) {
        self.invites.write().unwrap().insert(invite.id, invite);
    }

    /// Number of stored invites
    pub fn len(&self) -> usize {
        self.invites.read().unwrap().len()
    }

    pub fn get(&self, id: &InviteId) -> Option<Invite> {
        self.invites.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl InviteRepository for InMemoryInviteRepository {
    async fn find_by_id(&self, id: &InviteId) -> Result<Option<Invite>, DomainError> {
        Ok(self.get(id))
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Invite>, DomainError> {
        let invites = self.invites.read().unwrap();
        Ok(invites.values().find(|i| i.token == token).cloned())
    }

    async fn find_by_sender(&self, sender_id: &ClientId) -> Result<Vec<Invite>, DomainError> {
        let invites = self.invites.read().unwrap();
        let mut result: Vec<Invite> = invites
            .values()
            .filter(|i| i.sender_id == *sender_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn count_by_sender(&self, sender_id: &ClientId) -> Result<u64, DomainError> {
        let invites = self.invites.read().unwrap();
        Ok(invites.values().filter(|i| i.sender_id == *sender_id).count() as u64)
    }

    async fn create_within_limit(
        &self,
        invite: &NewInvite,
        limit: u64,
    ) -> Result<Option<Invite>, DomainError> {
        // Count and insert under one write lock
        let mut invites = self.invites.write().unwrap();

        if invites.values().any(|i| i.to == invite.to) {
            return Err(DomainError::AlreadyExists(format!(
                "Invite to {} already exists",
                invite.to
            )));
        }

        let sent = invites
            .values()
            .filter(|i| i.sender_id == invite.sender_id)
            .count() as u64;
        if sent >= limit {
            return Ok(None);
        }

        let now = Utc::now();
        let created = Invite {
            id: InviteId::new(),
            sender_id: invite.sender_id,
            to: invite.to.clone(),
            token: invite.token.clone(),
            sended: false,
            expired: false,
            created_at: now,
            updated_at: now,
        };
        invites.insert(created.id, created.clone());
        Ok(Some(created))
    }

    async fn mark_sended(&self, id: &InviteId) -> Result<(), DomainError> {
        let mut invites = self.invites.write().unwrap();
        let invite = invites
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Invite {} not found", id)))?;
        invite.sended = true;
        invite.updated_at = Utc::now();
        Ok(())
    }

    async fn expire_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut invites = self.invites.write().unwrap();
        let mut changed = 0;
        for invite in invites.values_mut() {
            if !invite.expired && invite.created_at < cutoff {
                invite.expired = true;
                invite.updated_at = Utc::now();
                changed += 1;
            }
        }
        Ok(changed)
    }
}

// ============================================================================
// Mock Address Lookup
// ============================================================================

/// Address lookup answering from a fixed table
#[derive(Default)]
pub struct MockAddressLookup {
    addresses: HashMap<String, AddressRecord>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockAddressLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lookup whose every call fails at the transport level
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_address(mut self, postal_code: &str, record: AddressRecord) -> Self {
        self.addresses.insert(postal_code.to_string(), record);
        self
    }

    /// Number of lookups performed
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressLookup for MockAddressLookup {
    async fn lookup(&self, postal_code: &str) -> Result<AddressRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(LookupError::Api {
                status: 503,
                message: "Service unavailable".to_string(),
            });
        }

        self.addresses
            .get(postal_code)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(postal_code.to_string()))
    }
}

// ============================================================================
// Recording Notifier
// ============================================================================

/// Notifier that keeps every enqueued notification
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<InviteNotification>>,
    closed: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that rejects everything, like a queue with no worker
    pub fn closed() -> Self {
        Self {
            closed: true,
            ..Self::default()
        }
    }

    pub fn notifications(&self) -> Vec<InviteNotification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl InviteNotifier for RecordingNotifier {
    fn enqueue(&self, notification: InviteNotification) -> Result<(), NotificationError> {
        if self.closed {
            return Err(NotificationError::QueueClosed);
        }
        self.notifications.lock().unwrap().push(notification);
        Ok(())
    }
}

// ============================================================================
// Recording Mailer
// ============================================================================

/// Mailer that records `(to, subject, body)` for every message
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<(String, String, String)>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
        if self.fail {
            return Err(NotificationError::Delivery("SMTP refused".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}
