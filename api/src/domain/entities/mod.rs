//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod address;
pub mod client;
pub mod invite;
pub mod user;

pub use address::{Address, AddressId, NewAddress, POSTAL_CODE_MAX_LEN};
pub use client::{Client, ClientId, NewClient};
pub use invite::{Invite, InviteId, NewInvite};
pub use user::{normalize_email, NewUser, User, UserId, UserProfile};
