//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod address_lookup;
pub mod notifications;
pub mod repositories;

pub use address_lookup::{AddressLookup, AddressRecord};
pub use notifications::{InviteNotification, InviteNotifier, Mailer};
pub use repositories::{ClientRepository, InviteRepository, UserRepository};
