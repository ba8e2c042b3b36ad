//! # Storage Layer
//!
//! The [`ContactStore`] trait is the record store every other layer talks to.
//! Contacts are kept in insertion order and addressed by [`ContactId`].
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: an ordered `Vec` of contacts. There is no
//!   persistent backend; state is lost when the process ends.
//!
//! ## Ordering
//!
//! Order is significant: the list view renders contacts exactly in store order,
//! and new contacts are inserted at an explicit position (the controller uses
//! the front). Filtering never reorders.

use crate::error::Result;
use crate::model::{Contact, ContactFields, ContactId, Field};

pub mod memory;

/// Abstract interface for the ordered contact collection.
pub trait ContactStore {
    /// Insert a new contact at `position` (clamped to `[0, len]`).
    fn insert_at(&mut self, position: usize, fields: ContactFields) -> ContactId;

    /// Remove a contact. Returns `None` when the identity is unknown.
    fn remove(&mut self, id: &ContactId) -> Option<Contact>;

    /// Get a copy of a contact by identity
    fn get(&self, id: &ContactId) -> Result<Contact>;

    /// Read a single field
    fn get_field(&self, id: &ContactId, field: Field) -> Result<String>;

    /// Overwrite a single field
    fn set_field(&mut self, id: &ContactId, field: Field, value: String) -> Result<()>;

    /// Ordered snapshot of every contact
    fn all(&self) -> Vec<Contact>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append at the end of the collection.
    fn push(&mut self, fields: ContactFields) -> ContactId {
        let end = self.len();
        self.insert_at(end, fields)
    }
}
