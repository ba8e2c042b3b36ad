//! # Editor Binding
//!
//! Links the editor inputs to at most one contact in the store.
//!
//! ```text
//!            select(id)                 select(other)
//!   Unbound ───────────▶ Bound(id) ─────────────────▶ Bound(other)
//!      ▲                    │
//!      └──── deselect() ────┘
//! ```
//!
//! Edits are unbuffered: [`EditorBinding::edit`] writes to the store first and
//! only then updates the displayed value, so the two never disagree. There is
//! no commit or rollback step.
//!
//! Removing the bound contact must be followed by [`EditorBinding::deselect`];
//! the binding does not observe the store on its own.

use crate::error::{AddressBookError, Result};
use crate::model::{ContactFields, ContactId, Field};
use crate::store::ContactStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingState {
    #[default]
    Unbound,
    Bound(ContactId),
}

#[derive(Debug, Default)]
pub struct EditorBinding {
    state: BindingState,
    values: ContactFields,
}

impl EditorBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BindingState {
        self.state
    }

    pub fn bound_id(&self) -> Option<ContactId> {
        match self.state {
            BindingState::Bound(id) => Some(id),
            BindingState::Unbound => None,
        }
    }

    /// The editor region is only shown while bound.
    pub fn is_visible(&self) -> bool {
        self.bound_id().is_some()
    }

    /// Binds to `id`, loading every displayed value from the store.
    /// The binding is left untouched if the contact does not exist.
    pub fn select<S: ContactStore>(&mut self, store: &S, id: ContactId) -> Result<()> {
        let contact = store.get(&id)?;
        self.values = contact.fields;
        self.state = BindingState::Bound(id);
        tracing::debug!(%id, "editor bound");
        Ok(())
    }

    pub fn deselect(&mut self) {
        if let BindingState::Bound(id) = self.state {
            tracing::debug!(%id, "editor unbound");
        }
        self.state = BindingState::Unbound;
        self.values = ContactFields::new();
    }

    pub fn edit<S: ContactStore>(
        &mut self,
        store: &mut S,
        field: Field,
        value: impl Into<String>,
    ) -> Result<()> {
        let id = self.bound_id().ok_or(AddressBookError::NoSelection)?;
        let value = value.into();
        store.set_field(&id, field, value.clone())?;
        self.values[field] = value;
        Ok(())
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field]
    }

    /// Displayed (field, value) pairs in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter()
    }
}
