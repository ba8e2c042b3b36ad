use super::ContactStore;
use crate::error::{AddressBookError, Result};
use crate::model::{Contact, ContactFields, ContactId, Field};

/// Ordered in-memory contact storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, id: &ContactId) -> Result<&Contact> {
        self.contacts
            .iter()
            .find(|c| c.id == *id)
            .ok_or(AddressBookError::NotFound(*id))
    }

    fn find_mut(&mut self, id: &ContactId) -> Result<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or(AddressBookError::NotFound(*id))
    }
}

impl ContactStore for InMemoryStore {
    fn insert_at(&mut self, position: usize, fields: ContactFields) -> ContactId {
        let contact = Contact::new(fields);
        let id = contact.id;
        let position = position.min(self.contacts.len());
        self.contacts.insert(position, contact);
        id
    }

    fn remove(&mut self, id: &ContactId) -> Option<Contact> {
        let position = self.contacts.iter().position(|c| c.id == *id)?;
        Some(self.contacts.remove(position))
    }

    fn get(&self, id: &ContactId) -> Result<Contact> {
        self.find(id).cloned()
    }

    fn get_field(&self, id: &ContactId, field: Field) -> Result<String> {
        Ok(self.find(id)?.get(field).to_string())
    }

    fn set_field(&mut self, id: &ContactId, field: Field, value: String) -> Result<()> {
        self.find_mut(id)?.set(field, value);
        Ok(())
    }

    fn all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub ids: Vec<ContactId>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                ids: Vec::new(),
            }
        }

        /// Appends a contact with the given names and no company.
        pub fn with_contact(self, first: &str, last: &str) -> Self {
            self.with_company_contact(first, last, "")
        }

        pub fn with_company_contact(mut self, first: &str, last: &str, company: &str) -> Self {
            let fields = ContactFields::new()
                .with(Field::FirstName, first)
                .with(Field::LastName, last)
                .with(Field::Company, company);
            let id = self.store.push(fields);
            self.ids.push(id);
            self
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = ContactFields::new()
                    .with(Field::FirstName, format!("First{}", i + 1))
                    .with(Field::LastName, format!("Last{}", i + 1));
                let id = self.store.push(fields);
                self.ids.push(id);
            }
            self
        }
    }
}
