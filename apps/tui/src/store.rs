use crate::domain::Contact;
use crate::error::StoreError;
use std::sync::Arc;

/// Read-only copy of the store contents, shared with the table and the writer.
pub type Snapshot = Arc<[Contact]>;

/// Ordered contact list for one session. A contact's position is its only identity.
#[derive(Debug, Default, Clone)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub const fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    pub fn append(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    pub fn extend(&mut self, contacts: impl IntoIterator<Item = Contact>) {
        self.contacts.extend(contacts);
    }

    /// Removes the contact at `index`, shifting every later contact down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Contact, StoreError> {
        if index >= self.contacts.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.contacts.len(),
            });
        }

        Ok(self.contacts.remove(index))
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::from(self.contacts.as_slice())
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
