//! Contact CRUD operations.

use breadbox_core::{Contact, ContactId, ContactPatch, NewContact, paths};
use tracing::instrument;

use crate::error::SyncError;

use super::SyncClient;

impl SyncClient {
    /// Get all contact submissions.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the document is malformed.
    #[instrument(skip(self))]
    pub async fn contacts(&self) -> Result<Vec<Contact>, SyncError> {
        self.read_sequence(paths::CONTACTS).await
    }

    /// Record a contact submission, assigning it a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or write fails.
    #[instrument(skip(self, new))]
    pub async fn add_contact(&self, new: NewContact) -> Result<Contact, SyncError> {
        let mut contacts = self.contacts().await?;
        let contact = new.into_contact(ContactId::generate());
        contacts.push(contact.clone());
        let message = format!("Add contact {}", contact.id);
        self.write_sequence(paths::CONTACTS, &contacts, &message)
            .await?;
        Ok(contact)
    }

    /// Update a contact submission.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] (without writing) if no contact has
    /// the given ID.
    #[instrument(skip(self, patch), fields(contact_id = %id))]
    pub async fn update_contact(
        &self,
        id: ContactId,
        patch: ContactPatch,
    ) -> Result<Contact, SyncError> {
        let mut contacts = self.contacts().await?;
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| SyncError::NotFound(format!("contact {id}")))?;
        patch.apply(contact);
        let updated = contact.clone();
        let message = format!("Update contact {id}");
        self.write_sequence(paths::CONTACTS, &contacts, &message)
            .await?;
        Ok(updated)
    }

    /// Delete a contact submission by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or write fails.
    #[instrument(skip(self), fields(contact_id = %id))]
    pub async fn delete_contact(&self, id: ContactId) -> Result<(), SyncError> {
        let mut contacts = self.contacts().await?;
        contacts.retain(|c| c.id != id);
        let message = format!("Delete contact {id}");
        self.write_sequence(paths::CONTACTS, &contacts, &message)
            .await
    }
}
