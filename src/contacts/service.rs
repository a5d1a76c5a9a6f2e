//! Contact service: the five CRUD operations.
//!
//! # Responsibilities
//! - Validate input and order the checks (existence → fields → uniqueness)
//! - Issue store operations and shape their results
//! - Map the store's UNIQUE violation to a duplicate-phone failure
//!
//! # Design Decisions
//! - Create and update re-read the persisted row before returning it, so
//!   callers always see what the store committed
//! - The duplicate pre-check keeps messages precise; the constraint
//!   violation mapping keeps concurrent writers correct

use crate::contacts::model::{Contact, ContactDraft};
use crate::contacts::store::{is_unique_violation, ContactStore};
use crate::contacts::{validation, ContactError};

/// Stateless facade over the contact store.
#[derive(Debug, Clone)]
pub struct ContactService {
    store: ContactStore,
}

impl ContactService {
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    /// All contacts, newest first.
    pub async fn list(&self) -> Result<Vec<Contact>, ContactError> {
        Ok(self.store.fetch_all().await?)
    }

    /// A single contact by id.
    pub async fn get(&self, id: i64) -> Result<Contact, ContactError> {
        self.store
            .fetch_by_id(id)
            .await?
            .ok_or(ContactError::NotFound(id))
    }

    /// Validate and persist a new contact, returning the stored row.
    pub async fn create(&self, draft: ContactDraft) -> Result<Contact, ContactError> {
        let draft = draft.normalized();
        validation::validate_draft(&draft)?;

        if self.store.phone_in_use(&draft.phone, None).await? {
            return Err(ContactError::DuplicatePhone);
        }

        let id = match self.store.insert(&draft).await {
            Ok(id) => id,
            Err(e) if is_unique_violation(&e) => return Err(ContactError::DuplicatePhone),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(id, phone = %draft.phone, "Contact created");
        self.get(id).await
    }

    /// Validate and replace every mutable field of an existing contact.
    pub async fn update(&self, id: i64, draft: ContactDraft) -> Result<Contact, ContactError> {
        if self.store.fetch_by_id(id).await?.is_none() {
            return Err(ContactError::NotFound(id));
        }

        let draft = draft.normalized();
        validation::validate_draft(&draft)?;

        if self.store.phone_in_use(&draft.phone, Some(id)).await? {
            return Err(ContactError::DuplicatePhone);
        }

        match self.store.update(id, &draft).await {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => return Err(ContactError::DuplicatePhone),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(id, "Contact updated");
        self.get(id).await
    }

    /// Hard-delete a contact.
    pub async fn delete(&self, id: i64) -> Result<(), ContactError> {
        if self.store.fetch_by_id(id).await?.is_none() {
            return Err(ContactError::NotFound(id));
        }

        self.store.delete(id).await?;
        tracing::info!(id, "Contact deleted");
        Ok(())
    }
}
