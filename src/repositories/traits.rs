use crate::domain::ContactId;
use crate::error::RepositoryResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (in-memory, database, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a contact and return its id.
    ///
    /// A contact without an id is assigned the next one; a contact that
    /// already carries an id replaces the stored record under that id.
    async fn save(&self, contact: Contact) -> RepositoryResult<ContactId>;

    /// Retrieve a single contact by id.
    async fn find_by_id(&self, id: ContactId) -> RepositoryResult<Contact>;

    /// Retrieve all contacts in ascending id order.
    async fn find_all(&self) -> RepositoryResult<Vec<Contact>>;

    /// Remove a contact by id.
    async fn delete_by_id(&self, id: ContactId) -> RepositoryResult<()>;
}
