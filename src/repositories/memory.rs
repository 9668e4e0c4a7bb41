use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::ContactId;
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;

/// Contact storage behind the repository lock.
///
/// Keyed on the numeric id, so iteration order is assignment order.
struct Store {
    contacts: BTreeMap<ContactId, Contact>,
    next_id: u64,
}

/// In-memory contact repository.
///
/// Backed by a `tokio::sync::RwLock`, so reads run concurrently while
/// writes are serialized. Each operation takes the lock once and releases
/// it before returning, which keeps every mutation atomic with respect to
/// the others. Concurrent updates to the same contact resolve to whichever
/// write acquires the lock last.
pub struct InMemoryContactRepository {
    store: RwLock<Store>,
}

impl InMemoryContactRepository {
    /// Create an empty repository. Ids start at 1.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                contacts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn save(&self, mut contact: Contact) -> RepositoryResult<ContactId> {
        let mut store = self.store.write().await;

        let id = match contact.id {
            Some(id) => {
                // Keep the counter ahead of any explicitly-placed id so a
                // later insert cannot collide with it. Saturates at the top
                // of the id space instead of wrapping.
                if id.value() >= store.next_id {
                    store.next_id = id.value().saturating_add(1);
                }
                id
            }
            None => {
                let id = ContactId::new(store.next_id);
                store.next_id += 1;
                contact.id = Some(id);
                id
            }
        };

        store.contacts.insert(id, contact);
        Ok(id)
    }

    async fn find_by_id(&self, id: ContactId) -> RepositoryResult<Contact> {
        let store = self.store.read().await;
        store
            .contacts
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Contact>> {
        let store = self.store.read().await;
        Ok(store.contacts.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ContactId) -> RepositoryResult<()> {
        let mut store = self.store.write().await;
        store
            .contacts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
