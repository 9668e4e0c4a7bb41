use async_trait::async_trait;
use contacts_api::domain::ContactId;
use contacts_api::error::{RepositoryError, RepositoryResult};
use contacts_api::models::Contact;
use contacts_api::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with test data, tracks method calls for verification, and can
/// simulate a failing storage backend.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<BTreeMap<ContactId, Contact>>>,
    next_id: Arc<Mutex<u64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_writes: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_writes: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed a contact directly, bypassing call tracking.
    ///
    /// Assigns the next id when the contact has none. Returns the id the
    /// contact is stored under.
    pub fn add_contact(&self, mut contact: Contact) -> ContactId {
        let mut contacts = self.contacts.lock().unwrap();
        let id = match contact.id {
            Some(id) => id,
            None => {
                let mut next_id = self.next_id.lock().unwrap();
                let id = ContactId::new(*next_id);
                *next_id += 1;
                contact.id = Some(id);
                id
            }
        };
        contacts.insert(id, contact);
        id
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Make every write operation fail with a backend error.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    /// Number of contacts currently stored.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_writes(&self) -> RepositoryResult<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(RepositoryError::Backend(
                "injected storage failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn save(&self, mut contact: Contact) -> RepositoryResult<ContactId> {
        self.track_call("save");
        self.check_writes()?;

        let mut contacts = self.contacts.lock().unwrap();
        let id = match contact.id {
            Some(id) => id,
            None => {
                let mut next_id = self.next_id.lock().unwrap();
                let id = ContactId::new(*next_id);
                *next_id += 1;
                contact.id = Some(id);
                id
            }
        };
        contacts.insert(id, contact);
        Ok(id)
    }

    async fn find_by_id(&self, id: ContactId) -> RepositoryResult<Contact> {
        self.track_call("find_by_id");

        let contacts = self.contacts.lock().unwrap();
        contacts
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Contact>> {
        self.track_call("find_all");

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ContactId) -> RepositoryResult<()> {
        self.track_call("delete_by_id");
        self.check_writes()?;

        let mut contacts = self.contacts.lock().unwrap();
        contacts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
