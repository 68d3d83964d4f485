//! In-memory ticket store.
//!
//! One mutex guards both the id counter and the ticket map, so an insert
//! allocates its id and stores the row atomically.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{NewTicket, Ticket, TicketId};

use crate::domain::TicketStoreError;
use crate::ports::TicketStore;

#[derive(Debug)]
struct Inner {
    next_id: TicketId,
    tickets: BTreeMap<TicketId, Ticket>,
}

#[derive(Debug)]
pub struct InMemoryTicketStore {
    inner: Mutex<Inner>,
}

impl Default for InMemoryTicketStore {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                tickets: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ticket_id: TicketId) -> Option<Ticket> {
        self.inner.lock().tickets.get(&ticket_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().tickets.is_empty()
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn insert(&self, ticket: NewTicket) -> Result<TicketId, TicketStoreError> {
        let mut inner = self.inner.lock();
        let ticket_id = inner.next_id;
        inner.next_id = ticket_id
            .checked_add(1)
            .ok_or_else(|| TicketStoreError::Rejected("ticket id space exhausted".into()))?;
        inner.tickets.insert(ticket_id, Ticket::new(ticket_id, ticket));
        Ok(ticket_id)
    }

    async fn delete(&self, ticket_id: TicketId) -> Result<bool, TicketStoreError> {
        Ok(self.inner.lock().tickets.remove(&ticket_id).is_some())
    }

    async fn find_by_personal_id(
        &self,
        personal_id: &str,
    ) -> Result<Vec<Ticket>, TicketStoreError> {
        Ok(self
            .inner
            .lock()
            .tickets
            .values()
            .filter(|t| t.details.personal_id == personal_id)
            .cloned()
            .collect())
    }
}
