//! In-memory meeting repository
//!
//! Used by the test suites and by embedders that hold meetings themselves.

use crate::adapters::repository::traits::MeetingRepository;
use crate::domain::ids::MeetingId;
use crate::domain::meeting::Meeting;
use crate::domain::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Meeting repository backed by a process-local map
#[derive(Debug, Default)]
pub struct InMemoryMeetingStore {
    // Insertion order is kept separately so list_ids is deterministic.
    meetings: RwLock<HashMap<MeetingId, Meeting>>,
    order: RwLock<Vec<MeetingId>>,
}

impl InMemoryMeetingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a meeting
    pub fn insert(&self, meeting: Meeting) {
        let id = meeting.id.clone();
        let mut meetings = self.meetings.write().expect("meeting store lock poisoned");
        if meetings.insert(id.clone(), meeting).is_none() {
            self.order
                .write()
                .expect("meeting store lock poisoned")
                .push(id);
        }
    }

    /// Number of stored meetings
    pub fn len(&self) -> usize {
        self.meetings
            .read()
            .expect("meeting store lock poisoned")
            .len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MeetingRepository for InMemoryMeetingStore {
    async fn get_by_id(&self, id: &MeetingId) -> Result<Option<Meeting>> {
        Ok(self
            .meetings
            .read()
            .expect("meeting store lock poisoned")
            .get(id)
            .cloned())
    }

    async fn list_ids(&self) -> Result<Vec<MeetingId>> {
        Ok(self
            .order
            .read()
            .expect("meeting store lock poisoned")
            .clone())
    }
}
