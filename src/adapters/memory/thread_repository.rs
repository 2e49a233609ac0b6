//! In-memory implementation of ThreadRepository.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::comment::ThreadRecord;
use crate::domain::foundation::{DomainError, ThreadId, Timestamp};
use crate::domain::thread::{CreateThread, CreatedThread};
use crate::ports::ThreadRepository;

use super::store::{InMemoryForumStore, StoredThread};

#[derive(Debug, Clone)]
pub struct InMemoryThreadRepository {
    store: InMemoryForumStore,
}

impl InMemoryThreadRepository {
    pub fn new(store: InMemoryForumStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ThreadRepository for InMemoryThreadRepository {
    async fn add_thread(&self, thread: &CreateThread) -> Result<CreatedThread, DomainError> {
        let stored = StoredThread {
            id: ThreadId::generate(),
            title: thread.title().to_string(),
            body: thread.body().to_string(),
            owner: thread.owner().clone(),
            created_at: Timestamp::now(),
        };

        let created = CreatedThread::new(&json!({
            "id": stored.id.as_str(),
            "title": stored.title,
            "owner": stored.owner.as_str(),
        }))?;

        self.store.data.write().await.threads.push(stored);
        Ok(created)
    }

    async fn verify_thread_exists(&self, id: &ThreadId) -> Result<(), DomainError> {
        if self.store.data.read().await.has_thread(id) {
            Ok(())
        } else {
            Err(DomainError::thread_not_found(id.as_str()))
        }
    }

    async fn get_thread_by_id(&self, id: &ThreadId) -> Result<ThreadRecord, DomainError> {
        let data = self.store.data.read().await;
        let thread = data
            .threads
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| DomainError::thread_not_found(id.as_str()))?;

        Ok(ThreadRecord {
            id: thread.id.clone(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            date: thread.created_at,
            username: data.username_of(&thread.owner),
        })
    }
}
