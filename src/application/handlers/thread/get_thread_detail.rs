//! GetThreadDetailHandler - Query handler for a thread and its comments.

use std::sync::Arc;

use crate::domain::comment::ThreadWithComments;
use crate::domain::foundation::{DomainError, ThreadId};
use crate::ports::{CommentRepository, ThreadRepository};

/// Query to read a thread's detail view.
#[derive(Debug, Clone)]
pub struct GetThreadDetailQuery {
    pub thread_id: ThreadId,
}

/// Handler for the thread detail view.
pub struct GetThreadDetailHandler {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl GetThreadDetailHandler {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn handle(&self, query: GetThreadDetailQuery) -> Result<ThreadWithComments, DomainError> {
        self.thread_repository
            .verify_thread_exists(&query.thread_id)
            .await?;

        let (thread, comments) = futures::try_join!(
            self.thread_repository.get_thread_by_id(&query.thread_id),
            self.comment_repository
                .get_comments_by_thread_id(&query.thread_id),
        )?;

        ThreadWithComments::new(thread, comments)
    }
}
