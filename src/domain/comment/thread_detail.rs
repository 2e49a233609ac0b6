//! Thread detail read model.
//!
//! `ThreadWithComments` aggregates a thread with its comments for display.
//! Deleted comments are redacted during assembly; the stored content is
//! never exposed once a comment is soft-deleted.

use serde::Serialize;

use crate::domain::foundation::{CommentId, CommentStatus, DomainError, ThreadId, Timestamp};

pub const THREAD_DETAIL: &str = "THREAD_DETAIL";
pub const COMMENT_DETAIL: &str = "COMMENT_DETAIL";

/// Content shown in place of a soft-deleted comment.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// Thread row as read from persistence, with the owner's username resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: Timestamp,
    pub username: String,
}

/// Comment row as read from persistence, with the owner's username resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: CommentId,
    pub username: String,
    pub date: Timestamp,
    pub content: String,
    pub is_deleted: bool,
}

/// A single comment as displayed under a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetail {
    id: CommentId,
    username: String,
    date: String,
    content: String,
}

impl CommentDetail {
    /// Builds a display comment, redacting content if the comment is deleted.
    ///
    /// # Errors
    ///
    /// - `COMMENT_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY` if id or username is empty
    pub fn new(record: CommentRecord) -> Result<Self, DomainError> {
        if record.id.as_str().is_empty() || record.username.is_empty() {
            return Err(DomainError::missing_property(COMMENT_DETAIL));
        }

        let content = match CommentStatus::from_is_deleted(record.is_deleted) {
            CommentStatus::Deleted => DELETED_COMMENT_PLACEHOLDER.to_string(),
            CommentStatus::Active => record.content,
        };

        Ok(Self {
            id: record.id,
            username: record.username,
            date: record.date.to_iso_string(),
            content,
        })
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A thread together with its comments, oldest comment first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadWithComments {
    id: ThreadId,
    title: String,
    body: String,
    date: String,
    username: String,
    comments: Vec<CommentDetail>,
}

impl ThreadWithComments {
    /// Assembles the read model.
    ///
    /// Comments are ordered by creation time ascending regardless of the
    /// order the repository returned them in; equal timestamps keep their
    /// relative order.
    ///
    /// # Errors
    ///
    /// - `THREAD_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY` if a thread field is empty
    /// - `COMMENT_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY` from any comment
    pub fn new(thread: ThreadRecord, mut comments: Vec<CommentRecord>) -> Result<Self, DomainError> {
        if thread.id.as_str().is_empty()
            || thread.title.is_empty()
            || thread.body.is_empty()
            || thread.username.is_empty()
        {
            return Err(DomainError::missing_property(THREAD_DETAIL));
        }

        comments.sort_by_key(|comment| comment.date);
        let comments = comments
            .into_iter()
            .map(CommentDetail::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date.to_iso_string(),
            username: thread.username,
            comments,
        })
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn comments(&self) -> &[CommentDetail] {
        &self.comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn at(minutes: i64) -> Timestamp {
        let base = Utc.with_ymd_and_hms(2023, 10, 10, 10, 0, 0).unwrap();
        Timestamp::from_datetime(base + Duration::minutes(minutes))
    }

    fn thread_record() -> ThreadRecord {
        ThreadRecord {
            id: ThreadId::new("thread-123"),
            title: "Thread Title".to_string(),
            body: "Thread Body".to_string(),
            date: at(0),
            username: "user123".to_string(),
        }
    }

    fn comment_record(id: &str, minutes: i64, is_deleted: bool) -> CommentRecord {
        CommentRecord {
            id: CommentId::new(id),
            username: "user456".to_string(),
            date: at(minutes),
            content: format!("content of {}", id),
            is_deleted,
        }
    }

    #[test]
    fn comment_detail_keeps_content_when_active() {
        let detail = CommentDetail::new(comment_record("comment-123", 1, false)).unwrap();

        assert_eq!(detail.id().as_str(), "comment-123");
        assert_eq!(detail.username(), "user456");
        assert_eq!(detail.date(), "2023-10-10T10:01:00.000Z");
        assert_eq!(detail.content(), "content of comment-123");
    }

    #[test]
    fn comment_detail_redacts_deleted_content() {
        let detail = CommentDetail::new(comment_record("comment-456", 1, true)).unwrap();
        assert_eq!(detail.content(), DELETED_COMMENT_PLACEHOLDER);
    }

    #[test]
    fn comment_detail_fails_without_username() {
        let mut record = comment_record("comment-123", 1, false);
        record.username.clear();

        let err = CommentDetail::new(record).unwrap_err();

        assert_eq!(err.message, "COMMENT_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn thread_detail_fails_without_title() {
        let mut thread = thread_record();
        thread.title.clear();

        let err = ThreadWithComments::new(thread, vec![]).unwrap_err();

        assert_eq!(err.code, ErrorCode::MissingProperty);
        assert_eq!(err.message, "THREAD_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn thread_detail_assembles_thread_and_comments() {
        let detail = ThreadWithComments::new(
            thread_record(),
            vec![comment_record("comment-123", 1, false), comment_record("comment-456", 2, true)],
        )
        .unwrap();

        assert_eq!(detail.id().as_str(), "thread-123");
        assert_eq!(detail.title(), "Thread Title");
        assert_eq!(detail.body(), "Thread Body");
        assert_eq!(detail.date(), "2023-10-10T10:00:00.000Z");
        assert_eq!(detail.username(), "user123");
        assert_eq!(detail.comments().len(), 2);
        assert_eq!(detail.comments()[0].content(), "content of comment-123");
        assert_eq!(detail.comments()[1].content(), DELETED_COMMENT_PLACEHOLDER);
    }

    #[test]
    fn thread_detail_orders_comments_oldest_first() {
        let detail = ThreadWithComments::new(
            thread_record(),
            vec![
                comment_record("comment-c", 30, false),
                comment_record("comment-a", 10, false),
                comment_record("comment-b", 20, false),
            ],
        )
        .unwrap();

        let ids: Vec<&str> = detail.comments().iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["comment-a", "comment-b", "comment-c"]);
    }

    #[test]
    fn thread_detail_serializes_expected_shape() {
        let detail =
            ThreadWithComments::new(thread_record(), vec![comment_record("comment-1", 5, false)])
                .unwrap();

        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["id"], "thread-123");
        assert_eq!(json["comments"][0]["id"], "comment-1");
        assert_eq!(json["comments"][0]["date"], "2023-10-10T10:05:00.000Z");
        assert!(json["comments"][0].get("is_deleted").is_none());
    }

    proptest! {
        #[test]
        fn deleted_comments_always_show_placeholder(
            entries in proptest::collection::vec((0i64..10_000, any::<bool>(), ".*"), 0..20)
        ) {
            let records: Vec<CommentRecord> = entries
                .iter()
                .enumerate()
                .map(|(i, (minutes, deleted, content))| CommentRecord {
                    id: CommentId::new(format!("comment-{}", i)),
                    username: "someone".to_string(),
                    date: at(*minutes),
                    content: content.clone(),
                    is_deleted: *deleted,
                })
                .collect();

            let detail = ThreadWithComments::new(thread_record(), records.clone()).unwrap();

            for comment in detail.comments() {
                let source = records.iter().find(|r| &r.id == comment.id()).unwrap();
                if source.is_deleted {
                    prop_assert_eq!(comment.content(), DELETED_COMMENT_PLACEHOLDER);
                } else {
                    prop_assert_eq!(comment.content(), source.content.as_str());
                }
            }

            let dates: Vec<&str> = detail.comments().iter().map(|c| c.date()).collect();
            let mut sorted = dates.clone();
            sorted.sort();
            prop_assert_eq!(dates, sorted);
        }
    }
}
