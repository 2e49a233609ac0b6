//! Ownership trait for user-owned resources.
//!
//! ```ignore
//! let comment = repository.find_owner(&comment_id).await?;
//! comment.check_ownership(&caller)?; // Err(Forbidden) if not owner
//! ```

use super::{DomainError, UserId};

/// Trait for resources that have a single owner.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Message reported when a non-owner attempts a mutation.
    fn forbidden_message(&self) -> &'static str {
        "Anda bukan pemilik resource ini"
    }

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Validates ownership, returning `Forbidden` if the user is not the owner.
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::forbidden(self.forbidden_message())
                .with_detail("user_id", user_id.as_str()))
        }
    }
}
