//! Meeting repository abstraction
//!
//! The pipeline consumes meetings through this trait; persistence is owned
//! by the implementation behind it.

use crate::domain::ids::MeetingId;
use crate::domain::meeting::Meeting;
use crate::domain::Result;
use async_trait::async_trait;

/// Read access to stored meeting records
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Fetch one meeting by id
    ///
    /// Returns `Ok(None)` when the id does not resolve; storage failures
    /// are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or parsed.
    async fn get_by_id(&self, id: &MeetingId) -> Result<Option<Meeting>>;

    /// List every stored meeting id, in store order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or parsed.
    async fn list_ids(&self) -> Result<Vec<MeetingId>>;
}
