use async_trait::async_trait;

use crate::app_error::AppResult;

/// Management API of the external media service.
#[async_trait]
pub trait RoomService: Send + Sync {
    /// Number of participants currently connected to `room_name`.
    async fn count_participants(&self, room_name: &str) -> AppResult<usize>;
}
