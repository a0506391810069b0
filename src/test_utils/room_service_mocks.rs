use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::room_service::RoomService,
};

/// Scripted `RoomService` that records which rooms were queried.
pub struct StubRoomService {
    participants: Option<usize>,
    requested: Mutex<Vec<String>>,
}

impl StubRoomService {
    pub fn with_participants(count: usize) -> Self {
        Self {
            participants: Some(count),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as if the media service were unreachable.
    pub fn failing() -> Self {
        Self {
            participants: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_rooms(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoomService for StubRoomService {
    async fn count_participants(&self, room_name: &str) -> AppResult<usize> {
        self.requested.lock().unwrap().push(room_name.to_string());
        self.participants
            .ok_or_else(|| AppError::Upstream("stub media service is down".into()))
    }
}
