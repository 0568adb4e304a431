//! HTTP wire format for the observability endpoints.

use serde::{Deserialize, Serialize};

/// One live room as reported by `GET /api/rooms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    /// Room id (equals the project id)
    pub id: String,
    /// Number of currently joined connections
    pub participant_count: usize,
}
