//! DTOs for games_sea adapter.

use time::OffsetDateTime;

/// DTO for creating a new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub name: String,
    pub owner_id: i64,
    pub created_at: OffsetDateTime,
}
