use uuid::Uuid;

use chrono::{DateTime, Utc};

use serde::Serialize;

/// Stored Area record, a named and colored classification tag for events
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Area {
    /// ID of the area
    pub id: Uuid,
    /// Display name.
    /// NOTE: Area rollups group events by this name, not by `id`
    pub name: String,
    /// CSS color used when rendering the area
    pub color: String,
    /// Audit fields
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}
