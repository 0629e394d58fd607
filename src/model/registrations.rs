use uuid::Uuid;

use chrono::{DateTime, Utc};

use serde::Serialize;

/// Stored signup for an event
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Registration {
    /// ID of the event registered for
    pub event_id: Uuid,
    /// Registrant supplied data
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}
