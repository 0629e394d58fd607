use uuid::Uuid;

use chrono::{DateTime, Utc};

use serde::Serialize;

/// Stored page impression of a single event
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct View {
    /// ID of the viewed event
    pub event_id: Uuid,
    /// Anonymous tracking token of the visitor, if the browser supplied one
    pub visitor_id: Option<String>,
    pub ip_hash: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}
