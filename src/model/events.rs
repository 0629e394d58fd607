use uuid::Uuid;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use serde::Serialize;

/// Area fields embedded on an event when it is joined with its area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaTag {
    pub name: String,
    pub color: String,
}

/// Stored Event record, optionally joined with its area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// ID of the event
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Name of the venue
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Calendar day of the event, kept separate from `time`
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub image_url: Option<String>,
    /// Area reference, used by the calendar area filter
    pub area_id: Option<Uuid>,
    /// Joined area, used by the area rollups
    pub area: Option<AreaTag>,
    /// Creation and update timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl Event {
    /// Time of day on a 12 hour clock, e.g. `7:30 PM`
    pub fn display_time(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}

/// Flat row of an event left-joined with its area
#[derive(Debug, sqlx::FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub image_url: Option<String>,
    pub area_id: Option<Uuid>,
    pub area_name: Option<String>,
    pub area_color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        // The join only yields an area when both columns came back
        let area = match (row.area_name, row.area_color) {
            (Some(name), Some(color)) => Some(AreaTag { name, color }),
            _ => None,
        };

        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            location: row.location,
            latitude: row.latitude,
            longitude: row.longitude,
            date: row.date,
            time: row.time,
            image_url: row.image_url,
            area_id: row.area_id,
            area,
            created_at: row.created_at,
            updated_at: row.updated_at,
            created_by: row.created_by,
        }
    }
}
