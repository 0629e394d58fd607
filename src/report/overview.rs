use chrono::NaiveDate;

use serde::Serialize;

use super::analytics::Snapshot;

/// Headline counts of the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardOverview {
    pub total_events: u64,
    /// Events dated today or later
    pub upcoming_events: u64,
    pub total_areas: u64,
    pub active_subscribers: u64,
    pub total_views: u64,
    pub total_registrations: u64,
}

impl DashboardOverview {
    pub fn from_snapshot(snapshot: &Snapshot, today: NaiveDate) -> Self {
        Self {
            total_events: snapshot.events.len() as u64,
            upcoming_events: snapshot
                .events
                .iter()
                .filter(|event| event.date >= today)
                .count() as u64,
            total_areas: snapshot.areas.len() as u64,
            active_subscribers: snapshot.active_subscribers,
            total_views: snapshot.views.len() as u64,
            total_registrations: snapshot.registrations.len() as u64,
        }
    }
}
