use chrono::NaiveDate;

use serde::Serialize;

use crate::model::{Area, Event, Registration, View};
use crate::settings::ReportSettings;

use super::buckets::{daily_activity, DailyActivity};
use super::ranking::{recent_registrations, top_events, RankMetric, RecentRegistration};
use super::rollup::{area_stats, event_stats, global_stats, AreaStats, EventStats, GlobalStats};

/// Raw collections read from the store for one report.
/// A collection the store did not return is left empty.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub events: Vec<Event>,
    pub areas: Vec<Area>,
    pub views: Vec<View>,
    pub registrations: Vec<Registration>,
    pub active_subscribers: u64,
}

/// Analytics dashboard view-model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub global: GlobalStats,
    pub events: Vec<EventStats>,
    pub areas: Vec<AreaStats>,
    /// Views and registrations per day over the last 30 days
    pub activity: Vec<DailyActivity>,
    pub top_events: Vec<EventStats>,
    pub recent_registrations: Vec<RecentRegistration>,
}

impl AnalyticsReport {
    #[tracing::instrument(
        name = "Build analytics report",
        skip(snapshot, settings),
        fields(events = snapshot.events.len(), views = snapshot.views.len())
    )]
    pub fn build(snapshot: &Snapshot, today: NaiveDate, settings: &ReportSettings) -> Self {
        let events = event_stats(&snapshot.events, &snapshot.views, &snapshot.registrations);

        Self {
            global: global_stats(
                &snapshot.events,
                &snapshot.views,
                &snapshot.registrations,
                snapshot.active_subscribers,
            ),
            areas: area_stats(&snapshot.areas, &events),
            activity: daily_activity(&snapshot.views, &snapshot.registrations, today),
            top_events: top_events(&events, RankMetric::Views, settings.top_events()),
            recent_registrations: recent_registrations(&events, settings.recent_registrations()),
            events,
        }
    }
}
