use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use serde::Serialize;

use uuid::Uuid;

use super::rollup::EventStats;

/// Event statistic used for ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankMetric {
    #[default]
    Views,
    UniqueVisitors,
    Registrations,
}

impl RankMetric {
    fn of(&self, stats: &EventStats) -> u64 {
        match self {
            Self::Views => stats.total_views,
            Self::UniqueVisitors => stats.unique_visitors,
            Self::Registrations => stats.total_registrations,
        }
    }
}

/// Sort descending by `compare` and keep the first `limit` items.
/// Ties keep their input order.
fn top_n<T>(mut items: Vec<T>, limit: usize, compare: impl Fn(&T, &T) -> Ordering) -> Vec<T> {
    // `sort_by` is stable
    items.sort_by(|a, b| compare(b, a));
    items.truncate(limit);
    items
}

/// The `limit` events ranking highest on `metric`
pub fn top_events(stats: &[EventStats], metric: RankMetric, limit: usize) -> Vec<EventStats> {
    top_n(stats.to_vec(), limit, |a, b| metric.of(a).cmp(&metric.of(b)))
}

/// Registration listed with the event it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentRegistration {
    pub event_id: Uuid,
    pub event_name: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// The `limit` newest registrations across all events
pub fn recent_registrations(stats: &[EventStats], limit: usize) -> Vec<RecentRegistration> {
    let registrations = stats
        .iter()
        .flat_map(|event| {
            event.registrations.iter().map(|registration| RecentRegistration {
                event_id: event.id,
                event_name: event.name.clone(),
                name: registration.name.clone(),
                email: registration.email.clone(),
                created_at: registration.created_at,
            })
        })
        .collect();

    top_n(registrations, limit, |a, b| a.created_at.cmp(&b.created_at))
}
