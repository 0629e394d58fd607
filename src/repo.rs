use chrono::{Months, NaiveDate};

use crate::error::Result;
use crate::model::{Area, Event, Registration, View};
use crate::report::analytics::Snapshot;

mod postgres;

pub use postgres::PgStore;

/// Inclusive range of event dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Today through the same day next year, the span of the public listings
    pub fn upcoming_year(today: NaiveDate) -> Self {
        let to = today
            .checked_add_months(Months::new(12))
            .unwrap_or(NaiveDate::MAX);
        Self { from: today, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Read-only access to the records the reports are computed from.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Events joined with their area, ordered by date
    async fn fetch_events(&self, range: Option<DateRange>) -> Result<Vec<Event>>;

    /// Every area
    async fn fetch_areas(&self) -> Result<Vec<Area>>;

    /// Every recorded event view
    async fn fetch_views(&self) -> Result<Vec<View>>;

    /// Every event registration
    async fn fetch_registrations(&self) -> Result<Vec<Registration>>;

    /// Number of active newsletter subscribers
    async fn count_active_subscribers(&self) -> Result<u64>;

    /// Read every collection needed by the dashboards, issuing the reads concurrently
    #[tracing::instrument(name = "Fetch report snapshot", skip(self))]
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let (events, areas, views, registrations, active_subscribers) = tokio::try_join!(
            self.fetch_events(None),
            self.fetch_areas(),
            self.fetch_views(),
            self.fetch_registrations(),
            self.count_active_subscribers(),
        )?;

        Ok(Snapshot {
            events,
            areas,
            views,
            registrations,
            active_subscribers,
        })
    }
}
