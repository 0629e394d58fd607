use sqlx::PgPool;

use crate::error::Result;
use crate::model::{Area, Event, EventRow, Registration, View};

use super::{DateRange, Store};

/// Postgres-backed store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Store for PgStore {
    #[tracing::instrument(name = "Fetch events", skip(self))]
    async fn fetch_events(&self, range: Option<DateRange>) -> Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            select e.id, e.name, e.description, e.location, e.latitude, e.longitude,
                   e.date, e.time, e.image_url, e.area_id,
                   a.name as area_name, a.color as area_color,
                   e.created_at, e.updated_at, e.created_by
            from events e
            left join areas a on a.id = e.area_id
            where ($1::date is null or e.date >= $1)
              and ($2::date is null or e.date <= $2)
            order by e.date asc
            "#,
        )
        .bind(range.map(|r| r.from))
        .bind(range.map(|r| r.to))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    #[tracing::instrument(name = "Fetch areas", skip(self))]
    async fn fetch_areas(&self) -> Result<Vec<Area>> {
        let areas = sqlx::query_as::<_, Area>(
            "select id, name, color, created_at, created_by from areas order by name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(areas)
    }

    #[tracing::instrument(name = "Fetch event views", skip(self))]
    async fn fetch_views(&self) -> Result<Vec<View>> {
        let views = sqlx::query_as::<_, View>(
            "select event_id, visitor_id, ip_hash, user_agent, created_at from event_views",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(views)
    }

    #[tracing::instrument(name = "Fetch event registrations", skip(self))]
    async fn fetch_registrations(&self) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            "select event_id, name, email, phone, created_at from event_registrations",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    #[tracing::instrument(name = "Count active subscribers", skip(self))]
    async fn count_active_subscribers(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("select count(*) from subscribers where active")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}
