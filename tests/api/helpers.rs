use std::net::TcpListener;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use reqwest::{Client, Method, Response};

use uuid::Uuid;

use eventos::app;
use eventos::error::{Error, Result};
use eventos::model::{Area, AreaTag, Event, Registration, View};
use eventos::repo::{DateRange, Store};
use eventos::settings::ReportSettings;

/// Store serving fixed collections from memory
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub events: Vec<Event>,
    pub areas: Vec<Area>,
    pub views: Vec<View>,
    pub registrations: Vec<Registration>,
    pub active_subscribers: u64,
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn fetch_events(&self, range: Option<DateRange>) -> Result<Vec<Event>> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|event| range.map_or(true, |range| range.contains(event.date)))
            .cloned()
            .collect();
        events.sort_by_key(|event| event.date);
        Ok(events)
    }

    async fn fetch_areas(&self) -> Result<Vec<Area>> {
        Ok(self.areas.clone())
    }

    async fn fetch_views(&self) -> Result<Vec<View>> {
        Ok(self.views.clone())
    }

    async fn fetch_registrations(&self) -> Result<Vec<Registration>> {
        Ok(self.registrations.clone())
    }

    async fn count_active_subscribers(&self) -> Result<u64> {
        Ok(self.active_subscribers)
    }
}

/// Store whose every read fails
#[derive(Debug)]
pub struct FailingStore;

#[async_trait::async_trait]
impl Store for FailingStore {
    async fn fetch_events(&self, _range: Option<DateRange>) -> Result<Vec<Event>> {
        Err(Error::DatabaseError(sqlx::Error::PoolTimedOut))
    }

    async fn fetch_areas(&self) -> Result<Vec<Area>> {
        Err(Error::DatabaseError(sqlx::Error::PoolTimedOut))
    }

    async fn fetch_views(&self) -> Result<Vec<View>> {
        Err(Error::DatabaseError(sqlx::Error::PoolTimedOut))
    }

    async fn fetch_registrations(&self) -> Result<Vec<Registration>> {
        Err(Error::DatabaseError(sqlx::Error::PoolTimedOut))
    }

    async fn count_active_subscribers(&self) -> Result<u64> {
        Err(Error::DatabaseError(sqlx::Error::PoolTimedOut))
    }
}

pub struct TestApp {
    addr: String,

    pub client: Client,
}

impl TestApp {
    pub async fn spawn(store: impl Store + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let server = app::run(listener, Arc::new(store), ReportSettings::default())
            .expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        let client = Client::new();

        Self { addr, client }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn health_check(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "health_check").send().await
    }

    pub async fn calendar(&self, query: &[(&str, &str)]) -> reqwest::Result<Response> {
        self.request(Method::GET, "calendar")
            .query(query)
            .send()
            .await
    }

    pub async fn search(&self, q: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, "events/search")
            .query(&[("q", q)])
            .send()
            .await
    }

    pub async fn dashboard(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "dashboard").send().await
    }

    pub async fn analytics(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "dashboard/analytics").send().await
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn area(name: &str, color: &str) -> Area {
    Area {
        id: Uuid::new_v4(),
        name: name.into(),
        color: color.into(),
        created_at: Utc::now(),
        created_by: None,
    }
}

pub fn event(name: &str, date: NaiveDate, area: Option<&Area>) -> Event {
    let now = Utc::now();
    Event {
        id: Uuid::new_v4(),
        name: name.into(),
        description: None,
        location: "Centro de convenciones".into(),
        latitude: None,
        longitude: None,
        date,
        time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        image_url: None,
        area_id: area.map(|a| a.id),
        area: area.map(|a| AreaTag {
            name: a.name.clone(),
            color: a.color.clone(),
        }),
        created_at: now,
        updated_at: now,
        created_by: None,
    }
}

pub fn view(event: &Event, visitor: &str, at: DateTime<Utc>) -> View {
    View {
        event_id: event.id,
        visitor_id: Some(visitor.into()),
        ip_hash: None,
        user_agent: Some("test-agent".into()),
        created_at: at,
    }
}

pub fn registration(event: &Event, email: &str, at: DateTime<Utc>) -> Registration {
    Registration {
        event_id: event.id,
        name: "Test Registrant".into(),
        email: email.into(),
        phone: None,
        created_at: at,
    }
}
