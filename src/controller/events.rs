use actix_web::dev::HttpServiceFactory;
use actix_web::{get, web, HttpResponse, Responder};

use chrono::Utc;

use serde::Deserialize;

use crate::domain::SearchQuery;
use crate::model::Event;
use crate::repo::{DateRange, Store};
use crate::report::filter;

use super::error::RestResult;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    q: Option<String>,
}

/// Free-text search over upcoming events
#[tracing::instrument(name = "Search events", skip(store))]
#[get("/search")]
async fn search(
    store: web::Data<dyn Store>,
    form: web::Query<SearchForm>,
) -> RestResult<impl Responder> {
    let query: SearchQuery = form.q.as_deref().unwrap_or_default().parse()?;
    if query.is_blank() {
        return Ok(HttpResponse::Ok().json(Vec::<Event>::new()));
    }

    let today = Utc::now().date_naive();
    let events = store
        .fetch_events(Some(DateRange::upcoming_year(today)))
        .await?;

    Ok(HttpResponse::Ok().json(filter::search(&events, &query)))
}

/// Event API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/events").service(search)
}
