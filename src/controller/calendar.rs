use actix_web::dev::HttpServiceFactory;
use actix_web::{get, web, HttpResponse, Responder};

use chrono::Utc;

use serde::Deserialize;

use crate::domain::{AreaSelector, MonthSelection, Navigation};
use crate::error::Error;
use crate::repo::{DateRange, Store};
use crate::report::calendar::NavigationWindow;
use crate::report::calendar_view::{resolve_reference, CalendarView};
use crate::settings::ReportSettings;

use super::error::RestResult;

/// Query deserialization wrapper for the calendar selectors
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    month: Option<String>,
    nav: Option<String>,
    area: Option<String>,
}

/// Parsed calendar selectors
#[derive(Debug)]
struct CalendarRequest {
    month: MonthSelection,
    navigation: Option<Navigation>,
    area: AreaSelector,
}

impl TryFrom<CalendarQuery> for CalendarRequest {
    type Error = Error;

    fn try_from(query: CalendarQuery) -> Result<Self, Self::Error> {
        let month = query.month.as_deref().unwrap_or_default().parse()?;
        let navigation = query.nav.as_deref().map(str::parse).transpose()?;
        let area = query.area.as_deref().unwrap_or_default().parse()?;

        Ok(Self {
            month,
            navigation,
            area,
        })
    }
}

/// Month calendar of upcoming events
#[tracing::instrument(name = "Show the events calendar", skip(store, settings))]
#[get("")]
async fn show(
    store: web::Data<dyn Store>,
    settings: web::Data<ReportSettings>,
    query: web::Query<CalendarQuery>,
) -> RestResult<impl Responder> {
    let request: CalendarRequest = query.into_inner().try_into()?;

    let today = Utc::now().date_naive();
    let horizon = settings.navigation_horizon_months();
    let window = NavigationWindow::new(today, horizon);
    // Reject bad selectors before touching the store
    let reference = resolve_reference(&request.month, request.navigation, today, &window)?;

    let events = store
        .fetch_events(Some(DateRange::upcoming_year(today)))
        .await?;

    let view = CalendarView::build(&events, reference, today, request.area, &window, horizon);

    Ok(HttpResponse::Ok().json(view))
}

/// Calendar API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/calendar").service(show)
}
