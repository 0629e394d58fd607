use actix_web::dev::HttpServiceFactory;
use actix_web::{get, web, HttpResponse, Responder};

use chrono::Utc;

use crate::repo::Store;
use crate::report::analytics::AnalyticsReport;
use crate::report::overview::DashboardOverview;
use crate::settings::ReportSettings;

use super::error::RestResult;

/// Headline counts of the admin dashboard
#[tracing::instrument(name = "Show the dashboard overview", skip(store))]
#[get("")]
async fn overview(store: web::Data<dyn Store>) -> RestResult<impl Responder> {
    let snapshot = store.fetch_snapshot().await?;
    let today = Utc::now().date_naive();

    Ok(HttpResponse::Ok().json(DashboardOverview::from_snapshot(&snapshot, today)))
}

/// Full analytics report
#[tracing::instrument(name = "Show the analytics report", skip(store, settings))]
#[get("/analytics")]
async fn analytics(
    store: web::Data<dyn Store>,
    settings: web::Data<ReportSettings>,
) -> RestResult<impl Responder> {
    let snapshot = store.fetch_snapshot().await?;
    let today = Utc::now().date_naive();

    let report = AnalyticsReport::build(&snapshot, today, settings.get_ref());

    Ok(HttpResponse::Ok().json(report))
}

/// Dashboard API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/dashboard").service(overview).service(analytics)
}
