use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::controller::{calendar, dashboard, events};
use crate::repo::Store;
use crate::settings::ReportSettings;

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Run the application on a specified TCP listener
pub fn run(
    listener: TcpListener,
    store: Arc<dyn Store>,
    reports: ReportSettings,
) -> anyhow::Result<Server> {
    // Wrap application data
    let store: web::Data<dyn Store> = web::Data::from(store);
    let reports = web::Data::new(reports);

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(store.clone())
            .app_data(reports.clone())
            .service(health_check)
            .service(calendar::scope())
            .service(events::scope())
            .service(dashboard::scope())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
