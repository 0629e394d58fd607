use std::net::TcpListener;
use std::sync::Arc;

use anyhow::Context;

use eventos::app;
use eventos::repo::PgStore;
use eventos::settings::Settings;
use eventos::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    let subscriber = telemetry::create_subscriber(settings.app.log_filter(), std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let pool = settings.database.pool();
    let store = Arc::new(PgStore::new(pool));

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!(addr = ?listener.local_addr()?, "Serving events site");

    app::run(listener, store, settings.reports)?
        .await
        .context("Failed to run app")
}
