use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;

use config::{Config, Environment, File};

use secrecy::Secret;

use serde::Deserialize;
use serde_aux::prelude::*;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

/// Deployment the settings are loaded for, selected with `APP_ENV`
#[derive(Debug)]
pub enum Runtime {
    Dev,
    Prod,
}

impl Runtime {
    pub fn as_str(&self) -> &str {
        match self {
            Runtime::Dev => "dev",
            Runtime::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Runtime {
    type Error = anyhow::Error;

    fn try_from(s: String) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("{} is not a valid runtime environment", other),
        }
    }
}

/// Application settings wrapper
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub reports: ReportSettings,
}

impl Settings {
    /// Load application settings from the settings directory
    pub fn load() -> anyhow::Result<Self> {
        // Get the path to the settings directory
        let path = env::current_dir()?.join("settings");
        // Get the current environment based on the `APP_ENV` environment variable, default to `Dev`
        let runtime: Runtime = env::var("APP_ENV")
            .unwrap_or_else(|_| "dev".into())
            .try_into()?;

        Self::load_from(runtime, &path)
    }
    /// Load application settings from a specified path and runtime
    pub fn load_from(runtime: Runtime, base_path: &Path) -> anyhow::Result<Self> {
        Config::builder()
            // Include the base settings
            .add_source(File::from(base_path.join("base")).required(true))
            // Include the runtime settings
            .add_source(File::from(base_path.join(runtime.as_str())).required(true))
            // Override/include any settings from environment variables
            // NOTE: Should be used for any prod secrets. Takes the form `APP_<settings category>__<setting name>`.
            .add_source(
                Environment::with_prefix("app")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .context("Failed to load/deserialize settings")
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,
    /// `tracing_subscriber::EnvFilter` directives
    log_filter: String,
}

impl ApplicationSettings {
    /// The application address to bind to
    pub fn addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
    /// The log filter directives
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

/// Connection to the read-only events database
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,
    host: String,
    name: String,
    username: String,
    password: Secret<String>,
    require_ssl: bool,
    #[serde(default = "default_max_connections")]
    #[serde(deserialize_with = "deserialize_number_from_string")]
    max_connections: u32,
    #[serde(default = "default_acquire_timeout_seconds")]
    #[serde(deserialize_with = "deserialize_number_from_string")]
    acquire_timeout_seconds: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_seconds() -> u64 {
    3
}

impl DatabaseSettings {
    /// Options for connecting to the events database
    pub fn connect_options(&self) -> PgConnectOptions {
        use secrecy::ExposeSecret;

        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.username)
            .password(self.password.expose_secret())
            .ssl_mode(ssl_mode)
            .application_name("eventos")
    }
    /// Lazily connecting pool over the connection options
    pub fn pool(&self) -> PgPool {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_seconds))
            .connect_lazy_with(self.connect_options())
    }
}

/// Limits of the dashboards and the public calendar
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    top_events: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    recent_registrations: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    navigation_horizon_months: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_events: 10,
            recent_registrations: 15,
            navigation_horizon_months: 12,
        }
    }
}

impl ReportSettings {
    /// Length of the "top events by views" ranking
    pub fn top_events(&self) -> usize {
        self.top_events
    }
    /// Length of the "recent registrations" list
    pub fn recent_registrations(&self) -> usize {
        self.recent_registrations
    }
    /// How many months past the current one the calendar may show
    pub fn navigation_horizon_months(&self) -> u32 {
        self.navigation_horizon_months
    }
}
