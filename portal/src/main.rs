#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), forbid(clippy::expect_used))]
//! Load the portal's master lists and print a dashboard snapshot as JSON.
//!
//! # Examples
//! ```sh
//! PORTAL_RECENT_MESSAGES_LIMIT=3 cargo run -p portal
//! ```

use std::io::{self, Write};

use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use portal::config::PortalSettings;
use portal::example_data::load_portal_catalogue;
use portal::screens::DashboardScreen;

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = PortalSettings::load()
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let catalogue = load_portal_catalogue(&settings).map_err(io::Error::other)?;

    let today = DefaultClock.local().date_naive();
    let dashboard = DashboardScreen::new(&catalogue, today, &settings);
    let snapshot = dashboard.snapshot();
    info!(
        %today,
        upcoming = snapshot.upcoming_visits.len(),
        recent = snapshot.recent_messages.len(),
        navigation_delay = ?dashboard.navigation_delay(),
        "dashboard snapshot built"
    );

    let json = serde_json::to_string_pretty(snapshot).map_err(io::Error::other)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")
}
