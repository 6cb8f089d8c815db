//! Test utilities shared by unit tests (in `src/`) and integration tests
//! (in `tests/`). Compiled for tests and with the `test-support` feature.

use std::sync::Mutex;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use example_data::SeedRegistry;
use mockable::Clock;

use crate::domain::{BookingHandoff, BookingHandoffError, BookingRequest};
use crate::example_data::PortalCatalogue;

const SAMPLE_SEEDS: &str = include_str!("../fixtures/example-data/seeds.json");

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// Noon UTC on `date`, so the local calendar day matches in any
    /// timezone within eleven hours of UTC.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN + chrono::TimeDelta::hours(12)).and_utc())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The day the bundled seed data treats as "today".
pub fn sample_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_else(|| panic!("sample date is valid"))
}

pub fn sample_registry() -> SeedRegistry {
    SeedRegistry::from_json(SAMPLE_SEEDS)
        .unwrap_or_else(|error| panic!("bundled seeds failed to parse: {error}"))
}

/// The bundled seed document converted to domain values.
pub fn sample_catalogue() -> PortalCatalogue {
    PortalCatalogue::from_registry(&sample_registry())
        .unwrap_or_else(|error| panic!("bundled seeds failed to convert: {error}"))
}

/// Handoff adapter that keeps every booking it receives.
#[derive(Debug, Default)]
pub struct RecordingHandoff(Mutex<Vec<BookingRequest>>);

impl RecordingHandoff {
    pub fn received(&self) -> Vec<BookingRequest> {
        match self.0.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => panic!("handoff mutex"),
        }
    }
}

impl BookingHandoff for RecordingHandoff {
    fn submit(&self, request: &BookingRequest) -> Result<(), BookingHandoffError> {
        match self.0.lock() {
            Ok(mut guard) => guard.push(request.clone()),
            Err(_) => panic!("handoff mutex"),
        }
        Ok(())
    }
}
