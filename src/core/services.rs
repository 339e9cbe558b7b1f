//! Collaborator contracts
//!
//! Everything the dispatcher needs from the outside world: network lookups,
//! browser and desktop actions, interaction logging, randomness and the
//! clock. The core only ever talks to these traits.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;
use ulid::Ulid;

use crate::error::ServiceError;

/// Current conditions for a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp_c: String,
    pub feels_like_c: String,
    pub humidity: String,
    /// Condition as reported by the provider (English)
    pub condition: String,
}

/// News feed selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsSource {
    #[default]
    Google,
    Bbc,
    ElPais,
    Cnn,
}

impl NewsSource {
    pub fn id(&self) -> &'static str {
        match self {
            NewsSource::Google => "google",
            NewsSource::Bbc => "bbc",
            NewsSource::ElPais => "elpais",
            NewsSource::Cnn => "cnn",
        }
    }

    /// Name used in the headline summary
    pub fn display_name(&self) -> String {
        match self {
            NewsSource::Google => "Google Noticias".to_string(),
            other => other.id().to_uppercase(),
        }
    }

    /// Source hinted at in normalized text
    pub fn from_hint(text: &str) -> Self {
        if text.contains("bbc") {
            NewsSource::Bbc
        } else if text.contains("pais") {
            NewsSource::ElPais
        } else if text.contains("cnn") {
            NewsSource::Cnn
        } else {
            NewsSource::Google
        }
    }
}

/// Encyclopedia answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Article {
    /// Short summary of the page
    Summary(String),
    /// Several pages match; candidate titles
    Ambiguous(Vec<String>),
    /// No exact page, but related titles exist
    Suggestions(Vec<String>),
    NotFound,
}

/// Geocoded place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Best-effort position of the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl GeoLocation {
    /// Used whenever the real position cannot be determined
    pub fn fallback() -> Self {
        Self {
            city: "La Habana".to_string(),
            country: "Cuba".to_string(),
            latitude: 23.1136,
            longitude: -82.3666,
            timezone: "America/Havana".to_string(),
        }
    }

    pub fn full_location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// External systems the dispatcher delegates to.
///
/// Timeouts and retries belong to implementations, never to the core.
pub trait Services: Send + Sync {
    fn weather(&self, location: &str) -> Result<WeatherReport, ServiceError>;

    /// Latest headlines, newest first
    fn news(&self, source: NewsSource) -> Result<Vec<String>, ServiceError>;

    fn encyclopedia(&self, topic: &str) -> Result<Article, ServiceError>;

    /// `Ok(None)` when the query resolves to nothing
    fn place_lookup(&self, query: &str) -> Result<Option<Place>, ServiceError>;

    /// Never fails; falls back to [`GeoLocation::fallback`]
    fn geolocate(&self) -> GeoLocation;

    /// Fire-and-forget
    fn browse(&self, url: &str);

    /// Open a desktop calculator
    fn launch_calculator(&self) -> Result<(), ServiceError>;
}

/// Services with no network: every lookup is unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineServices;

impl OfflineServices {
    fn unavailable<T>() -> Result<T, ServiceError> {
        Err(ServiceError::Unavailable("offline mode".to_string()))
    }
}

impl Services for OfflineServices {
    fn weather(&self, _location: &str) -> Result<WeatherReport, ServiceError> {
        Self::unavailable()
    }

    fn news(&self, _source: NewsSource) -> Result<Vec<String>, ServiceError> {
        Self::unavailable()
    }

    fn encyclopedia(&self, _topic: &str) -> Result<Article, ServiceError> {
        Self::unavailable()
    }

    fn place_lookup(&self, _query: &str) -> Result<Option<Place>, ServiceError> {
        Self::unavailable()
    }

    fn geolocate(&self) -> GeoLocation {
        GeoLocation::fallback()
    }

    fn browse(&self, url: &str) {
        info!(url, "browse requested (offline, not opened)");
    }

    fn launch_calculator(&self) -> Result<(), ServiceError> {
        Self::unavailable()
    }
}

/// One handled command, as persisted by the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub id: Ulid,
    pub timestamp: DateTime<Utc>,
    /// Command after the activation word
    pub command: String,
    pub response: String,
    /// Intent name or `"none"`
    pub intent: String,
    pub confidence: f64,
}

impl InteractionRecord {
    pub fn new(
        command: impl Into<String>,
        response: impl Into<String>,
        intent: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            id: Ulid::new(),
            timestamp: Utc::now(),
            command: command.into(),
            response: response.into(),
            intent: intent.into(),
            confidence,
        }
    }
}

/// Append-only interaction log. Failures are reported, never fatal.
pub trait InteractionLog: Send + Sync {
    fn record(&self, record: &InteractionRecord) -> Result<()>;
}

/// Log that emits a tracing event per interaction
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl InteractionLog for TracingLog {
    fn record(&self, record: &InteractionRecord) -> Result<()> {
        info!(
            id = %record.id,
            command = %record.command,
            intent = %record.intent,
            confidence = record.confidence,
            "interaction"
        );
        Ok(())
    }
}

/// Source of uniform choices for the response pools
pub trait RandomSource: Send + Sync {
    /// Index in `0..len`; `len` is never 0
    fn index(&self, len: usize) -> usize;
}

/// Thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic RNG for reproducible runs
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}

/// Cycles through indexes: 0, 1, 2, ... modulo the pool size
#[derive(Debug, Default)]
pub struct SequentialRandom {
    next: AtomicUsize,
}

impl RandomSource for SequentialRandom {
    fn index(&self, len: usize) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) % len
    }
}

/// Wall clock seam for the time and date answers
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local time of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
