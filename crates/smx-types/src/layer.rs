use std::fmt;
use std::num::NonZeroU32;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Mainnet genesis as Unix seconds (2023-07-14T08:00:00Z).
pub const GENESIS_UNIX: i64 = 1_689_321_600;

/// Mainnet layer duration in seconds.
pub const LAYER_DURATION_SECS: u32 = 300;

const MAINNET_LAYER_DURATION: NonZeroU32 = match NonZeroU32::new(LAYER_DURATION_SECS) {
    Some(duration) => duration,
    None => panic!("LAYER_DURATION_SECS must be non-zero"),
};

/// Layer index of `at` relative to `genesis`.
///
/// Elapsed whole seconds are divided by `interval` with truncation toward
/// zero, so every instant less than one interval before genesis maps to
/// layer 0 and layer -1 begins a full interval before genesis.
pub fn layer_of(at: DateTime<Utc>, genesis: DateTime<Utc>, interval: NonZeroU32) -> i64 {
    let elapsed = (at - genesis).num_seconds();
    elapsed / i64::from(interval.get())
}

/// Interpret a calendar date as midnight UTC.
///
/// This is the only place a zone-less date becomes an instant. Callers that
/// hold dates in another zone must convert to [`DateTime<Utc>`] themselves
/// and call [`LayerClock::layer_of`] directly.
pub fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, TypeError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| TypeError::InvalidDate {
        input: input.to_string(),
    })
}

/// Genesis instant plus fixed layer duration.
///
/// The same clock produces both the layer bounds used to filter rewards and
/// the timestamp displayed for each reward, so the two cannot drift apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerClock {
    pub genesis: DateTime<Utc>,
    pub layer_duration_secs: NonZeroU32,
}

impl LayerClock {
    /// Create a clock, rejecting a zero layer duration.
    pub fn new(genesis: DateTime<Utc>, layer_duration_secs: u32) -> Result<Self, TypeError> {
        let layer_duration_secs =
            NonZeroU32::new(layer_duration_secs).ok_or(TypeError::ZeroLayerDuration)?;
        Ok(Self {
            genesis,
            layer_duration_secs,
        })
    }

    /// The Spacemesh mainnet clock.
    pub fn mainnet() -> Self {
        let genesis = DateTime::from_timestamp(GENESIS_UNIX, 0)
            .expect("GENESIS_UNIX is within chrono's range");
        Self {
            genesis,
            layer_duration_secs: MAINNET_LAYER_DURATION,
        }
    }

    /// Layer index containing `at`. See [`layer_of`] for rounding.
    pub fn layer_of(&self, at: DateTime<Utc>) -> i64 {
        layer_of(at, self.genesis, self.layer_duration_secs)
    }

    /// Layer index at midnight UTC of `date`.
    pub fn layer_of_date(&self, date: NaiveDate) -> i64 {
        self.layer_of(utc_midnight(date))
    }

    /// Start instant of `layer`, or `None` if it falls outside chrono's range.
    pub fn layer_start(&self, layer: i64) -> Option<DateTime<Utc>> {
        let offset = layer.checked_mul(i64::from(self.layer_duration_secs.get()))?;
        let secs = self.genesis.timestamp().checked_add(offset)?;
        DateTime::from_timestamp(secs, self.genesis.timestamp_subsec_nanos())
    }

    /// Layer bounds for an optional pair of calendar dates.
    ///
    /// Each bound is the layer at the date's midnight UTC. The end bound is
    /// therefore the first layer of the end date, not its last.
    pub fn range_for_dates(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> LayerRange {
        LayerRange {
            start: start.map(|d| self.layer_of_date(d)),
            end: end.map(|d| self.layer_of_date(d)),
        }
    }
}

impl Default for LayerClock {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Inclusive, optionally open-ended, range of layer indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl LayerRange {
    /// A range with no bounds.
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Returns `true` if neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns `true` if `layer` satisfies both bounds.
    pub fn contains(&self, layer: i64) -> bool {
        self.start.map_or(true, |s| layer >= s) && self.end.map_or(true, |e| layer <= e)
    }
}

impl fmt::Display for LayerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(s), Some(e)) => write!(f, "{s}..={e}"),
            (Some(s), None) => write!(f, "{s}.."),
            (None, Some(e)) => write!(f, "..={e}"),
            (None, None) => write!(f, ".."),
        }
    }
}
