//! Input normalization: scalar-or-array coercion and driver broadcasting.
//!
//! Every caller-facing input accepts either a bare scalar or an array. The
//! normalizer coerces each to a one-dimensional array (scalars become
//! length-1 arrays), broadcasts scalar space-weather drivers along the time
//! axis, and expands the geomagnetic index into the fixed-width history
//! vector the model expects. Pure transformation, no side effects.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::error::{MsisError, Result};

/// Width of the Ap history vector the model consumes per time step.
pub const AP_HISTORY_LEN: usize = 7;

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 ("2024-01-15T12:00:00Z"), a naive datetime assumed UTC
/// ("2024-01-15T12:00:00"), or a bare date ("2024-01-15").
pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(&format!("{}T00:00:00", s), "%Y-%m-%dT%H:%M:%S")
    {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    Err(MsisError::TimeParse(s.to_string()))
}

/// A scalar-or-array time input.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeInput {
    /// A single timestamp.
    Single(DateTime<Utc>),
    /// An ordered sequence of timestamps.
    Many(Vec<DateTime<Utc>>),
}

impl TimeInput {
    /// Parse a single ISO-8601 timestamp.
    pub fn from_iso8601(s: &str) -> Result<Self> {
        Ok(Self::Single(parse_iso8601(s)?))
    }

    /// Parse a sequence of ISO-8601 timestamps.
    pub fn from_iso8601_many<S: AsRef<str>>(strs: &[S]) -> Result<Self> {
        let times = strs
            .iter()
            .map(|s| parse_iso8601(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::Many(times))
    }

    /// Coerce to a timestamp array of length at least 1.
    pub fn into_vec(self) -> Vec<DateTime<Utc>> {
        match self {
            TimeInput::Single(t) => vec![t],
            TimeInput::Many(ts) => ts,
        }
    }
}

impl From<DateTime<Utc>> for TimeInput {
    fn from(t: DateTime<Utc>) -> Self {
        TimeInput::Single(t)
    }
}

impl From<Vec<DateTime<Utc>>> for TimeInput {
    fn from(ts: Vec<DateTime<Utc>>) -> Self {
        TimeInput::Many(ts)
    }
}

/// A scalar-or-array spatial coordinate input.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordInput {
    /// A single coordinate value.
    Scalar(f64),
    /// A sequence of coordinate values.
    Values(Vec<f64>),
}

impl CoordInput {
    /// Coerce to a value array of length at least 1.
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            CoordInput::Scalar(v) => vec![v],
            CoordInput::Values(vs) => vs,
        }
    }
}

impl From<f64> for CoordInput {
    fn from(v: f64) -> Self {
        CoordInput::Scalar(v)
    }
}

impl From<Vec<f64>> for CoordInput {
    fn from(vs: Vec<f64>) -> Self {
        CoordInput::Values(vs)
    }
}

impl From<&[f64]> for CoordInput {
    fn from(vs: &[f64]) -> Self {
        CoordInput::Values(vs.to_vec())
    }
}

/// A scalar-or-array space-weather driver input.
///
/// A driver holds one value per time step. The multi-element storm-time
/// history format is deliberately not representable here; only the
/// single-value-per-step form is supported.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverInput {
    /// A single value, broadcast along the time axis.
    Scalar(f64),
    /// One value per time step.
    Values(Vec<f64>),
}

impl DriverInput {
    /// Broadcast to one value per time step.
    ///
    /// A scalar is replicated `nt` times. An array passes through unchanged
    /// with no length validation: a mismatch against the time axis surfaces
    /// later as the external model's own error.
    pub fn broadcast(self, nt: usize) -> Vec<f64> {
        match self {
            DriverInput::Scalar(v) => vec![v; nt],
            DriverInput::Values(vs) => vs,
        }
    }
}

impl From<f64> for DriverInput {
    fn from(v: f64) -> Self {
        DriverInput::Scalar(v)
    }
}

impl From<Vec<f64>> for DriverInput {
    fn from(vs: Vec<f64>) -> Self {
        DriverInput::Values(vs)
    }
}

impl From<&[f64]> for DriverInput {
    fn from(vs: &[f64]) -> Self {
        DriverInput::Values(vs.to_vec())
    }
}

/// Expand per-step Ap scalars into the model's history vectors.
///
/// Each scalar v becomes `[v, 0, 0, 0, 0, 0, 0]`. The zero-filled slots
/// stand in for the 3-hourly storm-time history the model can consume;
/// this expansion is an approximation, not a real history.
pub fn expand_ap(values: &[f64]) -> Vec<[f64; AP_HISTORY_LEN]> {
    values
        .iter()
        .map(|&v| {
            let mut row = [0.0; AP_HISTORY_LEN];
            row[0] = v;
            row
        })
        .collect()
}

/// A calculation request before normalization.
///
/// Coordinates are required; drivers and passthrough options are optional.
#[derive(Debug, Clone)]
pub struct MsisRequest {
    time: TimeInput,
    lat: CoordInput,
    lon: CoordInput,
    alt: CoordInput,
    f107: Option<DriverInput>,
    f107a: Option<DriverInput>,
    ap: Option<DriverInput>,
    options: HashMap<String, Value>,
}

impl MsisRequest {
    /// Create a request from the four required coordinate inputs.
    pub fn new(
        time: impl Into<TimeInput>,
        lat: impl Into<CoordInput>,
        lon: impl Into<CoordInput>,
        alt: impl Into<CoordInput>,
    ) -> Self {
        Self {
            time: time.into(),
            lat: lat.into(),
            lon: lon.into(),
            alt: alt.into(),
            f107: None,
            f107a: None,
            ap: None,
            options: HashMap::new(),
        }
    }

    /// Set the daily F10.7 solar flux driver.
    pub fn with_f107(mut self, f107: impl Into<DriverInput>) -> Self {
        self.f107 = Some(f107.into());
        self
    }

    /// Set the 81-day-averaged F10.7 solar flux driver.
    pub fn with_f107a(mut self, f107a: impl Into<DriverInput>) -> Self {
        self.f107a = Some(f107a.into());
        self
    }

    /// Set the planetary geomagnetic index driver.
    pub fn with_ap(mut self, ap: impl Into<DriverInput>) -> Self {
        self.ap = Some(ap.into());
        self
    }

    /// Attach a passthrough option forwarded verbatim to the model.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Normalize to uniformly-shaped model inputs.
    pub fn normalize(self) -> ModelInputs {
        let times = self.time.into_vec();
        let nt = times.len();

        let f107s = self.f107.map(|d| d.broadcast(nt));
        let f107as = self.f107a.map(|d| d.broadcast(nt));
        let aps = self.ap.map(|d| expand_ap(&d.broadcast(nt)));

        ModelInputs {
            times,
            lats: self.lat.into_vec(),
            lons: self.lon.into_vec(),
            alts: self.alt.into_vec(),
            f107s,
            f107as,
            aps,
            options: self.options,
        }
    }
}

/// Normalized inputs handed to the external model.
///
/// Every field is named; the model call carries no positional coordinate
/// arguments, so a latitude can never be mistaken for a longitude.
#[derive(Debug, Clone)]
pub struct ModelInputs {
    /// Timestamps, length >= 1.
    pub times: Vec<DateTime<Utc>>,
    /// Latitudes in degrees, length >= 1.
    pub lats: Vec<f64>,
    /// Longitudes in degrees, length >= 1.
    pub lons: Vec<f64>,
    /// Altitudes in kilometers, length >= 1.
    pub alts: Vec<f64>,
    /// Daily F10.7 flux, one value per time step if present.
    pub f107s: Option<Vec<f64>>,
    /// 81-day-averaged F10.7 flux, one value per time step if present.
    pub f107as: Option<Vec<f64>>,
    /// Ap history vectors, one per time step if present.
    pub aps: Option<Vec<[f64; AP_HISTORY_LEN]>>,
    /// Options forwarded verbatim to the model.
    pub options: HashMap<String, Value>,
}

impl ModelInputs {
    /// True when all three spatial axes are single points.
    ///
    /// Only then may the model collapse its output to a flythrough trace;
    /// any array-valued spatial input yields grid output and relies on the
    /// final squeeze to drop singleton axes.
    pub fn is_flythrough(&self) -> bool {
        self.lats.len() == 1 && self.lons.len() == 1 && self.alts.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    fn t1() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 1, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_iso8601_forms() {
        let dt = parse_iso8601("2024-01-15T12:00:00Z").unwrap();
        assert_eq!(dt.year(), 2024);

        let dt = parse_iso8601("2024-01-15T12:00:00").unwrap();
        assert_eq!(dt.day(), 15);

        let dt = parse_iso8601("2024-01-15").unwrap();
        assert_eq!(dt.month(), 1);

        assert!(matches!(
            parse_iso8601("not-a-time"),
            Err(MsisError::TimeParse(_))
        ));
    }

    #[test]
    fn test_scalar_time_becomes_length_one() {
        let times = TimeInput::from(t0()).into_vec();
        assert_eq!(times, vec![t0()]);
    }

    #[test]
    fn test_scalar_coord_becomes_length_one() {
        let lat = CoordInput::from(45.0).into_vec();
        assert_eq!(lat, vec![45.0]);

        let alts = CoordInput::from(vec![100.0, 200.0]).into_vec();
        assert_eq!(alts, vec![100.0, 200.0]);
    }

    #[test]
    fn test_driver_scalar_broadcast() {
        let f107 = DriverInput::from(150.0).broadcast(3);
        assert_eq!(f107, vec![150.0, 150.0, 150.0]);
    }

    #[test]
    fn test_driver_array_passes_through_unvalidated() {
        // Length mismatches are the model's problem, not ours.
        let f107 = DriverInput::from(vec![150.0, 151.0]).broadcast(5);
        assert_eq!(f107, vec![150.0, 151.0]);
    }

    #[test]
    fn test_ap_expansion() {
        let rows = expand_ap(&[12.0, 12.0, 12.0]);
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row, [12.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_normalize_scalar_request() {
        let inputs = MsisRequest::new(t0(), 45.0, -75.0, 400.0)
            .with_f107(150.0)
            .with_f107a(148.0)
            .with_ap(12.0)
            .normalize();

        assert_eq!(inputs.times.len(), 1);
        assert_eq!(inputs.lats, vec![45.0]);
        assert_eq!(inputs.lons, vec![-75.0]);
        assert_eq!(inputs.alts, vec![400.0]);
        assert_eq!(inputs.f107s, Some(vec![150.0]));
        assert_eq!(inputs.f107as, Some(vec![148.0]));
        assert_eq!(
            inputs.aps,
            Some(vec![[12.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]])
        );
        assert!(inputs.is_flythrough());
    }

    #[test]
    fn test_normalize_broadcasts_drivers_along_time() {
        let inputs = MsisRequest::new(vec![t0(), t1()], 45.0, -75.0, vec![100.0, 200.0, 300.0])
            .with_f107(150.0)
            .normalize();

        assert_eq!(inputs.f107s, Some(vec![150.0, 150.0]));
        assert!(inputs.f107as.is_none());
        assert!(inputs.aps.is_none());
        // Mixed cardinality: array-valued altitude means grid output.
        assert!(!inputs.is_flythrough());
    }

    #[test]
    fn test_options_pass_through() {
        let inputs = MsisRequest::new(t0(), 45.0, -75.0, 400.0)
            .with_option("geomagnetic_activity", -1)
            .normalize();

        assert_eq!(
            inputs.options.get("geomagnetic_activity"),
            Some(&Value::from(-1))
        );
    }
}
