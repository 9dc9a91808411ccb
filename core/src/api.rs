// core/src/api.rs
// JSON-grensesnitt for vertsappen / Python. Motoren selv er total; alle
// feil her kommer fra parsing eller ugyldig konfig.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::activity::{Activity, Cycling, Running};
use crate::config::{ActivityKind, ConfigOverrides, SamplingConfig};
use crate::error::ApiError;
use crate::metrics::Metrics;
use crate::models::{CyclingPoint, RunningPoint, TrackFix};
use crate::sampler::{downsample_with_report, SampleReport};

// ──────────────────────────────────────────────────────────────────────────────
// INPUT (tolerant feltnavn)
// ──────────────────────────────────────────────────────────────────────────────

/// Tidsstempel som sekunder eller RFC 3339-tekst.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TimestampIn {
    Seconds(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
struct PointInTol {
    #[serde(alias = "t", alias = "time")]
    timestamp: TimestampIn,
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon", alias = "lng")]
    longitude: f64,
    #[serde(alias = "alt", alias = "elevation")]
    altitude: f64,
    #[serde(alias = "v_ms", alias = "v")]
    speed: f64,
    #[serde(default, alias = "hr", alias = "heartrate")]
    heart_rate: Option<f64>,
    #[serde(default, alias = "watts")]
    power: Option<f64>,
    #[serde(default)]
    cadence: Option<f64>,

    // sykkel
    #[serde(default, alias = "pedals")]
    pedal_count: Option<f64>,

    // løping
    #[serde(default, alias = "vo")]
    vertical_oscillation: Option<f64>,
    #[serde(default, alias = "gct", alias = "touchdown_time")]
    ground_contact_time: Option<f64>,
    #[serde(default, alias = "stride")]
    stride_length: Option<f64>,
    #[serde(default, alias = "steps")]
    step_count: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DownsampleIn {
    #[serde(alias = "sport")]
    activity: String,
    points: Vec<PointInTol>,
    #[serde(default)]
    config: Option<ConfigOverrides>,
}

#[derive(Debug, Serialize)]
struct DownsampleOut<S> {
    activity: ActivityKind,
    samples: Vec<S>,
    report: SampleReport,
}

fn parse_text(text: &str, index: usize) -> Result<f64, ApiError> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.timestamp_millis() as f64 / 1000.0)
        .map_err(|e| ApiError::Timestamp { index, reason: format!("`{text}`: {e}") })
}

/// Tidsstempler i sekunder. Tall brukes som de er; RFC 3339-tekst blir
/// sekunder siden første punkt. Blandede former i én serie avvises, ellers
/// ville serien hoppe mellom to epoker.
fn resolve_timestamps(points: &[PointInTol]) -> Result<Vec<f64>, ApiError> {
    let Some(first) = points.first() else {
        return Ok(Vec::new());
    };
    match &first.timestamp {
        TimestampIn::Seconds(_) => points
            .iter()
            .enumerate()
            .map(|(i, p)| match &p.timestamp {
                TimestampIn::Seconds(s) => Ok(*s),
                TimestampIn::Text(_) => Err(mixed(i, "text", "seconds")),
            })
            .collect(),
        TimestampIn::Text(t0) => {
            let origin = parse_text(t0, 0)?;
            points
                .iter()
                .enumerate()
                .map(|(i, p)| match &p.timestamp {
                    TimestampIn::Text(text) => Ok(parse_text(text, i)? - origin),
                    TimestampIn::Seconds(_) => Err(mixed(i, "seconds", "text")),
                })
                .collect()
        }
    }
}

fn mixed(index: usize, got: &str, expected: &str) -> ApiError {
    ApiError::Timestamp {
        index,
        reason: format!("{got} timestamp in a series that started with {expected} timestamps"),
    }
}

fn to_fix(p: &PointInTol, timestamp: f64) -> TrackFix {
    TrackFix {
        timestamp,
        latitude: p.latitude,
        longitude: p.longitude,
        altitude: p.altitude,
        speed: p.speed,
        heart_rate: p.heart_rate,
    }
}

fn to_cycling(p: &PointInTol, timestamp: f64) -> CyclingPoint {
    CyclingPoint {
        fix: to_fix(p, timestamp),
        power: p.power,
        cadence: p.cadence,
        pedal_count: p.pedal_count,
    }
}

fn to_running(p: &PointInTol, timestamp: f64) -> RunningPoint {
    RunningPoint {
        fix: to_fix(p, timestamp),
        power: p.power,
        cadence: p.cadence,
        vertical_oscillation: p.vertical_oscillation,
        ground_contact_time: p.ground_contact_time,
        stride_length: p.stride_length,
        step_count: p.step_count,
    }
}

fn run<A>(points: &[A::Point], cfg: &SamplingConfig, metrics: Option<&Metrics>) -> Result<String, ApiError>
where
    A: Activity,
    A::Sample: Serialize,
{
    let (samples, report) = downsample_with_report::<A>(points, cfg);
    if let Some(m) = metrics {
        m.record(A::KIND, &report);
    }
    let out = DownsampleOut { activity: A::KIND, samples, report };
    Ok(serde_json::to_string(&out)?)
}

fn parse_request(json_in: &str) -> Result<DownsampleIn, ApiError> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    let req = spte::deserialize(&mut de).map_err(|e| ApiError::Parse {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })?;
    // ingen søppel etter objektet
    de.end().map_err(|e| ApiError::Parse { path: ".".to_string(), message: e.to_string() })?;
    Ok(req)
}

// ──────────────────────────────────────────────────────────────────────────────
// PUBLIC
// ──────────────────────────────────────────────────────────────────────────────

/// `{ "activity", "points": [...], "config"? }` -> `{ "activity", "samples", "report" }`.
pub fn downsample_json(json_in: &str) -> Result<String, ApiError> {
    downsample_json_impl(json_in, None)
}

/// Som `downsample_json`, men teller opp `metrics`.
pub fn downsample_json_observed(json_in: &str, metrics: &Metrics) -> Result<String, ApiError> {
    downsample_json_impl(json_in, Some(metrics))
}

fn downsample_json_impl(json_in: &str, metrics: Option<&Metrics>) -> Result<String, ApiError> {
    let req = parse_request(json_in)?;
    let kind: ActivityKind = req.activity.parse()?;
    let cfg = req.config.unwrap_or_default().apply(kind.default_config());
    cfg.validate()?;
    let timestamps = resolve_timestamps(&req.points)?;
    let stamped = req.points.iter().zip(timestamps);

    match kind {
        ActivityKind::Cycling => {
            let points: Vec<CyclingPoint> = stamped.map(|(p, t)| to_cycling(p, t)).collect();
            run::<Cycling>(&points, &cfg, metrics)
        }
        ActivityKind::Running => {
            let points: Vec<RunningPoint> = stamped.map(|(p, t)| to_running(p, t)).collect();
            run::<Running>(&points, &cfg, metrics)
        }
    }
}
