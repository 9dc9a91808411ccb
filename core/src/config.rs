// core/src/config.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maks antall punkter i en nedsamplet serie.
pub const MAX_SAMPLES: usize = 80;
/// Minste tidsspenn (s) i en bøtte før deling, unngår /0 ved like tidsstempler.
pub const MIN_SPAN_S: f64 = 1e-4;
/// m/s -> km/t
pub const MS_TO_KMH: f64 = 3.6;

pub const CYCLING_SPEED_CEILING_KMH: f64 = 100.0;
pub const RUNNING_SPEED_CEILING_KMH: f64 = 36.0;
pub const CYCLING_OUTLIER_FLOOR_KMH: f64 = 50.0;
pub const RUNNING_OUTLIER_FLOOR_KMH: f64 = 15.0;

/// Midtpunkt må være > SPIKE_RATIO × største nabo for å dempes.
pub const SPIKE_RATIO: f64 = 3.0;
/// Visningsskala for kumulative tråkk-/stegtall. Brukes likt på
/// enkeltpunkt- og bøttestien for begge sporter.
pub const COUNT_SCALE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Cycling,
    Running,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Cycling => "cycling",
            ActivityKind::Running => "running",
        }
    }

    pub fn default_config(self) -> SamplingConfig {
        match self {
            ActivityKind::Cycling => SamplingConfig::cycling(),
            ActivityKind::Running => SamplingConfig::running(),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cycling" | "ride" | "bike" => Ok(ActivityKind::Cycling),
            "running" | "run" => Ok(ActivityKind::Running),
            other => Err(ConfigError::UnknownActivity(other.to_string())),
        }
    }
}

/// Tallkonstanter for én sport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub max_samples: usize,
    pub speed_ceiling_kmh: f64,
    pub outlier_floor_kmh: f64,
    pub spike_ratio: f64,
    pub count_scale: f64,
}

impl SamplingConfig {
    pub fn cycling() -> Self {
        Self {
            max_samples: MAX_SAMPLES,
            speed_ceiling_kmh: CYCLING_SPEED_CEILING_KMH,
            outlier_floor_kmh: CYCLING_OUTLIER_FLOOR_KMH,
            spike_ratio: SPIKE_RATIO,
            count_scale: COUNT_SCALE,
        }
    }

    pub fn running() -> Self {
        Self {
            max_samples: MAX_SAMPLES,
            speed_ceiling_kmh: RUNNING_SPEED_CEILING_KMH,
            outlier_floor_kmh: RUNNING_OUTLIER_FLOOR_KMH,
            spike_ratio: SPIKE_RATIO,
            count_scale: COUNT_SCALE,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_samples == 0 {
            return Err(invalid("max_samples", "must be at least 1"));
        }
        if !(self.speed_ceiling_kmh.is_finite() && self.speed_ceiling_kmh > 0.0) {
            return Err(invalid("speed_ceiling_kmh", "must be finite and > 0"));
        }
        if !(self.outlier_floor_kmh.is_finite() && self.outlier_floor_kmh >= 0.0) {
            return Err(invalid("outlier_floor_kmh", "must be finite and >= 0"));
        }
        if !(self.spike_ratio.is_finite() && self.spike_ratio > 0.0) {
            return Err(invalid("spike_ratio", "must be finite and > 0"));
        }
        if !(self.count_scale.is_finite() && self.count_scale > 0.0) {
            return Err(invalid("count_scale", "must be finite and > 0"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.to_string() }
}

/// Delvis konfig fra JSON; manglende felt arver fra sportens preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, alias = "k", alias = "max_buckets")]
    pub max_samples: Option<usize>,
    #[serde(default, alias = "speed_ceiling")]
    pub speed_ceiling_kmh: Option<f64>,
    #[serde(default, alias = "outlier_floor")]
    pub outlier_floor_kmh: Option<f64>,
    #[serde(default)]
    pub spike_ratio: Option<f64>,
    #[serde(default)]
    pub count_scale: Option<f64>,
}

impl ConfigOverrides {
    pub fn apply(self, base: SamplingConfig) -> SamplingConfig {
        SamplingConfig {
            max_samples: self.max_samples.unwrap_or(base.max_samples),
            speed_ceiling_kmh: self.speed_ceiling_kmh.unwrap_or(base.speed_ceiling_kmh),
            outlier_floor_kmh: self.outlier_floor_kmh.unwrap_or(base.outlier_floor_kmh),
            spike_ratio: self.spike_ratio.unwrap_or(base.spike_ratio),
            count_scale: self.count_scale.unwrap_or(base.count_scale),
        }
    }
}
