// core/src/metrics.rs
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::config::ActivityKind;
use crate::sampler::SampleReport;

/// Prometheus-tellere for nedsampling, merket med sport.
///
/// Sendes eksplisitt inn der de skal brukes; motoren selv har ingen global tilstand.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    runs_total: IntCounterVec,
    raw_points_total: IntCounterVec,
    empty_buckets_total: IntCounterVec,
    damped_spikes_total: IntCounterVec,
}

fn counter(registry: &Registry, name: &str, help: &str) -> prometheus::Result<IntCounterVec> {
    let c = IntCounterVec::new(Opts::new(name, help).namespace("pathsample"), &["activity"])?;
    registry.register(Box::new(c.clone()))?;
    Ok(c)
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        Ok(Self {
            runs_total: counter(&registry, "runs_total", "Downsampling runs")?,
            raw_points_total: counter(&registry, "raw_points_total", "Raw points consumed")?,
            empty_buckets_total: counter(&registry, "empty_buckets_total", "Buckets without raw points")?,
            damped_spikes_total: counter(&registry, "damped_spikes_total", "Speed spikes damped")?,
            registry,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record(&self, kind: ActivityKind, report: &SampleReport) {
        let label = [kind.as_str()];
        self.runs_total.with_label_values(&label).inc();
        self.raw_points_total.with_label_values(&label).inc_by(report.raw_points as u64);
        self.empty_buckets_total.with_label_values(&label).inc_by(report.empty_buckets as u64);
        self.damped_spikes_total.with_label_values(&label).inc_by(report.damped_spikes as u64);
    }

    pub fn runs(&self, kind: ActivityKind) -> u64 {
        self.runs_total.with_label_values(&[kind.as_str()]).get()
    }

    pub fn damped_spikes(&self, kind: ActivityKind) -> u64 {
        self.damped_spikes_total.with_label_values(&[kind.as_str()]).get()
    }

    /// Prometheus tekstformat.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Prosessglobal instans for Python-bindingen.
pub static DEFAULT_METRICS: Lazy<Metrics> =
    Lazy::new(|| Metrics::new().expect("static metric definitions are valid"));
