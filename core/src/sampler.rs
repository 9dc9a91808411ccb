// core/src/sampler.rs
//! Nedsampling av en ferdig registrert løype: bøtting -> aggregering -> outlier-demping.
//!
//! Forutsetning (ikke validert her): punktene er sortert på ikke-synkende
//! tidsstempel og alle tall er endelige. Innsamleren oppstrøms eier dette.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, Cycling, Running};
use crate::bucket::bucket_ranges;
use crate::config::{ActivityKind, SamplingConfig};
use crate::geo::path_distance_m;
use crate::metrics::Metrics;
use crate::models::{CyclingPoint, CyclingSample, RunningPoint, RunningSample};
use crate::outlier::correct_speed_outliers;

/// Oppsummering av én kjøring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleReport {
    pub activity: ActivityKind,
    pub raw_points: usize,
    pub samples: usize,
    /// true når input var større enn maks og ble bøttet på tid
    pub bucketed: bool,
    pub empty_buckets: usize,
    pub damped_spikes: usize,
    pub path_distance_m: f64,
}

pub fn downsample<A: Activity>(points: &[A::Point], cfg: &SamplingConfig) -> Vec<A::Sample> {
    downsample_with_report::<A>(points, cfg).0
}

pub fn downsample_with_report<A: Activity>(
    points: &[A::Point],
    cfg: &SamplingConfig,
) -> (Vec<A::Sample>, SampleReport) {
    let mut report = SampleReport {
        activity: A::KIND,
        raw_points: points.len(),
        samples: 0,
        bucketed: false,
        empty_buckets: 0,
        damped_spikes: 0,
        path_distance_m: 0.0,
    };
    if points.is_empty() {
        return (Vec::new(), report);
    }

    let k = cfg.max_samples;
    let mut samples: Vec<A::Sample> = if points.len() <= k {
        // én-punkts bøtter; samme formler som den generelle stien
        points.chunks(1).map(|one| A::aggregate(one, cfg)).collect()
    } else {
        let timestamps: Vec<f64> = points.iter().map(|p| A::fix(p).timestamp).collect();
        let ranges = bucket_ranges(&timestamps, k);
        report.bucketed = true;
        report.empty_buckets = ranges.iter().filter(|r| r.is_empty()).count();
        ranges.into_iter().map(|r| A::aggregate(&points[r], cfg)).collect()
    };

    report.damped_spikes = correct_speed_outliers::<A>(&mut samples, cfg);
    report.samples = samples.len();
    report.path_distance_m = path_distance_m(points.iter().map(A::fix));

    debug!(
        "{}: {} raw points -> {} samples (bucketed={}, empty={}, damped={}, {:.0} m)",
        A::KIND,
        report.raw_points,
        report.samples,
        report.bucketed,
        report.empty_buckets,
        report.damped_spikes,
        report.path_distance_m
    );

    (samples, report)
}

/// Som `downsample`, men teller opp `metrics`.
pub fn downsample_observed<A: Activity>(
    points: &[A::Point],
    cfg: &SamplingConfig,
    metrics: &Metrics,
) -> Vec<A::Sample> {
    let (samples, report) = downsample_with_report::<A>(points, cfg);
    metrics.record(A::KIND, &report);
    samples
}

/// Sykkel med standardkonstanter (80 punkt, tak 100 km/t, gulv 50 km/t).
pub fn downsample_cycling(points: &[CyclingPoint]) -> Vec<CyclingSample> {
    downsample::<Cycling>(points, &Cycling::default_config())
}

/// Løping med standardkonstanter (80 punkt, tak 36 km/t, gulv 15 km/t).
pub fn downsample_running(points: &[RunningPoint]) -> Vec<RunningSample> {
    downsample::<Running>(points, &Running::default_config())
}
