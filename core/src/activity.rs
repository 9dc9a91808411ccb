// core/src/activity.rs
use crate::aggregate::{mean_present, scaled_count_mean, summarize_fixes};
use crate::config::{ActivityKind, SamplingConfig};
use crate::models::{
    CyclingPoint, CyclingSample, RunningPoint, RunningSample, SampleBase, TrackFix,
};

/// Sportsspesifikk del av pipelinen: hvilke felt som hentes fra et rådatapunkt
/// og hvordan en bøtte reduseres. Bøtting og outlier-demping er felles.
pub trait Activity {
    type Point;
    type Sample: Clone + Default;

    const KIND: ActivityKind;

    fn fix(point: &Self::Point) -> &TrackFix;
    fn base(sample: &Self::Sample) -> &SampleBase;
    fn base_mut(sample: &mut Self::Sample) -> &mut SampleBase;

    /// Reduserer én bøtte (kan være tom) til ett punkt.
    fn aggregate(bucket: &[Self::Point], cfg: &SamplingConfig) -> Self::Sample;

    fn default_config() -> SamplingConfig {
        Self::KIND.default_config()
    }
}

fn fixes_of<A: Activity>(bucket: &[A::Point]) -> Vec<&TrackFix> {
    bucket.iter().map(A::fix).collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cycling;

impl Activity for Cycling {
    type Point = CyclingPoint;
    type Sample = CyclingSample;

    const KIND: ActivityKind = ActivityKind::Cycling;

    fn fix(point: &CyclingPoint) -> &TrackFix {
        &point.fix
    }

    fn base(sample: &CyclingSample) -> &SampleBase {
        &sample.base
    }

    fn base_mut(sample: &mut CyclingSample) -> &mut SampleBase {
        &mut sample.base
    }

    fn aggregate(bucket: &[CyclingPoint], cfg: &SamplingConfig) -> CyclingSample {
        if bucket.is_empty() {
            return CyclingSample::default();
        }
        CyclingSample {
            base: summarize_fixes(&fixes_of::<Self>(bucket), cfg),
            power_avg: mean_present(bucket.iter().map(|p| p.power)),
            cadence_avg: mean_present(bucket.iter().map(|p| p.cadence)),
            pedal_count_avg: scaled_count_mean(bucket.iter().map(|p| p.pedal_count), cfg.count_scale),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Running;

impl Activity for Running {
    type Point = RunningPoint;
    type Sample = RunningSample;

    const KIND: ActivityKind = ActivityKind::Running;

    fn fix(point: &RunningPoint) -> &TrackFix {
        &point.fix
    }

    fn base(sample: &RunningSample) -> &SampleBase {
        &sample.base
    }

    fn base_mut(sample: &mut RunningSample) -> &mut SampleBase {
        &mut sample.base
    }

    fn aggregate(bucket: &[RunningPoint], cfg: &SamplingConfig) -> RunningSample {
        if bucket.is_empty() {
            return RunningSample::default();
        }
        RunningSample {
            base: summarize_fixes(&fixes_of::<Self>(bucket), cfg),
            power_avg: mean_present(bucket.iter().map(|p| p.power)),
            cadence_avg: mean_present(bucket.iter().map(|p| p.cadence)),
            vertical_oscillation_avg: mean_present(bucket.iter().map(|p| p.vertical_oscillation)),
            ground_contact_time_avg: mean_present(bucket.iter().map(|p| p.ground_contact_time)),
            stride_length_avg: mean_present(bucket.iter().map(|p| p.stride_length)),
            step_count_avg: scaled_count_mean(bucket.iter().map(|p| p.step_count), cfg.count_scale),
        }
    }
}
