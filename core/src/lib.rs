//! Nedsampling og fartskorrigering av løypetelemetri fra sykkel- og løpekonkurranser.
//!
//! En ferdig registrert, tidsordnet punktserie reduseres til maks 80 aggregerte
//! punkter (tidsbøtter), og isolerte fartsspikes dempes mot naboene.

pub mod activity;
pub mod aggregate;
pub mod api;
pub mod bucket;
pub mod config;
pub mod error;
pub mod geo;
pub mod metrics;
pub mod models;
pub mod outlier;
pub mod sampler;
pub mod storage;

#[cfg(feature = "python")]
mod py;

pub use activity::{Activity, Cycling, Running};
pub use api::{downsample_json, downsample_json_observed};
pub use config::{ActivityKind, ConfigOverrides, SamplingConfig};
pub use error::{ApiError, ConfigError};
pub use geo::{haversine_m, path_distance_m};
pub use metrics::Metrics;
pub use models::{
    CyclingPoint, CyclingSample, RunningPoint, RunningSample, SampleBase, TrackFix,
};
pub use outlier::{correct_speed_outliers, damp_speed_spikes};
pub use sampler::{
    downsample, downsample_cycling, downsample_observed, downsample_running,
    downsample_with_report, SampleReport,
};
pub use storage::{load_config, save_config};
