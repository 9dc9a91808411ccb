use serde::{Deserialize, Serialize};

/// Felles rådata for ett GPS/IMU-punkt, uavhengig av sport.
///
/// `speed` kan være negativ pga. sensorstøy; den klemmes til 0 ved
/// konvertering til km/t, aldri her.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackFix {
    pub timestamp: f64,          // sek, felles epoke for økten
    pub latitude: f64,           // grader
    pub longitude: f64,          // grader
    pub altitude: f64,           // meter
    pub speed: f64,              // m/s
    pub heart_rate: Option<f64>, // bpm, None uten pulsbelte
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CyclingPoint {
    #[serde(flatten)]
    pub fix: TrackFix,
    pub power: Option<f64>,       // watt
    pub cadence: Option<f64>,     // rpm
    pub pedal_count: Option<f64>, // kumulativt estimat
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunningPoint {
    #[serde(flatten)]
    pub fix: TrackFix,
    pub power: Option<f64>,
    pub cadence: Option<f64>,               // steg/min
    pub vertical_oscillation: Option<f64>,
    pub ground_contact_time: Option<f64>,   // "touchdown"-tid
    pub stride_length: Option<f64>,
    pub step_count: Option<f64>,            // kumulativt estimat
}

/// Felles del av et aggregert punkt.
///
/// Tom bøtte => alle tall 0.0 og alle valgfrie felt None, slik at serien
/// beholder fast lengde for grafen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleBase {
    pub timestamp_min: f64,
    pub timestamp_max: f64,
    pub speed_avg: f64, // km/t, aldri negativ
    pub altitude_avg: f64,
    pub heart_rate_min: Option<f64>,
    pub heart_rate_max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CyclingSample {
    #[serde(flatten)]
    pub base: SampleBase,
    pub power_avg: Option<f64>,
    pub cadence_avg: Option<f64>,
    pub pedal_count_avg: Option<f64>, // skalert med COUNT_SCALE
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunningSample {
    #[serde(flatten)]
    pub base: SampleBase,
    pub power_avg: Option<f64>,
    pub cadence_avg: Option<f64>,
    pub vertical_oscillation_avg: Option<f64>,
    pub ground_contact_time_avg: Option<f64>,
    pub stride_length_avg: Option<f64>,
    pub step_count_avg: Option<f64>, // skalert med COUNT_SCALE
}
