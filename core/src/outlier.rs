// core/src/outlier.rs
use log::trace;

use crate::activity::Activity;
use crate::config::SamplingConfig;

/// Dempet verdi for indeks `i`, eller None hvis punktet ikke er en spike.
///
/// Spike: mid > gulv, største nabo > 0 og mid > ratio × største nabo.
/// Dempes til snittet av spiken og nabosnittet.
#[inline]
fn damped(left: f64, mid: f64, right: f64, cfg: &SamplingConfig) -> Option<f64> {
    let max_neighbor = left.max(right);
    if mid > cfg.outlier_floor_kmh && max_neighbor > 0.0 && mid > cfg.spike_ratio * max_neighbor {
        Some((mid + (left + right) / 2.0) / 2.0)
    } else {
        None
    }
}

/// Demper fartsspikes i en ren fartsserie (km/t).
///
/// Alle erstatninger regnes fra den opprinnelige serien, så en korrigert
/// verdi påvirker aldri naboens vurdering. Endepunktene røres ikke.
pub fn damp_speed_spikes(speeds: &[f64], cfg: &SamplingConfig) -> Vec<f64> {
    let mut out = speeds.to_vec();
    if speeds.len() < 3 {
        return out;
    }
    for (i, w) in speeds.windows(3).enumerate() {
        if let Some(v) = damped(w[0], w[1], w[2], cfg) {
            out[i + 1] = v;
        }
    }
    out
}

/// Samme demping direkte på aggregerte punkter. Kun `speed_avg` endres.
/// Returnerer antall dempede punkter.
pub fn correct_speed_outliers<A: Activity>(samples: &mut [A::Sample], cfg: &SamplingConfig) -> usize {
    if samples.len() < 3 {
        return 0;
    }
    let original: Vec<f64> = samples.iter().map(|s| A::base(s).speed_avg).collect();

    let mut damped_count = 0;
    for (i, w) in original.windows(3).enumerate() {
        if let Some(v) = damped(w[0], w[1], w[2], cfg) {
            trace!(
                "{}: damped speed spike at bucket {} ({:.1} -> {:.1} km/h)",
                A::KIND,
                i + 1,
                w[1],
                v
            );
            A::base_mut(&mut samples[i + 1]).speed_avg = v;
            damped_count += 1;
        }
    }
    damped_count
}
