// core/src/aggregate.rs
use ordered_float::OrderedFloat;

use crate::config::{SamplingConfig, MIN_SPAN_S, MS_TO_KMH};
use crate::geo::path_distance_m;
use crate::models::{SampleBase, TrackFix};

/// Aritmetisk snitt. None for tom input.
pub fn mean<I>(xs: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut cnt = 0usize;
    for x in xs {
        sum += x;
        cnt += 1;
    }
    if cnt == 0 { None } else { Some(sum / cnt as f64) }
}

/// Snitt over punktene som faktisk har verdien. Mangler alle => None (ikke 0).
pub fn mean_present<I>(xs: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    mean(xs.into_iter().flatten())
}

/// Snitt av kumulative tellere, skalert til visningsenhet.
pub fn scaled_count_mean<I>(xs: I, scale: f64) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    mean_present(xs).map(|m| m * scale)
}

/// (min, max) puls; (None, None) hvis ingen punkt har puls.
pub fn heart_rate_range<'a, I>(fixes: I) -> (Option<f64>, Option<f64>)
where
    I: IntoIterator<Item = &'a TrackFix>,
{
    let mut lo: Option<OrderedFloat<f64>> = None;
    let mut hi: Option<OrderedFloat<f64>> = None;
    for hr in fixes.into_iter().filter_map(|f| f.heart_rate).map(OrderedFloat) {
        lo = Some(lo.map_or(hr, |l| l.min(hr)));
        hi = Some(hi.map_or(hr, |h| h.max(hr)));
    }
    (lo.map(|v| v.into_inner()), hi.map(|v| v.into_inner()))
}

/// Momentanfart fra sensor, m/s -> km/t, negativ støy klemmes til 0.
#[inline]
pub fn point_speed_kmh(speed_ms: f64, ceiling_kmh: f64) -> f64 {
    (speed_ms * MS_TO_KMH).max(0.0).min(ceiling_kmh)
}

/// Bøttefart (km/t).
///
/// Ett punkt: sensorens fart. Flere punkt: haversine-avstand over alle
/// påfølgende par delt på tidsspennet (min. MIN_SPAN_S). Begge kappes ved
/// sportens tak, som fanger GPS-hopp inne i bøtta.
///
/// NB: enkeltpunktet kappes også, altså `min(max(v * 3.6, 0), tak)` og ikke
/// bare `max(v * 3.6, 0)`. Bevisst: én-punkt-stien skal gi samme serie som
/// bøttestien, og ingen fart før outlier-dempingen skal ligge over taket.
pub fn bucket_speed_kmh(fixes: &[&TrackFix], ceiling_kmh: f64) -> f64 {
    match fixes {
        [] => 0.0,
        [only] => point_speed_kmh(only.speed, ceiling_kmh),
        [first, .., last] => {
            let dist = path_distance_m(fixes.iter().copied());
            let span = (last.timestamp - first.timestamp).max(MIN_SPAN_S);
            (dist / span * MS_TO_KMH).max(0.0).min(ceiling_kmh)
        }
    }
}

/// Felles felt for én bøtte. Tom bøtte => `SampleBase::default()`.
pub fn summarize_fixes(fixes: &[&TrackFix], cfg: &SamplingConfig) -> SampleBase {
    if fixes.is_empty() {
        return SampleBase::default();
    }

    let (t_min, t_max) = fixes.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), f| {
        (lo.min(f.timestamp), hi.max(f.timestamp))
    });
    let (hr_min, hr_max) = heart_rate_range(fixes.iter().copied());

    SampleBase {
        timestamp_min: t_min,
        timestamp_max: t_max,
        speed_avg: bucket_speed_kmh(fixes, cfg.speed_ceiling_kmh),
        altitude_avg: mean(fixes.iter().map(|f| f.altitude)).unwrap_or(0.0),
        heart_rate_min: hr_min,
        heart_rate_max: hr_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_present_skips_missing() {
        assert_eq!(mean_present([Some(100.0), None, Some(200.0)]), Some(150.0));
        assert_eq!(mean_present([None, None]), None);
    }

    #[test]
    fn negative_sensor_speed_clamps_to_zero() {
        assert_eq!(point_speed_kmh(-1.5, 100.0), 0.0);
        assert!((point_speed_kmh(10.0, 100.0) - 36.0).abs() < 1e-12);
    }

    #[test]
    fn simultaneous_timestamps_do_not_divide_by_zero() {
        let a = TrackFix { timestamp: 5.0, latitude: 59.0, longitude: 10.0, ..Default::default() };
        let b = TrackFix { timestamp: 5.0, latitude: 59.001, longitude: 10.0, ..Default::default() };
        let v = bucket_speed_kmh(&[&a, &b], 100.0);
        assert!(v.is_finite());
        assert_eq!(v, 100.0); // GPS-hopp kappes
    }
}
