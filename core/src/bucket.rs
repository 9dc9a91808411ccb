// core/src/bucket.rs
use std::ops::Range;

/// Bøtteindeks for tidsstempel `t` med lik bøttebredde `width`.
///
/// Klemmes til `k - 1` slik at siste punkt havner i siste bøtte selv med
/// avrundingsfeil. Null bredde (alle tidsstempler like) => bøtte 0.
#[inline]
pub fn bucket_index(t: f64, t_min: f64, width: f64, k: usize) -> usize {
    if width > 0.0 {
        let idx = ((t - t_min) / width).floor();
        (idx.max(0.0) as usize).min(k - 1)
    } else {
        0
    }
}

/// Deler en tidsordnet serie i nøyaktig `k` like brede tidsbøtter.
///
/// Forutsetter ikke-synkende tidsstempler (oppstrøms ansvar); da er hver
/// bøtte et sammenhengende indeksområde. Tomme bøtter gir tomme områder.
/// `k == 0` eller tom input => tom vektor.
pub fn bucket_ranges(timestamps: &[f64], k: usize) -> Vec<Range<usize>> {
    if k == 0 || timestamps.is_empty() {
        return Vec::new();
    }
    let t_min = timestamps[0];
    let t_max = timestamps[timestamps.len() - 1];
    let width = (t_max - t_min) / k as f64;

    let mut ranges = vec![0..0; k];
    for (i, &t) in timestamps.iter().enumerate() {
        let b = bucket_index(t, t_min, width, k);
        let r = &mut ranges[b];
        if r.start == r.end {
            *r = i..i + 1;
        } else {
            r.end = i + 1;
        }
    }
    ranges
}
