// core/src/geo.rs
use crate::models::TrackFix;

/// Jordradius (m) brukt av haversine.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Storsirkelavstand (haversine) i meter mellom to koordinater i grader.
///
/// Symmetrisk og eksakt 0 for like punkter. Haversine-leddet klemmes til
/// [0, 1] slik at antipodale punkter ikke gir NaN via sqrt(1 - a).
/// NaN/Inf i input propageres uendret.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Avstand mellom to fixes.
#[inline]
pub fn fix_distance_m(a: &TrackFix, b: &TrackFix) -> f64 {
    haversine_m(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Summert avstand over alle påfølgende par. 0.0 for < 2 punkter.
pub fn path_distance_m<'a, I>(fixes: I) -> f64
where
    I: IntoIterator<Item = &'a TrackFix>,
{
    let mut total = 0.0;
    let mut prev: Option<&TrackFix> = None;
    for f in fixes {
        if let Some(p) = prev {
            total += fix_distance_m(p, f);
        }
        prev = Some(f);
    }
    total
}
