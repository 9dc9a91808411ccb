use pathsample_core::config::{CYCLING_SPEED_CEILING_KMH, MAX_SAMPLES};
use pathsample_core::{
    downsample, downsample_cycling, downsample_with_report, Cycling, CyclingPoint, SamplingConfig,
    TrackFix,
};

const M_PER_DEG_LAT: f64 = 111_194.926_644_558_73;

/// Rett nordover med konstant fart, `n` punkter med `dt` sekunders mellomrom.
fn ride(n: usize, dt: f64, v_ms: f64) -> Vec<CyclingPoint> {
    (0..n)
        .map(|i| {
            let t = i as f64 * dt;
            CyclingPoint {
                fix: TrackFix {
                    timestamp: t,
                    latitude: 59.0 + v_ms * t / M_PER_DEG_LAT,
                    longitude: 10.0,
                    altitude: 100.0 + i as f64,
                    speed: v_ms,
                    heart_rate: Some(140.0 + (i % 10) as f64),
                },
                power: Some(250.0),
                cadence: Some(90.0),
                pedal_count: Some(i as f64 * 1.5),
            }
        })
        .collect()
}

fn mean_speed(samples: &[pathsample_core::CyclingSample]) -> f64 {
    samples.iter().map(|s| s.base.speed_avg).sum::<f64>() / samples.len() as f64
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(downsample_cycling(&[]).is_empty());
}

#[test]
fn output_length_is_min_of_input_and_80() {
    for n in [1usize, 2, 3, 79, 80, 81, 160, 1000] {
        let out = downsample_cycling(&ride(n, 1.0, 6.0));
        assert_eq!(out.len(), n.min(MAX_SAMPLES), "n={n}");
    }
}

#[test]
fn single_point_uses_sensor_speed_and_own_timestamp() {
    let mut pts = ride(1, 1.0, 5.0);
    pts[0].fix.timestamp = 42.0;
    let out = downsample_cycling(&pts);
    assert_eq!(out.len(), 1);
    let s = &out[0].base;
    assert!((s.speed_avg - 18.0).abs() < 1e-9);
    assert_eq!(s.timestamp_min, 42.0);
    assert_eq!(s.timestamp_max, 42.0);
    assert_eq!(s.heart_rate_min, Some(140.0));
    assert_eq!(s.heart_rate_max, Some(140.0));
}

#[test]
fn negative_sensor_speed_becomes_zero() {
    let mut pts = ride(1, 1.0, 0.0);
    pts[0].fix.speed = -0.7;
    let out = downsample_cycling(&pts);
    assert_eq!(out[0].base.speed_avg, 0.0);
}

#[test]
fn single_point_over_ceiling_is_capped() {
    // 50 m/s = 180 km/t; én-punkt-stien kappes som bøttestien
    let mut pts = ride(1, 1.0, 0.0);
    pts[0].fix.speed = 50.0;
    let out = downsample_cycling(&pts);
    assert_eq!(out[0].base.speed_avg, CYCLING_SPEED_CEILING_KMH);
}

#[test]
fn speeds_are_non_negative_and_capped() {
    // 200 punkter, men et GPS-hopp på 2 km midt i serien
    let mut pts = ride(200, 1.0, 9.0);
    pts[100].fix.latitude += 2_000.0 / M_PER_DEG_LAT;
    for (i, p) in pts.iter_mut().enumerate() {
        if i % 13 == 0 {
            p.fix.speed = -1.0;
        }
    }
    let out = downsample_cycling(&pts);
    assert_eq!(out.len(), 80);
    for s in &out {
        assert!(s.base.speed_avg >= 0.0);
        assert!(s.base.speed_avg <= CYCLING_SPEED_CEILING_KMH);
    }
}

#[test]
fn bucketed_series_reports_constant_speed() {
    let out = downsample_cycling(&ride(400, 1.0, 8.0));
    for s in &out {
        assert!((s.base.speed_avg - 28.8).abs() < 1e-3, "speed={}", s.base.speed_avg);
    }
}

#[test]
fn denser_sampling_keeps_average_speed() {
    let base = mean_speed(&downsample_cycling(&ride(80, 1.0, 5.0)));
    assert!((base - 18.0).abs() < 1e-9);

    for (n, dt) in [(81usize, 1.0), (160, 0.5), (400, 0.2), (801, 0.1)] {
        let avg = mean_speed(&downsample_cycling(&ride(n, dt, 5.0)));
        assert!((avg - base).abs() < 0.1, "n={n}, dt={dt}: {avg} vs {base}");
    }
}

#[test]
fn bucket_aggregates_fields() {
    let out = downsample_cycling(&ride(240, 1.0, 6.0));
    // bredde = 239/80 ≈ 2.99 s => første bøtte er t=0,1,2
    let first = &out[0];
    assert_eq!(first.base.timestamp_min, 0.0);
    assert_eq!(first.base.timestamp_max, 2.0);
    assert!((first.base.altitude_avg - 101.0).abs() < 1e-9);
    assert_eq!(first.base.heart_rate_min, Some(140.0));
    assert_eq!(first.base.heart_rate_max, Some(142.0));
    assert_eq!(first.power_avg, Some(250.0));
    assert_eq!(first.cadence_avg, Some(90.0));
    // snitt av 0, 1.5, 3.0 = 1.5, skalert ×20
    assert!((first.pedal_count_avg.unwrap() - 30.0).abs() < 1e-9);
}

#[test]
fn pedal_count_scale_matches_on_both_paths() {
    // én-punkt-sti
    let small = downsample_cycling(&ride(3, 1.0, 6.0));
    assert!((small[2].pedal_count_avg.unwrap() - 3.0 * 20.0).abs() < 1e-9);

    // bøttesti: siste bøtte inneholder siste punkt(er)
    let pts = ride(81, 1.0, 6.0);
    let big = downsample_cycling(&pts);
    let last = big.last().unwrap();
    let expected = (79.0 * 1.5 + 80.0 * 1.5) / 2.0 * 20.0;
    assert!((last.pedal_count_avg.unwrap() - expected).abs() < 1e-9);
}

#[test]
fn missing_sensors_stay_absent() {
    let mut pts = ride(160, 1.0, 6.0);
    for p in pts.iter_mut() {
        p.fix.heart_rate = None;
        p.cadence = None;
        p.pedal_count = None;
    }
    // kraft bare på annethvert punkt
    for (i, p) in pts.iter_mut().enumerate() {
        p.power = if i % 2 == 0 { Some(300.0) } else { None };
    }
    for s in downsample_cycling(&pts) {
        assert_eq!(s.base.heart_rate_min, None);
        assert_eq!(s.base.heart_rate_max, None);
        assert_eq!(s.cadence_avg, None);
        assert_eq!(s.pedal_count_avg, None);
        assert_eq!(s.power_avg, Some(300.0)); // ikke trukket ned av manglende verdier
    }
}

#[test]
fn empty_buckets_are_zero_filled() {
    let mut pts = ride(100, 0.01, 3.0);
    let mut tail = ride(1, 1.0, 3.0);
    tail[0].fix.timestamp = 80.0;
    pts.extend(tail);

    let (out, report) = downsample_with_report::<Cycling>(&pts, &SamplingConfig::cycling());
    assert_eq!(out.len(), 80);
    assert!(report.bucketed);
    assert_eq!(report.empty_buckets, 78);

    let hole = &out[40];
    assert_eq!(hole.base.speed_avg, 0.0);
    assert_eq!(hole.base.altitude_avg, 0.0);
    assert_eq!(hole.base.timestamp_min, 0.0);
    assert_eq!(hole.base.timestamp_max, 0.0);
    assert_eq!(hole.base.heart_rate_min, None);
    assert_eq!(hole.power_avg, None);
    assert_eq!(hole.pedal_count_avg, None);

    assert_eq!(out[0].base.timestamp_max, 0.99);
    assert_eq!(out[79].base.timestamp_min, 80.0);
}

#[test]
fn custom_bucket_count_is_respected() {
    let cfg = SamplingConfig { max_samples: 10, ..SamplingConfig::cycling() };
    let out = downsample::<Cycling>(&ride(55, 1.0, 6.0), &cfg);
    assert_eq!(out.len(), 10);
}

#[test]
fn report_counts_distance() {
    let pts = ride(300, 1.0, 7.0);
    let (_, report) = downsample_with_report::<Cycling>(&pts, &SamplingConfig::cycling());
    assert_eq!(report.raw_points, 300);
    assert_eq!(report.samples, 80);
    assert_eq!(report.damped_spikes, 0);
    assert!((report.path_distance_m - 299.0 * 7.0).abs() < 0.01);
}
