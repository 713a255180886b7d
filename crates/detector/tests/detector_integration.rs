//! Integration tests for the detector crate

use detector::{
    Classification, DetectorConfig, DetectorError, Sample, StreamDetector, ZScoreDetector,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_values(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let base: f64 = rng.gen_range(-5.0..5.0);
            if rng.gen_bool(0.05) {
                base + rng.gen_range(30.0..80.0)
            } else {
                base
            }
        })
        .collect()
}

#[test]
fn test_scenario_spike_in_small_window() {
    let mut detector = ZScoreDetector::new(5, 3.0).unwrap();
    let mut last = None;
    for value in [10.0, 10.0, 10.0, 10.0, 10.0, 100.0] {
        last = Some(detector.observe_value(value).unwrap());
    }
    let last = last.unwrap();

    // window [10,10,10,10,100]: mean 28, population std 36
    assert_eq!(detector.window().to_vec(), vec![10.0, 10.0, 10.0, 10.0, 100.0]);
    assert!((last.stats.mean - 28.0).abs() < 1e-9);
    assert!((last.stats.std_dev - 36.0).abs() < 1e-9);
    assert!((last.z_score - 2.0).abs() < 1e-9);
    assert_eq!(last.classification, Classification::Normal);
}

#[test]
fn test_scenario_spike_in_large_window() {
    let mut detector = ZScoreDetector::new(20, 3.0).unwrap();
    for _ in 0..19 {
        let c = detector.observe_value(10.0).unwrap();
        assert_eq!(c.classification, Classification::Normal);
    }
    let spike = detector.observe_value(100.0).unwrap();

    assert!((spike.z_score - 19f64.sqrt()).abs() < 1e-9);
    assert_eq!(spike.classification, Classification::Anomaly);
}

#[test]
fn test_scenario_all_identical() {
    let mut detector = ZScoreDetector::new(5, 3.0).unwrap();
    for _ in 0..7 {
        let c = detector.observe_value(5.0).unwrap();
        assert_eq!(c.classification, Classification::Normal);
        assert_eq!(c.z_score, 0.0);
        assert_eq!(c.stats.std_dev, 0.0);
    }
}

#[test]
fn test_scenario_fifo_eviction() {
    let mut detector = ZScoreDetector::new(3, 3.0).unwrap();
    for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
        detector.observe_value(value).unwrap();
    }
    assert_eq!(detector.window().to_vec(), vec![3.0, 4.0, 5.0]);
}

#[test]
fn test_scenario_nan_leaves_window_unchanged() {
    let mut detector = ZScoreDetector::new(4, 3.0).unwrap();
    for value in [1.0, 2.0, 3.0] {
        detector.observe_value(value).unwrap();
    }
    let before = detector.window().to_vec();
    let stats_before = detector.peek_stats();

    let err = detector.observe(Sample::new(3, f64::NAN)).unwrap_err();
    assert!(matches!(err, DetectorError::InvalidSample { index: 3, .. }));
    assert!(err.is_per_sample());

    assert_eq!(detector.window().to_vec(), before);
    assert_eq!(detector.peek_stats(), stats_before);
    assert_eq!(detector.observed(), 3);
}

#[test]
fn test_infinities_are_rejected() {
    let mut detector = ZScoreDetector::default();
    for value in [f64::INFINITY, f64::NEG_INFINITY] {
        assert!(detector.observe_value(value).is_err());
    }
    assert!(detector.window().is_empty());
}

#[test]
fn test_window_holds_last_samples_in_arrival_order() {
    let values = random_values(7, 200);
    for window_size in [2, 5, 50] {
        for len in [1, window_size - 1, window_size, window_size + 1, 200] {
            let mut detector = ZScoreDetector::new(window_size, 3.0).unwrap();
            for &v in &values[..len] {
                detector.observe_value(v).unwrap();
            }
            let keep = len.min(window_size);
            assert_eq!(
                detector.window().to_vec(),
                values[len - keep..len].to_vec(),
                "window_size={} len={}",
                window_size,
                len
            );
        }
    }
}

#[test]
fn test_few_distinct_values_never_divide_by_zero() {
    let mut detector = ZScoreDetector::new(10, 0.5).unwrap();
    let c = detector.observe_value(-3.25).unwrap();
    assert_eq!(c.classification, Classification::Normal);
    assert!(c.z_score.is_finite());

    for _ in 0..20 {
        let c = detector.observe_value(0.1 + 0.2).unwrap();
        assert!(c.z_score.is_finite());
    }
    assert_eq!(detector.peek_stats().std_dev, 0.0);
}

#[test]
fn test_peek_stats_is_idempotent() {
    let mut detector = ZScoreDetector::new(8, 3.0).unwrap();
    for v in random_values(11, 30) {
        detector.observe_value(v).unwrap();
        let first = detector.peek_stats();
        let second = detector.peek_stats();
        assert_eq!(first, second);
    }
}

#[test]
fn test_threshold_monotonicity() {
    let values = random_values(42, 500);
    let thresholds = [0.5, 1.0, 2.0, 3.0, 4.0];

    let flagged: Vec<Vec<bool>> = thresholds
        .iter()
        .map(|&t| {
            let mut detector = ZScoreDetector::new(30, t).unwrap();
            values
                .iter()
                .map(|&v| detector.observe_value(v).unwrap().is_anomaly())
                .collect()
        })
        .collect();

    for pair in flagged.windows(2) {
        for (low, high) in pair[0].iter().zip(&pair[1]) {
            // anomaly at the higher threshold implies anomaly at the lower one
            assert!(!high || *low);
        }
    }
    assert!(flagged[0].iter().filter(|&&a| a).count() > flagged[4].iter().filter(|&&a| a).count());
}

#[test]
fn test_reclassify_with_raised_threshold() {
    let mut detector = ZScoreDetector::new(20, 3.0).unwrap();
    for _ in 0..19 {
        detector.observe_value(10.0).unwrap();
    }
    let spike = detector.observe_value(100.0).unwrap();
    assert!(spike.is_anomaly());
    assert_eq!(
        Classification::from_z_score(spike.z_score, 5.0),
        Classification::Normal
    );
}

#[test]
fn test_warm_up_scores_partial_window() {
    let mut detector = ZScoreDetector::new(50, 3.0).unwrap();
    assert!(detector.is_warming_up());

    let first = detector.observe_value(4.0).unwrap();
    assert_eq!(first.stats.count, 1);
    assert_eq!(first.classification, Classification::Normal);

    let second = detector.observe_value(8.0).unwrap();
    assert_eq!(second.stats.count, 2);
    assert!((second.stats.mean - 6.0).abs() < 1e-12);
    assert!((second.z_score - 1.0).abs() < 1e-12);

    for _ in 0..48 {
        detector.observe_value(6.0).unwrap();
    }
    assert!(!detector.is_warming_up());
    assert_eq!(detector.window().len(), 50);
}

#[test]
fn test_invalid_configuration() {
    let cases = [
        DetectorConfig::new(1, 3.0),
        DetectorConfig::new(0, 3.0),
        DetectorConfig::new(50, 0.0),
        DetectorConfig::new(50, -1.0),
        DetectorConfig::new(50, f64::NAN),
        DetectorConfig::new(50, f64::INFINITY),
    ];
    for config in cases {
        let err = ZScoreDetector::from_config(config).unwrap_err();
        assert!(matches!(err, DetectorError::InvalidConfiguration { .. }));
        assert!(!err.is_per_sample());
    }
}

#[test]
fn test_caller_index_is_preserved() {
    let mut detector = ZScoreDetector::default();
    let c = detector.observe(Sample::new(1_000, 3.5)).unwrap();
    assert_eq!(c.index(), 1_000);
    assert_eq!(c.value(), 3.5);
    assert_eq!(detector.threshold(), 3.0);
}

#[test]
fn test_values_near_f64_max_score_finitely() {
    let mut detector = ZScoreDetector::new(5, 3.0).unwrap();
    for value in [1e308, 1.5e308, 1e308, 1.2e308, -1.7e308, 1.7e308] {
        let c = detector.observe_value(value).unwrap();
        assert!(c.stats.mean.is_finite(), "mean for {value}: {:?}", c.stats);
        assert!(c.stats.std_dev.is_finite(), "std for {value}: {:?}", c.stats);
        assert!(c.z_score.is_finite(), "z for {value}: {}", c.z_score);
    }

    // ordinary values after the extremes have left the window
    for _ in 0..5 {
        detector.observe_value(1.0).unwrap();
    }
    assert_eq!(detector.peek_stats().mean, 1.0);
}
