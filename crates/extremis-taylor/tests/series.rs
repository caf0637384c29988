//! Integration tests for the truncated exponential, the series holder, the
//! Euler constant and `SeriesConfig`.

use std::f64::consts::PI;

use extremis_taylor::config::SeriesConfig;
use extremis_taylor::constants::{euler_number, factorials};
use extremis_taylor::math::{identity, SquareMatrix};
use extremis_taylor::series::rotation_generator;
use extremis_taylor::{compute, MatrixError, TaylorSeries};

fn close(a: &SquareMatrix<f64>, b: &SquareMatrix<f64>, tol: f64) -> bool {
    a.size() == b.size()
        && a.as_slice()
            .iter()
            .zip(b.as_slice())
            .all(|(x, y)| (x - y).abs() <= tol)
}

// ---------------------------------------------------------------------------
// compute
// ---------------------------------------------------------------------------

#[test]
fn order_zero_is_identity() {
    let m = SquareMatrix::from_rows(vec![vec![3.0, -1.0, 2.0], vec![0.5, 9.0, 1.0], vec![4.0, 4.0, 4.0]])
        .unwrap();
    assert_eq!(compute(&m, 0).unwrap(), identity(3));
}

#[test]
fn nilpotent_series_terminates_exactly() {
    let m = SquareMatrix::from_rows(vec![vec![0.0, 1.0], vec![0.0, 0.0]]).unwrap();
    let expected = SquareMatrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
    for order in 1..=20 {
        assert_eq!(compute(&m, order).unwrap(), expected, "order {}", order);
    }
}

#[test]
fn diagonal_matrix_approaches_scalar_exponential() {
    let m = SquareMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, -2.0]]).unwrap();
    let approx = compute(&m, 25).unwrap();
    assert!((approx[(0, 0)] - 1f64.exp()).abs() < 1e-12);
    assert!((approx[(1, 1)] - (-2f64).exp()).abs() < 1e-12);
    assert_eq!(approx[(0, 1)], 0.0);
}

#[test]
fn rotation_generator_exponentiates_to_rotation() {
    // exp of the generator by θ is the rotation by θ; at θ = π that is -I
    let m = rotation_generator(2, PI);
    let approx = compute(&m, 40).unwrap();
    let minus_identity = SquareMatrix::from_rows(vec![vec![-1.0, 0.0], vec![0.0, -1.0]]).unwrap();
    assert!(close(&approx, &minus_identity, 1e-9));
}

#[test]
fn high_orders_stay_finite_then_report_overflow() {
    let m = SquareMatrix::from_rows(vec![vec![0.5]]).unwrap();
    let approx = compute(&m, 170).unwrap();
    assert!((approx[(0, 0)] - 0.5f64.exp()).abs() < 1e-12);
    assert_eq!(
        compute(&m, 171).unwrap_err(),
        MatrixError::NumericOverflow { order: 171 }
    );
}

#[test]
fn exploding_powers_report_overflow() {
    let m = SquareMatrix::from_rows(vec![vec![1e200, 0.0], vec![0.0, 1.0]]).unwrap();
    assert_eq!(
        compute(&m, 3).unwrap_err(),
        MatrixError::NumericOverflow { order: 2 }
    );
}

// ---------------------------------------------------------------------------
// TaylorSeries state
// ---------------------------------------------------------------------------

#[test]
fn default_series_is_rotation_seed_at_order_two() {
    let series = TaylorSeries::default();
    assert_eq!(series.size(), 2);
    assert_eq!(series.order(), 2);
    assert_eq!(series.matrix()[(0, 1)], PI);
    assert_eq!(series.matrix()[(1, 0)], -PI);

    // I + M + M²/2 with M² = -π² I
    let diag = 1.0 - PI * PI / 2.0;
    let expected = SquareMatrix::from_rows(vec![vec![diag, PI], vec![-PI, diag]]).unwrap();
    assert!(close(series.approximation(), &expected, 1e-12));
}

#[test]
fn set_order_recomputes() {
    let mut series = TaylorSeries::default();
    let approx = series.set_order(0).unwrap().clone();
    assert_eq!(approx, identity(2));
    assert_eq!(series.order(), 0);
    assert_eq!(series.approximation(), &approx);
}

#[test]
fn set_size_reseeds_with_zeros() {
    let mut series = TaylorSeries::default();
    series.set_size(3);
    assert_eq!(series.size(), 3);
    assert_eq!(series.matrix(), &SquareMatrix::zeros(3));
    assert_eq!(series.approximation(), &SquareMatrix::zeros(3));

    series.set_size(0);
    assert_eq!(series.size(), 1);
}

#[test]
fn with_size_clamps_zero() {
    let series = TaylorSeries::with_size(0);
    assert_eq!(series.size(), 1);
    assert_eq!(series.approximation(), &SquareMatrix::zeros(1));
}

#[test]
fn set_cell_edits_base_until_recompute() {
    let mut series = TaylorSeries::with_size(2);
    series.set_order(3).unwrap();
    series.set_cell(0, 1, 1.0).unwrap();
    assert_eq!(series.matrix()[(0, 1)], 1.0);
    assert_eq!(series.approximation(), &identity(2));

    let approx = series.recompute().unwrap();
    assert_eq!(approx[(0, 1)], 1.0);

    assert!(series.set_cell(2, 0, 1.0).is_err());
}

#[test]
fn set_matrix_replaces_base_and_approximation() {
    let mut series = TaylorSeries::default();
    let m = SquareMatrix::from_rows(vec![vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0], vec![0.0, 0.0, 0.0]])
        .unwrap();
    let approx = series.set_matrix(m.clone()).unwrap().clone();
    assert_eq!(approx.to_rows(), vec![vec![1.0, 1.0, 0.5], vec![0.0, 1.0, 1.0], vec![0.0, 0.0, 1.0]]);
    assert_eq!(series.matrix(), &m);
    assert_eq!(series.size(), 3);
}

#[test]
fn failed_recompute_keeps_previous_state() {
    let mut series = TaylorSeries::default();
    let before = series.clone();
    assert!(series.set_order(500).is_err());
    assert_eq!(series, before);

    let huge = SquareMatrix::from_rows(vec![vec![1e300, 0.0], vec![0.0, 1e300]]).unwrap();
    assert!(series.set_matrix(huge).is_err());
    assert_eq!(series, before);
}

#[test]
fn empty_base_matrix_is_rejected() {
    assert_eq!(
        TaylorSeries::new(SquareMatrix::zeros(0), 2).unwrap_err(),
        MatrixError::InvalidShape { size: 0, len: 0 }
    );

    let mut series = TaylorSeries::default();
    let before = series.clone();
    assert_eq!(
        series.set_matrix(SquareMatrix::zeros(0)).unwrap_err(),
        MatrixError::InvalidShape { size: 0, len: 0 }
    );
    assert_eq!(series, before);
}

// ---------------------------------------------------------------------------
// Euler constant
// ---------------------------------------------------------------------------

#[test]
fn factorials_stop_before_overflow() {
    let all: Vec<u64> = factorials().collect();
    assert_eq!(all.len(), 21);
    assert_eq!(&all[..6], &[1, 1, 2, 6, 24, 120]);
    assert_eq!(all[20], 2_432_902_008_176_640_000);
}

#[test]
fn euler_number_matches_std() {
    assert!((euler_number() - std::f64::consts::E).abs() < 1e-14);
}

// ---------------------------------------------------------------------------
// SeriesConfig
// ---------------------------------------------------------------------------

#[test]
fn series_config_default_builds_default_series() {
    let series = SeriesConfig::default().build().unwrap();
    assert_eq!(series, TaylorSeries::default());
}

#[test]
fn series_config_from_json_with_matrix() {
    let cfg: SeriesConfig =
        serde_json::from_str(r#"{ "order": 5, "matrix": [[0.0, 1.0], [0.0, 0.0]] }"#).unwrap();
    let series = cfg.build().unwrap();
    assert_eq!(series.order(), 5);
    assert_eq!(series.approximation().to_rows(), vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
}

#[test]
fn series_config_rejects_ragged_matrix() {
    let cfg = SeriesConfig::new(2, vec![vec![1.0, 2.0], vec![3.0]]);
    assert!(cfg.build().is_err());
}

#[test]
fn series_config_rejects_empty_matrix() {
    let cfg: SeriesConfig = serde_json::from_str(r#"{ "matrix": [] }"#).unwrap();
    assert_eq!(cfg.build().unwrap_err(), MatrixError::InvalidShape { size: 0, len: 0 });
}

#[test]
fn series_config_raises_zero_size_to_one() {
    let cfg: SeriesConfig = serde_json::from_str(r#"{ "size": 0 }"#).unwrap();
    let series = cfg.build().unwrap();
    assert_eq!(series.size(), 1);
    assert_eq!(series.approximation(), &identity(1));
}

#[test]
fn series_config_round_trips_json() {
    let cfg = SeriesConfig::new(4, vec![vec![1.0]]);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("order"));
    let back: SeriesConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, back);
}
