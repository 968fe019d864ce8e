#![cfg(feature = "dev")]
use approx::assert_abs_diff_eq;
use climatch_rs::prelude::*;
use ndarray::{arr1, arr2, Array2};

#[test]
fn test_identical_regions_score_ten() {
    let cells = vec![vec![12.0, 800.0], vec![15.0, 650.0], vec![9.5, 900.0]];
    let variance = vec![30.0, 10000.0];

    let scores = climatch_vector(&cells, &cells, &variance).unwrap();

    assert_eq!(scores.len(), 3);
    for &s in &scores {
        assert_abs_diff_eq!(s, 10.0, epsilon = 1e-9);
    }

    let perc: f64 = climatch_percentage(&cells, &cells, &variance).unwrap();
    assert_abs_diff_eq!(perc, 100.0, epsilon = 1e-9);
}

#[test]
fn test_unit_distance_scores_zero() {
    // Each variable differs by 10 with variance 100, giving a normalized
    // distance of exactly 1 for the second cell.
    let source = vec![vec![10.0, 10.0, 10.0]];
    let recipient = vec![vec![10.0, 10.0, 10.0], vec![20.0, 20.0, 20.0]];
    let variance = vec![100.0, 100.0, 100.0];

    let scores = climatch_vector(&recipient, &source, &variance).unwrap();

    assert_abs_diff_eq!(scores[0], 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scores[1], 0.0, epsilon = 1e-9);

    // Floors 10 and 0: only the first cell reaches the cutoff.
    let perc: f64 = climatch_percentage(&recipient, &source, &variance).unwrap();
    assert_abs_diff_eq!(perc, 50.0, epsilon = 1e-9);
}

#[test]
fn test_both_cells_match_with_wide_variance() {
    // Same tables as above, but a tenfold variance shrinks the distance to
    // sqrt(0.1), scoring about 6.84 for the far cell.
    let source = vec![vec![10.0, 10.0, 10.0]];
    let recipient = vec![vec![10.0, 10.0, 10.0], vec![20.0, 20.0, 20.0]];
    let variance = vec![1000.0, 1000.0, 1000.0];

    let scores = climatch_vector(&recipient, &source, &variance).unwrap();
    assert_abs_diff_eq!(scores[1], 10.0 * (1.0 - 0.1_f64.sqrt()), epsilon = 1e-9);

    let perc: f64 = climatch_percentage(&recipient, &source, &variance).unwrap();
    assert_abs_diff_eq!(perc, 100.0, epsilon = 1e-9);
}

#[test]
fn test_scores_match_per_candidate_evaluation() {
    // The engine takes the minimum over squared sums and applies the square
    // root once; evaluating sqrt per source cell first must give identical
    // scores.
    let source = vec![
        vec![14.0, 820.0, 61.0],
        vec![17.5, 640.0, 48.0],
        vec![21.0, 410.0, 35.0],
    ];
    let recipient = vec![
        vec![15.0, 790.0, 59.0],
        vec![20.0, 450.0, 38.0],
        vec![33.0, 90.0, 12.0],
        vec![17.5, 640.0, 48.0],
    ];
    let variance = vec![28.0, 52000.0, 210.0];

    let scores = climatch_vector(&recipient, &source, &variance).unwrap();

    let n_vars = variance.len();
    for (j, cell) in recipient.iter().enumerate() {
        let mut min_dist = f64::INFINITY;
        for src in &source {
            let mut sum = 0.0;
            for m in 0..n_vars {
                let d = src[m] - cell[m];
                sum += d * d / variance[m];
            }
            min_dist = min_dist.min((sum / n_vars as f64).sqrt());
        }
        assert_abs_diff_eq!(scores[j], (1.0 - min_dist) * 10.0, epsilon = 1e-9);
    }

    let perc: f64 = climatch_percentage(&recipient, &source, &variance).unwrap();
    let matched = scores
        .iter()
        .filter(|&&s| {
            let floor = s.floor();
            floor >= 6.0 && floor <= 10.0
        })
        .count();
    let expected = matched as f64 / scores.len() as f64 * 100.0;
    assert_abs_diff_eq!(perc, expected, epsilon = 1e-9);
}

#[test]
fn test_reporters_share_one_score_pass() {
    // Vector, histogram, and percentage must tell the same story.
    let source = vec![vec![5.0, 40.0], vec![8.0, 55.0], vec![2.0, 70.0]];
    let recipient = vec![
        vec![5.5, 42.0],
        vec![7.0, 50.0],
        vec![30.0, 5.0],
        vec![2.0, 70.0],
        vec![11.0, 90.0],
    ];
    let variance = vec![9.0, 400.0];

    let model = Climatch::new().build().unwrap();
    let scores: Vec<f64> = model.scores(&recipient, &source, &variance).unwrap();
    let hist = model.histogram(&recipient, &source, &variance).unwrap();
    let perc: f64 = model.percentage(&recipient, &source, &variance).unwrap();

    assert_eq!(hist.total(), scores.len() as u64);

    let matched = scores
        .iter()
        .filter(|&&s| {
            let floor = s.floor();
            floor >= 6.0 && floor <= 10.0
        })
        .count() as f64;
    let expected = matched / scores.len() as f64 * 100.0;
    assert_abs_diff_eq!(perc, expected, epsilon = 1e-9);
    assert_eq!(hist.tail_count(6), matched as u64);
}

#[test]
fn test_histogram_bins_follow_floors() {
    let source = vec![vec![0.0]];
    // Distances 0, 0.15, and 3 give scores 10, 8.5, and -20.
    let recipient = vec![vec![0.0], vec![1.5], vec![30.0]];
    let variance = vec![100.0];

    let hist = climatch_histogram(&recipient, &source, &variance).unwrap();

    assert_eq!(hist.total(), 3);
    assert_eq!(hist.counts()[10], 1);
    assert_eq!(hist.counts()[8], 1);
    // The negative score is in the total but in no bin.
    assert_eq!(hist.counts().iter().sum::<u64>(), 2);
}

#[test]
fn test_negative_scores_unclamped_in_vector() {
    let source = vec![vec![0.0]];
    let recipient = vec![vec![10.0]];
    let variance = vec![1.0];

    let scores = climatch_vector(&recipient, &source, &variance).unwrap();
    assert_abs_diff_eq!(scores[0], -90.0, epsilon = 1e-9);
}

#[test]
fn test_nearest_source_cell_wins() {
    let source = vec![vec![0.0, 0.0], vec![50.0, 50.0], vec![7.0, 6.0]];
    let recipient = vec![vec![7.0, 6.0]];
    let variance = vec![20.0, 20.0];

    let scores = climatch_vector(&recipient, &source, &variance).unwrap();
    assert_abs_diff_eq!(scores[0], 10.0, epsilon = 1e-9);
}

#[test]
fn test_closer_cells_score_higher() {
    let source = vec![vec![0.0]];
    let recipient = vec![vec![1.0], vec![2.0], vec![4.0], vec![8.0]];
    let variance = vec![64.0];

    let scores = climatch_vector(&recipient, &source, &variance).unwrap();
    for w in scores.windows(2) {
        assert!(w[0] > w[1]);
    }
}

#[test]
fn test_wider_variance_never_lowers_scores() {
    // Growing one variance entry shrinks that variable's contribution to
    // every distance, so no score may drop.
    let source = vec![vec![3.0, 120.0], vec![6.0, 240.0]];
    let recipient = vec![vec![4.0, 150.0], vec![9.0, 400.0], vec![1.0, 90.0]];
    let narrow = vec![4.0, 900.0];
    let wide = vec![4.0, 3600.0];

    let before = climatch_vector(&recipient, &source, &narrow).unwrap();
    let after = climatch_vector(&recipient, &source, &wide).unwrap();

    for (b, a) in before.iter().zip(after.iter()) {
        assert!(a >= b);
    }
}

#[test]
fn test_input_formats_agree() {
    let variance = [16.0, 2500.0];
    let source_rows = vec![vec![10.0, 300.0], vec![14.0, 450.0]];
    let recipient_rows = vec![vec![11.0, 320.0], vec![20.0, 800.0]];

    let model = Climatch::new().build().unwrap();
    let from_rows: Vec<f64> = model.scores(&recipient_rows, &source_rows, &variance).unwrap();

    // Flat row-major slices with an explicit variable count.
    let source_flat = [10.0, 300.0, 14.0, 450.0];
    let recipient_flat = [11.0, 320.0, 20.0, 800.0];
    let from_flat: Vec<f64> = model
        .scores(
            &(recipient_flat.as_slice(), 2),
            &(source_flat.as_slice(), 2),
            &variance,
        )
        .unwrap();

    // Fixed-size rows.
    let source_arrays = [[10.0, 300.0], [14.0, 450.0]];
    let recipient_arrays = [[11.0, 320.0], [20.0, 800.0]];
    let from_arrays: Vec<f64> = model
        .scores(&recipient_arrays[..], &source_arrays[..], &variance)
        .unwrap();

    for i in 0..2 {
        assert_abs_diff_eq!(from_rows[i], from_flat[i], epsilon = 1e-12);
        assert_abs_diff_eq!(from_rows[i], from_arrays[i], epsilon = 1e-12);
    }
}

#[test]
fn test_ndarray_integration() {
    let source = arr2(&[[10.0, 300.0], [14.0, 450.0]]);
    let recipient = arr2(&[[11.0, 320.0], [20.0, 800.0]]);
    let variance = arr1(&[16.0, 2500.0]);

    let model = Climatch::new().build().unwrap();
    let scores: Vec<f64> = model.scores(&recipient, &source, &variance).unwrap();

    let source_rows = vec![vec![10.0, 300.0], vec![14.0, 450.0]];
    let recipient_rows = vec![vec![11.0, 320.0], vec![20.0, 800.0]];
    let variance_vec = vec![16.0, 2500.0];
    let expected = climatch_vector(&recipient_rows, &source_rows, &variance_vec).unwrap();

    for i in 0..2 {
        assert_abs_diff_eq!(scores[i], expected[i], epsilon = 1e-12);
    }
}

#[test]
fn test_non_contiguous_ndarray_rejected() {
    let source = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
    let recipient = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let variance = vec![1.0, 1.0];

    let model = Climatch::new().build().unwrap();
    // A transposed view is not row-major contiguous.
    let err = model.scores::<f64, _, _, _>(&recipient.t(), &source, &variance);

    match err {
        Err(ClimatchError::InvalidInput(_)) => (), // Expected
        other => panic!("expected InvalidInput error, got {:?}", other),
    }
}

#[test]
fn test_ragged_rows_rejected() {
    let source = vec![vec![1.0, 2.0], vec![3.0]];
    let recipient = vec![vec![1.0, 2.0]];
    let variance = vec![1.0, 1.0];

    let err = climatch_vector::<f64, _, _, _>(&recipient, &source, &variance);
    match err {
        Err(ClimatchError::InvalidInput(_)) => (), // Expected
        other => panic!("expected InvalidInput error, got {:?}", other),
    }
}

#[test]
fn test_empty_source_rejected() {
    let source: Vec<Vec<f64>> = Vec::new();
    let recipient = vec![vec![1.0, 2.0]];
    let variance = vec![1.0, 1.0];

    let err = climatch_vector::<f64, _, _, _>(&recipient, &source, &variance);
    match err {
        Err(ClimatchError::EmptyInput { what }) => assert_eq!(what, "source table"),
        other => panic!("expected EmptyInput error, got {:?}", other),
    }
}

#[test]
fn test_empty_recipient_rejected() {
    let source = vec![vec![1.0, 2.0]];
    let recipient: Vec<Vec<f64>> = Vec::new();
    let variance = vec![1.0, 1.0];

    let err = climatch_percentage::<f64, _, _, _>(&recipient, &source, &variance);
    match err {
        Err(ClimatchError::EmptyInput { what }) => assert_eq!(what, "recipient table"),
        other => panic!("expected EmptyInput error, got {:?}", other),
    }
}

#[test]
fn test_dimension_mismatch_rejected() {
    let source = vec![vec![1.0, 2.0, 3.0]];
    let recipient = vec![vec![1.0, 2.0]];
    let variance = vec![1.0, 1.0];

    let err = climatch_vector::<f64, _, _, _>(&recipient, &source, &variance);
    match err {
        Err(ClimatchError::DimensionMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 3);
        }
        other => panic!("expected DimensionMismatch error, got {:?}", other),
    }
}

#[test]
fn test_invalid_variance_rejected() {
    let source = vec![vec![1.0, 2.0]];
    let recipient = vec![vec![1.0, 2.0]];
    let variance = vec![1.0, 0.0];

    let err = climatch_vector::<f64, _, _, _>(&recipient, &source, &variance);
    match err {
        Err(ClimatchError::InvalidVariance { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected InvalidVariance error, got {:?}", other),
    }
}

#[test]
fn test_non_finite_table_rejected() {
    let source = vec![vec![1.0, 2.0]];
    let recipient = vec![vec![1.0, f64::NAN]];
    let variance = vec![1.0, 1.0];

    let err = climatch_vector::<f64, _, _, _>(&recipient, &source, &variance);
    match err {
        Err(ClimatchError::NonFiniteValue { row, col, .. }) => {
            assert_eq!(row, 0);
            assert_eq!(col, 1);
        }
        other => panic!("expected NonFiniteValue error, got {:?}", other),
    }
}

#[test]
fn test_threshold_override() {
    let source = vec![vec![0.0]];
    // Scores 10, 8.5, and -20; floors 10, 8, and out of range.
    let recipient = vec![vec![0.0], vec![1.5], vec![30.0]];
    let variance = vec![100.0];

    let strict: f64 = Climatch::new()
        .threshold(9)
        .build()
        .unwrap()
        .percentage(&recipient, &source, &variance)
        .unwrap();
    assert_abs_diff_eq!(strict, 100.0 / 3.0, epsilon = 1e-9);

    // Threshold 0 counts every binned score, but not the negative one.
    let lenient: f64 = Climatch::new()
        .threshold(0)
        .build()
        .unwrap()
        .percentage(&recipient, &source, &variance)
        .unwrap();
    assert_abs_diff_eq!(lenient, 200.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn test_threshold_out_of_range_fails_build() {
    let err = Climatch::new().threshold(11).build();
    match err {
        Err(ClimatchError::InvalidThreshold { value }) => assert_eq!(value, 11),
        other => panic!("expected InvalidThreshold error, got {:?}", other),
    }
}

#[test]
fn test_f32_precision() {
    let source = vec![vec![10.0_f32, 10.0, 10.0]];
    let recipient = vec![vec![20.0_f32, 20.0, 20.0]];
    let variance = vec![100.0_f32, 100.0, 100.0];

    let scores = climatch_vector(&recipient, &source, &variance).unwrap();
    assert_abs_diff_eq!(scores[0], 0.0_f32, epsilon = 1e-5);
}
