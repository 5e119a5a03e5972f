pub(crate) use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_from_vec() {
    let m = SquareMatrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    assert_eq!(m.size(), 2);
    assert_eq!(m.get(0, 1), 2.0);
    assert_eq!(m.get(1, 1), 4.0);
}

#[test]
fn test_from_vec_error() {
    let result = SquareMatrix::from_vec(2, vec![1.0, 2.0, 3.0]);
    assert_eq!(
        result,
        Err(TriangleError::DataLength {
            expected: 4,
            actual: 3
        })
    );
}

#[test]
fn test_from_vec_overflowing_size() {
    let result = SquareMatrix::from_vec(usize::MAX, vec![]);
    assert_eq!(
        result,
        Err(TriangleError::DimensionOverflow { size: usize::MAX })
    );
}

#[test]
fn test_from_rows_row_major() {
    let m = SquareMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])
        .expect("2x2 rows are square");
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(m.get(1, 0), 3.0);
}

#[test]
fn test_from_rows_ragged() {
    let result = SquareMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    assert_eq!(result, Err(TriangleError::NotSquare { rows: 2, cols: 1 }));
}

#[test]
fn test_from_rows_empty() {
    let m = SquareMatrix::from_rows(&[]).expect("empty matrix is valid");
    assert_eq!(m.size(), 0);
    assert!(m.as_slice().is_empty());
}

#[test]
fn test_random_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(7);
    let m = SquareMatrix::random(16, &mut rng).expect("16x16 fits");
    assert_eq!(m.as_slice().len(), 256);
    assert!(m.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
}

#[test]
fn test_random_same_seed_same_data() {
    let a = SquareMatrix::random(8, &mut StdRng::seed_from_u64(42)).expect("8x8 fits");
    let b = SquareMatrix::random(8, &mut StdRng::seed_from_u64(42)).expect("8x8 fits");
    assert_eq!(a, b);
}

#[test]
fn test_random_overflowing_size() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = SquareMatrix::random(usize::MAX, &mut rng);
    assert_eq!(
        result,
        Err(TriangleError::DimensionOverflow { size: usize::MAX })
    );
}

#[test]
fn test_cell_count() {
    assert_eq!(cell_count(0), Ok(0));
    assert_eq!(cell_count(3), Ok(9));
    assert!(cell_count(usize::MAX).is_err());
}

#[test]
fn test_json_round_trip() {
    let m = SquareMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("square");
    let json = serde_json::to_string(&m).expect("serializes");
    let back: SquareMatrix = serde_json::from_str(&json).expect("valid payload");
    assert_eq!(back, m);
}

#[test]
fn test_deserialize_rejects_short_data() {
    let result = serde_json::from_str::<SquareMatrix>(r#"{"data":[1.0],"size":3}"#);
    let err = result.expect_err("length 1 cannot be a 3x3 matrix");
    assert!(err.to_string().contains("expected 9 values, got 1"));
}

#[test]
fn test_deserialize_rejects_overflowing_size() {
    let json = format!(r#"{{"data":[],"size":{}}}"#, usize::MAX);
    let result = serde_json::from_str::<SquareMatrix>(&json);
    assert!(result
        .expect_err("size squared overflows")
        .to_string()
        .contains("dimension overflow"));
}
