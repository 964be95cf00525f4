//! Property and acceptance tests for the matrix Lie group.
//!
//! The algebraic laws (tangent round-trip, group axioms) are checked over
//! randomly shaped matrices with integer-valued entries, so elementwise
//! float addition is exact and the laws hold with strict equality.

use proptest::prelude::*;
use symgeo_core::prelude::*;
use symgeo_geo::matrix::Matrix;
use symgeo_geo::vectors::{vector3, VectorArgs};

fn int_entries(len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec((-100i32..=100).prop_map(f64::from), len)
}

fn int_matrix() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| {
        int_entries(r * c).prop_map(move |data| Matrix::from_vec(r, c, data).unwrap())
    })
}

fn same_shape_triple() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>, Matrix<f64>)> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| {
        (int_entries(r * c), int_entries(r * c), int_entries(r * c)).prop_map(
            move |(a, b, c_data)| {
                (
                    Matrix::from_vec(r, c, a).unwrap(),
                    Matrix::from_vec(r, c, b).unwrap(),
                    Matrix::from_vec(r, c, c_data).unwrap(),
                )
            },
        )
    })
}

proptest! {
    #[test]
    fn prop_tangent_round_trip(m in int_matrix()) {
        let eps = 0.0;
        let tangent = m.to_tangent(&eps);
        prop_assert_eq!(tangent.len(), m.tangent_dim());
        prop_assert_eq!(&m.from_tangent(&tangent, &eps).unwrap(), &m);
    }

    #[test]
    fn prop_tangent_is_bijective((m, other, _) in same_shape_triple()) {
        let eps = 0.0;
        let v = other.to_tangent(&eps);
        let round_tripped = m.from_tangent(&v, &eps).unwrap().to_tangent(&eps);
        prop_assert_eq!(round_tripped, v);
    }

    #[test]
    fn prop_group_axioms((a, b, c) in same_shape_triple()) {
        let id = a.identity();
        prop_assert_eq!(&a.compose(&id).unwrap(), &a);
        prop_assert_eq!(&a.compose(&a.inverse()).unwrap(), &id);

        let left = a.compose(&b).unwrap().compose(&c).unwrap();
        let right = a.compose(&b.compose(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_reshape_round_trip(m in int_matrix()) {
        let (r, c) = m.shape();
        let reshaped = m.reshape(c, r).unwrap();
        prop_assert_eq!(reshaped.as_slice(), m.as_slice());
        prop_assert_eq!(reshaped.reshape(r, c).unwrap(), m);
    }

    #[test]
    fn prop_storage_matches_tangent(m in int_matrix()) {
        prop_assert_eq!(m.storage_dim(), m.tangent_dim());
        prop_assert_eq!(m.to_storage(), m.to_tangent(&0.0));
    }
}

#[test]
fn test_eye_is_multiplicative_identity() {
    let eye3: Matrix<f64> = Matrix::eye(3);
    assert_eq!(&eye3 * &eye3, eye3);

    let nonzero: Vec<(usize, usize)> = (0..3)
        .flat_map(|r| (0..3).map(move |c| (r, c)))
        .filter(|&(r, c)| eye3[(r, c)] != 0.0)
        .collect();
    assert_eq!(nonzero, vec![(0, 0), (1, 1), (2, 2)]);
    for (r, c) in nonzero {
        assert_eq!(eye3[(r, c)], 1.0);
    }
}

#[test]
fn test_diag() {
    let d = Matrix::diag(vec![1.0, 2.0, 3.0]);
    assert_eq!(d.shape(), (3, 3));
    for r in 0..3 {
        for c in 0..3 {
            let expected = if r == c { (r + 1) as f64 } else { 0.0 };
            assert_eq!(d[(r, c)], expected);
        }
    }
}

#[test]
fn test_norm_and_normalized() {
    use approx::assert_relative_eq;

    let v = Matrix::col_vec(vec![3.0, 4.0]);
    assert_relative_eq!(v.norm(&0.0).unwrap(), 5.0);

    let unit = v.normalized(&0.0).unwrap();
    assert_relative_eq!(unit[(0, 0)], 0.6);
    assert_relative_eq!(unit[(1, 0)], 0.8);
}

#[test]
fn test_are_parallel() {
    let a = vector3(1.0, 0.0, 0.0);
    let b = vector3(2.0, 0.0, 0.0);
    let c = vector3(0.0, 1.0, 0.0);

    assert_eq!(Matrix::are_parallel(&a, &b, &1e-9).unwrap(), 1.0);
    assert_eq!(Matrix::are_parallel(&a, &c, &1e-9).unwrap(), 0.0);
}

#[test]
fn test_column_stack_acceptance() {
    let u = Matrix::col_vec(vec![1.0, 4.0]);
    let v = Matrix::col_vec(vec![2.0, 5.0]);
    let w = Matrix::col_vec(vec![3.0, 6.0]);

    let stacked = Matrix::column_stack(&[u.clone(), v.clone(), w.clone()]).unwrap();
    assert_eq!(stacked.shape(), (2, 3));
    for (j, col) in [&u, &v, &w].into_iter().enumerate() {
        for r in 0..2 {
            assert_eq!(stacked[(r, j)], col[(r, 0)]);
        }
    }

    let err = Matrix::column_stack(&[u, Matrix::col_vec(vec![1.0, 2.0, 3.0])]).unwrap_err();
    assert!(matches!(err, GeoError::ShapeMismatch { .. }));
}

#[test]
fn test_vector_constructor_acceptance() {
    use symgeo_geo::vectors::vector_constructor;

    let from_sequence = vector_constructor(3, VectorArgs::Sequence(vec![1.0, 2.0, 3.0])).unwrap();
    let from_scalars = vector_constructor(3, VectorArgs::Scalars(vec![1.0, 2.0, 3.0])).unwrap();
    assert_eq!(from_sequence, from_scalars);

    let err = vector_constructor(3, VectorArgs::Scalars(vec![1.0, 2.0])).unwrap_err();
    assert!(matches!(err, GeoError::Construction { .. }));
}

#[test]
fn test_squared_norm_rejects_matrix() {
    let err = Matrix::<f64>::zeros(2, 2).squared_norm().unwrap_err();
    assert!(matches!(err, GeoError::NotAVector { .. }));
}
