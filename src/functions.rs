//! Free numeric functions over vectors.

use crate::{
    errors::ZeroNorm,
    scalar::{RealScalar, Scalar},
    vector::{Vector, VectorError},
};
use num_traits::Zero;
use thiserror::Error;

/// Function Error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum FunctionError {
    /// The vector and scalar lists differ in length.
    #[error("vectors and scalars lists must be of the same size, found {0} and {1}")]
    SizeMismatch(usize, usize),

    /// Cross products take 3-dimensional operands.
    #[error("vectors must be 3-dimensional, found {0}")]
    NotThreeDimensional(usize),

    /// Zero-norm operand.
    #[error(transparent)]
    ZeroNorm(#[from] ZeroNorm),

    /// Vector error.
    #[error("vector error: {0}")]
    Vector(#[from] VectorError),
}

/// Weighted sum of `vectors`, with `scalars` as the weights.
///
/// Accumulates with fused multiply-add. Empty input yields the empty vector.
pub fn linear_combination<T: Scalar>(
    vectors: &[Vector<T>],
    scalars: &[T],
) -> Result<Vector<T>, FunctionError> {
    if vectors.len() != scalars.len() {
        return Err(FunctionError::SizeMismatch(vectors.len(), scalars.len()));
    }
    let Some(first) = vectors.first() else {
        return Ok(Vector::new(Vec::new()));
    };
    let mut result = Vector::zeros(first.len());
    for (vector, scalar) in vectors.iter().zip(scalars.iter()) {
        if vector.len() != result.len() {
            return Err(VectorError::SizeMismatch(result.len(), vector.len()).into());
        }
        for (acc, value) in result.iter_mut().zip(vector.iter()) {
            *acc = scalar.mul_add(*value, *acc);
        }
    }
    Ok(result)
}

/// Linear interpolation `u + t * (v - u)`, elementwise via fused multiply-add.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate along the line.
pub fn lerp<T: Scalar>(u: &Vector<T>, v: &Vector<T>, t: T) -> Result<Vector<T>, FunctionError> {
    if u.len() != v.len() {
        return Err(VectorError::SizeMismatch(u.len(), v.len()).into());
    }
    let mut data = Vec::with_capacity(u.len());
    for (a, b) in u.iter().zip(v.iter()) {
        data.push(t.mul_add(*b - *a, *a));
    }
    Ok(Vector::new(data))
}

/// Cosine of the angle between `u` and `v`.
///
/// Fails if either vector has an exactly zero norm.
pub fn angle_cos<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Result<T, FunctionError> {
    if u.len() != v.len() {
        return Err(VectorError::SizeMismatch(u.len(), v.len()).into());
    }
    let u_norm = u.norm();
    let v_norm = v.norm();
    if u_norm.is_zero() || v_norm.is_zero() {
        return Err(ZeroNorm.into());
    }
    Ok(u.dot(v)? / T::from_real(u_norm * v_norm))
}

/// Cross product of two 3-dimensional real vectors.
///
/// Only real scalars qualify; the cross product is not defined for complex
/// 3-vectors.
pub fn cross_product<T: RealScalar>(
    u: &Vector<T>,
    v: &Vector<T>,
) -> Result<Vector<T>, FunctionError> {
    if u.len() != 3 {
        return Err(FunctionError::NotThreeDimensional(u.len()));
    }
    if v.len() != 3 {
        return Err(FunctionError::NotThreeDimensional(v.len()));
    }
    let (u0, u1, u2) = (*u.entry(0)?, *u.entry(1)?, *u.entry(2)?);
    let (v0, v1, v2) = (*v.entry(0)?, *v.entry(1)?, *v.entry(2)?);
    Ok(Vector::new(vec![
        u1.mul_add(v2, -(u2 * v1)),
        u2.mul_add(v0, -(u0 * v2)),
        u0.mul_add(v1, -(u1 * v0)),
    ]))
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex;
    use rstest::rstest;

    #[test]
    fn linear_combination_of_basis_vectors() {
        let vectors = vec![
            Vector::from([1.0f32, 0.0, 0.0]),
            Vector::from([0.0f32, 1.0, 0.0]),
            Vector::from([0.0f32, 0.0, 1.0]),
        ];
        let result = linear_combination(&vectors, &[10.0, -2.0, 0.5]).unwrap();
        assert_eq!(result, Vector::from([10.0, -2.0, 0.5]));
    }

    #[test]
    fn linear_combination_of_two_vectors() {
        let vectors = vec![Vector::from([1.0f32, 2.0, 3.0]), Vector::from([0.0f32, 10.0, -100.0])];
        let result = linear_combination(&vectors, &[10.0, -2.0]).unwrap();
        assert_eq!(result, Vector::from([10.0, 0.0, 230.0]));
    }

    #[test]
    fn linear_combination_of_nothing_is_empty() {
        let result = linear_combination::<f32>(&[], &[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn linear_combination_list_length_mismatch() {
        let vectors = vec![Vector::from([1.0f32, 0.0, 0.0])];
        let result = linear_combination(&vectors, &[]).err().unwrap();
        assert_eq!(result, FunctionError::SizeMismatch(1, 0));
    }

    #[test]
    fn linear_combination_vector_length_mismatch() {
        let vectors = vec![Vector::from([1.0f32, 0.0]), Vector::from([1.0f32])];
        let result = linear_combination(&vectors, &[1.0, 1.0]).err().unwrap();
        assert_eq!(result, FunctionError::Vector(VectorError::SizeMismatch(2, 1)));
    }

    #[rstest]
    #[case(0.0, [1.0, 2.0, 3.0])]
    #[case(1.0, [4.0, 5.0, 6.0])]
    #[case(0.5, [2.5, 3.5, 4.5])]
    fn lerp_interpolates(#[case] t: f64, #[case] expected: [f64; 3]) {
        let u = Vector::from([1.0, 2.0, 3.0]);
        let v = Vector::from([4.0, 5.0, 6.0]);
        assert_eq!(lerp(&u, &v, t).unwrap(), Vector::from(expected));
    }

    #[test]
    fn lerp_extrapolates_outside_the_unit_interval() {
        let u = Vector::from([0.0f64]);
        let v = Vector::from([10.0f64]);
        assert_eq!(lerp(&u, &v, 2.0).unwrap(), Vector::from([20.0]));
        assert_eq!(lerp(&u, &v, -1.0).unwrap(), Vector::from([-10.0]));
    }

    #[test]
    fn lerp_size_mismatch() {
        let u = Vector::from([1.0f64, 2.0]);
        let v = Vector::from([1.0f64]);
        let result = lerp(&u, &v, 0.5).err().unwrap();
        assert_eq!(result, FunctionError::Vector(VectorError::SizeMismatch(2, 1)));
    }

    #[rstest]
    #[case([1.0, 0.0], [1.0, 0.0], 1.0)]
    #[case([1.0, 0.0], [0.0, 1.0], 0.0)]
    #[case([-1.0, 1.0], [1.0, -1.0], -1.0)]
    #[case([2.0, 1.0], [4.0, 2.0], 1.0)]
    fn angle_cos_of_known_directions(
        #[case] u: [f64; 2],
        #[case] v: [f64; 2],
        #[case] expected: f64,
    ) {
        let result = angle_cos(&Vector::from(u), &Vector::from(v)).unwrap();
        assert_abs_diff_eq!(result, expected, epsilon = 1e-9);
    }

    #[test]
    fn angle_cos_of_zero_vector_fails() {
        let u = Vector::from([0.0f64, 0.0]);
        let v = Vector::from([1.0f64, 0.0]);
        let result = angle_cos(&u, &v).err().unwrap();
        assert_eq!(result, FunctionError::ZeroNorm(ZeroNorm));
    }

    #[test]
    fn angle_cos_size_mismatch() {
        let u = Vector::from([1.0f64]);
        let v = Vector::from([1.0f64, 0.0]);
        let result = angle_cos(&u, &v).err().unwrap();
        assert_eq!(result, FunctionError::Vector(VectorError::SizeMismatch(1, 2)));
    }

    #[test]
    fn angle_cos_of_complex_vectors() {
        let i = Complex::new(0.0f64, 1.0);
        let u = Vector::from([i]);
        let result = angle_cos(&u, &u).unwrap();
        assert_abs_diff_eq!((result - Complex::new(1.0, 0.0)).magnitude(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn cross_product_of_basis_vectors() {
        let x = Vector::from([1.0f64, 0.0, 0.0]);
        let y = Vector::from([0.0f64, 1.0, 0.0]);
        assert_eq!(cross_product(&x, &y).unwrap(), Vector::from([0.0, 0.0, 1.0]));
    }

    #[test]
    fn cross_product_is_anticommutative() {
        let u = Vector::from([1.0f64, 2.0, 3.0]);
        let v = Vector::from([4.0f64, 5.0, 6.0]);
        let mut forward = cross_product(&u, &v).unwrap();
        let backward = cross_product(&v, &u).unwrap();
        forward.add(&backward).unwrap();
        assert_abs_diff_eq!(forward, Vector::from([0.0, 0.0, 0.0]));
    }

    #[test]
    fn cross_product_requires_three_dimensions() {
        let u = Vector::from([1.0f64, 2.0]);
        let v = Vector::from([1.0f64, 2.0, 3.0]);
        let result = cross_product(&u, &v).err().unwrap();
        assert_eq!(result, FunctionError::NotThreeDimensional(2));
        let result = cross_product(&v, &u).err().unwrap();
        assert_eq!(result, FunctionError::NotThreeDimensional(2));
    }
}
