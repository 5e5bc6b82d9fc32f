// Normalized linear interpolation (nlerp)
//
// Blend two values linearly, then renormalize the result. For unit vectors and rotations
// this is a cheap stand-in for slerp that keeps the result on the unit sphere.

use super::lerp::clamp01;
use glam::{DQuat, DVec2, DVec3, Quat, Vec2, Vec3, Vec4};
use num_traits::Float;

/// A type that can normalized-linearly interpolate between two of itself
///
/// `F` is the factor type. A factor of `0` yields `a`'s direction, `1` yields `b`'s.
pub trait Nlerp<F: Float = f32>: Sized {
    /// Interpolate without a clamp; factors outside `[0, 1]` still affect the result
    fn nlerp_unclamped(a: &Self, b: &Self, t: F) -> Self;

    /// Interpolate with `t` clamped to `[0, 1]`
    fn nlerp(a: &Self, b: &Self, t: F) -> Self {
        Self::nlerp_unclamped(a, b, clamp01(t))
    }
}

/// Normalized linear interpolation, with `t` clamped to `[0, 1]`
#[inline]
pub fn nlerp<T: Nlerp<F>, F: Float>(a: &T, b: &T, t: F) -> T {
    T::nlerp(a, b, t)
}

/// Normalized linear interpolation without a clamp
#[inline]
pub fn nlerp_unclamped<T: Nlerp<F>, F: Float>(a: &T, b: &T, t: F) -> T {
    T::nlerp_unclamped(a, b, t)
}

/// Vectors: lerp, then normalize. A zero-length blend (opposite inputs) yields zero.
macro_rules! impl_nlerp_for_vector {
    ($vec:ty, $scalar:ty, $($factor:ty),+) => {
        $(
            impl Nlerp<$factor> for $vec {
                #[inline]
                fn nlerp_unclamped(a: &Self, b: &Self, t: $factor) -> Self {
                    a.lerp(*b, t as $scalar).normalize_or_zero()
                }
            }
        )+
    };
}

impl_nlerp_for_vector!(Vec2, f32, f32, f64);
impl_nlerp_for_vector!(Vec3, f32, f32, f64);
impl_nlerp_for_vector!(Vec4, f32, f32, f64);
impl_nlerp_for_vector!(DVec2, f64, f32, f64);
impl_nlerp_for_vector!(DVec3, f64, f32, f64);

/// Rotations: blend along the shortest arc, then normalize
macro_rules! impl_nlerp_for_quat {
    ($quat:ty, $scalar:ty, $($factor:ty),+) => {
        $(
            impl Nlerp<$factor> for $quat {
                #[inline]
                fn nlerp_unclamped(a: &Self, b: &Self, t: $factor) -> Self {
                    let t = t as $scalar;
                    // q and -q are the same rotation; pick the one on a's hemisphere
                    let b = if a.dot(*b) < 0.0 { -*b } else { *b };
                    (*a * (1.0 - t) + b * t).normalize()
                }
            }
        )+
    };
}

impl_nlerp_for_quat!(Quat, f32, f32, f64);
impl_nlerp_for_quat!(DQuat, f64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_nlerp_endpoints() {
        let a = Vec3::X;
        let b = Vec3::Y;
        assert!(nlerp(&a, &b, 0.0f32).abs_diff_eq(a, 1e-6));
        assert!(nlerp(&a, &b, 1.0f32).abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn test_nlerp_midpoint_is_unit_length() {
        let mid = nlerp(&Vec2::X, &Vec2::Y, 0.5f32);
        assert!(mid.abs_diff_eq(Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2), 1e-6));
        assert_relative_eq!(mid.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_nlerp_clamps_factor() {
        let a = Vec3::X;
        let b = Vec3::Y;
        assert!(nlerp(&a, &b, -3.0f32).abs_diff_eq(a, 1e-6));
        assert!(nlerp(&a, &b, 4.0f32).abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn test_nlerp_unclamped_extrapolates() {
        // X + (Y - X) * 2 = (-1, 2, 0)
        let result = nlerp_unclamped(&Vec3::X, &Vec3::Y, 2.0f32);
        assert!(result.abs_diff_eq(Vec3::new(-1.0, 2.0, 0.0).normalize(), 1e-6));
    }

    #[test]
    fn test_nlerp_opposite_vectors_yield_zero() {
        let result = nlerp(&Vec3::X, &Vec3::NEG_X, 0.5f32);
        assert_eq!(result, Vec3::ZERO);
    }

    #[test]
    fn test_nlerp_double_factor() {
        let single = nlerp(&Vec4::X, &Vec4::W, 0.25f32);
        let double = nlerp(&Vec4::X, &Vec4::W, 0.25f64);
        assert!(single.abs_diff_eq(double, 1e-6));

        let mid = nlerp(&DVec3::X, &DVec3::Z, 0.5f64);
        assert_relative_eq!(mid.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(mid.x, mid.z, epsilon = 1e-12);

        let mid = nlerp(&DVec2::Y, &DVec2::X, 0.5f32);
        assert_relative_eq!(mid.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quat_nlerp_midpoint() {
        let a = Quat::IDENTITY;
        let b = Quat::from_rotation_z(FRAC_PI_2);
        let mid = nlerp(&a, &b, 0.5f32);
        assert!(mid.abs_diff_eq(Quat::from_rotation_z(FRAC_PI_4), 1e-6));
        assert_relative_eq!(mid.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quat_nlerp_takes_shortest_arc() {
        let a = Quat::IDENTITY;
        let flipped = -Quat::IDENTITY;
        let mid = <Quat as Nlerp<f64>>::nlerp(&a, &flipped, 0.5);
        assert!(mid.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn test_dquat_nlerp_clamps_factor() {
        let a = DQuat::IDENTITY;
        let b = DQuat::from_rotation_x(std::f64::consts::FRAC_PI_2);
        assert!(nlerp(&a, &b, 5.0f64).abs_diff_eq(b, 1e-12));
        assert!(nlerp(&a, &b, -5.0f32).abs_diff_eq(a, 1e-12));
    }
}
