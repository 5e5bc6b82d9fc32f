// Linear interpolation tools

use num_traits::Float;

/// Clamp an interpolation factor onto `[0, 1]`
#[inline]
pub(crate) fn clamp01<F: Float>(t: F) -> F {
    t.max(F::zero()).min(F::one())
}

/// Linear interpolation, with `t` clamped to `[0, 1]`
#[inline]
pub fn lerp<F: Float>(a: F, b: F, t: F) -> F {
    lerp_unclamped(a, b, clamp01(t))
}

/// Linear interpolation without a clamp
///
/// Factors outside `[0, 1]` extrapolate past `a` or `b`.
#[inline]
pub fn lerp_unclamped<F: Float>(a: F, b: F, t: F) -> F {
    a + (b - a) * t
}

/// Find the factor at which `value` sits between `a` and `b`
///
/// The result is clamped to `[0, 1]`. A zero-width span returns `0`.
pub fn inverse_lerp<F: Float>(a: F, b: F, value: F) -> F {
    if a == b {
        return F::zero();
    }
    clamp01((value - a) / (b - a))
}

/// Check if two values are approximately equal
#[inline]
pub fn approx_equal<F: Float>(a: F, b: F, epsilon: F) -> bool {
    (a - b).abs() < epsilon
}
