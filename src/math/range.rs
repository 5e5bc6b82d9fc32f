// In-range predicates
//
// Suffix letters name the boundary kind of each side: I = inclusive, E = exclusive.
// The first letter is the min side, the second the max side.

use std::cmp::Ordering;

/// Check if `value` lies in `[min, max]`
///
/// Works for anything `PartialOrd`, including references, so non-`Copy` types can be passed
/// as `&T`. Unordered values (a float `NaN`) are never in range.
#[inline]
pub fn in_range_ii<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Check if `value` lies in `(min, max)`
#[inline]
pub fn in_range_ee<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value > min && value < max
}

/// Check if `value` lies in `[min, max)`
#[inline]
pub fn in_range_ie<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value < max
}

/// Check if `value` lies in `(min, max]`
#[inline]
pub fn in_range_ei<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value > min && value <= max
}

/// [`in_range_ii`] driven by an explicit ordering
///
/// `compare(a, b)` must report how `a` orders against `b`. For a comparator consistent with
/// `PartialOrd` the result is identical to the operator form.
pub fn in_range_ii_by<T, F>(value: &T, min: &T, max: &T, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    compare(value, min) != Ordering::Less && compare(value, max) != Ordering::Greater
}

/// [`in_range_ee`] driven by an explicit ordering
pub fn in_range_ee_by<T, F>(value: &T, min: &T, max: &T, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    compare(value, min) == Ordering::Greater && compare(value, max) == Ordering::Less
}

/// [`in_range_ie`] driven by an explicit ordering
pub fn in_range_ie_by<T, F>(value: &T, min: &T, max: &T, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    compare(value, min) != Ordering::Less && compare(value, max) == Ordering::Less
}

/// [`in_range_ei`] driven by an explicit ordering
pub fn in_range_ei_by<T, F>(value: &T, min: &T, max: &T, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    compare(value, min) == Ordering::Greater && compare(value, max) != Ordering::Greater
}

/// Method form of the in-range predicates
///
/// ```
/// use tenor::math::InRange;
///
/// assert!(5i32.in_range_ii(&0, &5));
/// assert!(!5i32.in_range_ie(&0, &5));
/// ```
pub trait InRange {
    /// `[min, max]`
    fn in_range_ii(&self, min: &Self, max: &Self) -> bool;
    /// `(min, max)`
    fn in_range_ee(&self, min: &Self, max: &Self) -> bool;
    /// `[min, max)`
    fn in_range_ie(&self, min: &Self, max: &Self) -> bool;
    /// `(min, max]`
    fn in_range_ei(&self, min: &Self, max: &Self) -> bool;
}

impl<T: PartialOrd + ?Sized> InRange for T {
    #[inline]
    fn in_range_ii(&self, min: &Self, max: &Self) -> bool {
        in_range_ii(self, min, max)
    }

    #[inline]
    fn in_range_ee(&self, min: &Self, max: &Self) -> bool {
        in_range_ee(self, min, max)
    }

    #[inline]
    fn in_range_ie(&self, min: &Self, max: &Self) -> bool {
        in_range_ie(self, min, max)
    }

    #[inline]
    fn in_range_ei(&self, min: &Self, max: &Self) -> bool {
        in_range_ei(self, min, max)
    }
}
