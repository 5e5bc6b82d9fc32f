// Validated intervals
//
// An `Interval` stores a range once so many values can be checked against it. Bounds are
// ordered at construction, so `contains` never sees an inverted range.

use super::range::{in_range_ee, in_range_ei, in_range_ie, in_range_ii};
use super::MathError;
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Whether an interval side includes its bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Boundary {
    #[default]
    Inclusive,
    Exclusive,
}

impl Boundary {
    pub fn is_inclusive(self) -> bool {
        self == Boundary::Inclusive
    }
}

/// A range of values with a boundary kind on each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    min: T,
    max: T,
    lower: Boundary,
    upper: Boundary,
}

impl<T: PartialOrd + fmt::Debug> Interval<T> {
    /// Create a new interval
    ///
    /// Fails if `min > max`, or if the bounds cannot be ordered (a float `NaN`).
    /// `min == max` is accepted; with any exclusive side the interval is empty.
    pub fn new(min: T, max: T, lower: Boundary, upper: Boundary) -> Result<Self, MathError> {
        match min.partial_cmp(&max) {
            Some(Ordering::Greater) => {
                debug!("Rejected inverted interval {:?}..{:?}", min, max);
                Err(MathError::InvertedRange {
                    min: format!("{:?}", min),
                    max: format!("{:?}", max),
                })
            }
            None => {
                debug!("Rejected unordered interval {:?}..{:?}", min, max);
                Err(MathError::UnorderedBounds {
                    min: format!("{:?}", min),
                    max: format!("{:?}", max),
                })
            }
            Some(_) => Ok(Self {
                min,
                max,
                lower,
                upper,
            }),
        }
    }

    /// `[min, max]`
    pub fn closed(min: T, max: T) -> Result<Self, MathError> {
        Self::new(min, max, Boundary::Inclusive, Boundary::Inclusive)
    }

    /// `(min, max)`
    pub fn open(min: T, max: T) -> Result<Self, MathError> {
        Self::new(min, max, Boundary::Exclusive, Boundary::Exclusive)
    }

    /// `[min, max)`
    pub fn closed_open(min: T, max: T) -> Result<Self, MathError> {
        Self::new(min, max, Boundary::Inclusive, Boundary::Exclusive)
    }

    /// `(min, max]`
    pub fn open_closed(min: T, max: T) -> Result<Self, MathError> {
        Self::new(min, max, Boundary::Exclusive, Boundary::Inclusive)
    }
}

impl<T: PartialOrd> Interval<T> {
    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }

    pub fn lower(&self) -> Boundary {
        self.lower
    }

    pub fn upper(&self) -> Boundary {
        self.upper
    }

    /// Check if a value lies inside the interval
    pub fn contains(&self, value: &T) -> bool {
        match (self.lower, self.upper) {
            (Boundary::Inclusive, Boundary::Inclusive) => in_range_ii(value, &self.min, &self.max),
            (Boundary::Exclusive, Boundary::Exclusive) => in_range_ee(value, &self.min, &self.max),
            (Boundary::Inclusive, Boundary::Exclusive) => in_range_ie(value, &self.min, &self.max),
            (Boundary::Exclusive, Boundary::Inclusive) => in_range_ei(value, &self.min, &self.max),
        }
    }

    /// Check if no value can be contained
    pub fn is_empty(&self) -> bool {
        self.min == self.max && !(self.lower.is_inclusive() && self.upper.is_inclusive())
    }
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Clamp a value onto `[min, max]`
    ///
    /// Exclusive sides still clamp to the bound itself.
    pub fn clamp(&self, value: T) -> T {
        clamp(value, self.min, self.max)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = match self.lower {
            Boundary::Inclusive => '[',
            Boundary::Exclusive => '(',
        };
        let close = match self.upper {
            Boundary::Inclusive => ']',
            Boundary::Exclusive => ')',
        };
        write!(f, "{}{}, {}{}", open, self.min, self.max, close)
    }
}

impl<T> FromStr for Interval<T>
where
    T: FromStr + PartialOrd + fmt::Debug,
    T::Err: fmt::Display,
{
    type Err = MathError;

    /// Parse interval notation: `[a, b]`, `(a, b)`, `[a, b)` or `(a, b]`
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        trace!("Parsing interval '{}'", input);

        let parse_error = |reason: String| MathError::Parse {
            input: input.to_string(),
            reason,
        };

        let text = input.trim();
        let mut chars = text.chars();
        let lower = match chars.next() {
            Some('[') => Boundary::Inclusive,
            Some('(') => Boundary::Exclusive,
            Some(c) => return Err(parse_error(format!("expected '[' or '(', found '{}'", c))),
            None => return Err(parse_error("empty input".to_string())),
        };
        let upper = match chars.next_back() {
            Some(']') => Boundary::Inclusive,
            Some(')') => Boundary::Exclusive,
            Some(c) => return Err(parse_error(format!("expected ']' or ')', found '{}'", c))),
            None => return Err(parse_error("missing closing bracket".to_string())),
        };

        let bounds: Vec<&str> = chars.as_str().split(',').map(str::trim).collect();
        let (min, max) = match bounds.as_slice() {
            [min, max] => (*min, *max),
            _ => {
                return Err(parse_error(format!(
                    "expected two comma separated bounds, found {}",
                    bounds.len()
                )))
            }
        };

        let min = min
            .parse::<T>()
            .map_err(|e| parse_error(format!("invalid min '{}': {}", min, e)))?;
        let max = max
            .parse::<T>()
            .map_err(|e| parse_error(format!("invalid max '{}': {}", max, e)))?;

        Self::new(min, max, lower, upper)
    }
}
