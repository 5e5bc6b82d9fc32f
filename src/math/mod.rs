// Math tools: range checks, intervals and interpolation
//
// Generic helpers shared by anything that needs to ask "is this value inside these bounds"
// or blend between two values.

mod interval;
mod lerp;
mod nlerp;
mod range;

pub use interval::{clamp, Boundary, Interval};
pub use lerp::{approx_equal, inverse_lerp, lerp, lerp_unclamped};
pub use nlerp::{nlerp, nlerp_unclamped, Nlerp};
pub use range::{
    in_range_ee, in_range_ee_by, in_range_ei, in_range_ei_by, in_range_ie, in_range_ie_by,
    in_range_ii, in_range_ii_by, InRange,
};

/// Math tool errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("Inverted range: min {min} is greater than max {max}")]
    InvertedRange { min: String, max: String },

    #[error("Unordered bounds: {min} and {max} cannot be compared")]
    UnorderedBounds { min: String, max: String },

    #[error("Failed to parse interval '{input}': {reason}")]
    Parse { input: String, reason: String },
}
