// Tenor: general-purpose math tools for game code
//
// Range checks that behave the same for primitives and user types, plus interpolation
// helpers for scalars, vectors and rotations.

pub mod math;
