//! Numeric building blocks for the generator

/// Points and vertical outline intersections
pub mod geometry;
/// Seeded random stream and seed string generation
pub mod random;
