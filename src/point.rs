use core::ops::{Add, Mul, Sub};

use super::NativeFloat;

/// Trait defined over generic points P used as control points of curves.
/// Many libraries already provide point types with the arithmetic that
/// curve evaluation needs, so the trait is kept as minimal as possible
/// to make wrapping a foreign type mostly boilerplate.
pub trait Point:
    Add<Output = Self>
    + Sub<Output = Self>
    + Mul<NativeFloat, Output = Self>
    + Copy
    + Default
    + PartialEq
{
    /// Returns the component of the point on the axis corresponding to
    /// index e.g. [0, 1] -> [x, y]
    fn axis(&self, index: usize) -> NativeFloat;

    /// Returns the squared L2 norm of the point interpreted as a vector
    fn squared_length(&self) -> NativeFloat;
}
