use super::*;

/// Linear interpolation between two points.
/// When t is 0 the result is p0 and when t is 1 it is p1; as t moves
/// from 0 to 1 the result moves proportionally along the segment, so
/// t = 0.8 is 80% of the way from p0 to p1. t is not clamped, values
/// outside [0, 1] extrapolate the segment.
pub fn lerp<P: Point>(t: NativeFloat, p0: P, p1: P) -> P {
    p0 * (1.0 - t) + p1 * t
}

/// A line segment is a Bezier curve of degree 1, which is why there is
/// no specialized type for that case.
pub type LineSegment<P> = Bezier<P, 2>;
