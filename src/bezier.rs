use super::*;

/// General implementation of a Bezier curve of arbitrary degree (= number of control points - 1).
/// The curve is solely defined by an array of 'control_points'; the first and last of them lie on
/// the curve, the others only shape it. Points on the curve can be evaluated with an interpolation
/// parameter 't' in interval [0,1] using the eval() method, and the whole curve can be approximated
/// by straight line segments through [`Spline::polyline`].
/// Generic parameters:
/// P: generic points 'P' as defined by the Point trait
/// const generic parameters:
/// N: number of control points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bezier<P, const N: usize>
where
    P: Point,
{
    /// Control points which define the curve and hence its degree
    control_points: [P; N],
}

/// A quadratic curve, shaped by one control point between its endpoints.
pub type QuadraticBezier<P> = Bezier<P, 3>;

/// A cubic curve, shaped by two control points between its endpoints.
pub type CubicBezier<P> = Bezier<P, 4>;

impl<P, const N: usize> Bezier<P, { N }>
where
    P: Point,
{
    /// Create a new Bezier curve that interpolates the first and last of the `control_points`.
    /// The degree is defined as degree = control_points.len() - 1.
    pub fn new(control_points: [P; N]) -> Bezier<P, { N }> {
        Bezier { control_points }
    }

    pub fn control_points(&self) -> [P; N] {
        self.control_points
    }

    /// One less than the number of control points, e.g. 2 for a
    /// quadratic and 3 for a cubic curve.
    pub fn degree(&self) -> usize {
        N - 1
    }

    /// Evaluate a point on the curve at point 't' which should be in the interval [0,1]
    /// This is implemented using De Casteljau's algorithm: every layer interpolates
    /// between each pair of consecutive points of the layer below, which yields one
    /// point less per layer; after degree-many layers a single point remains, B(t).
    pub fn eval(&self, t: NativeFloat) -> P {
        // start with a copy of the original control points array and successively use it for evaluation
        let mut p: [P; N] = self.control_points;
        for layer in 1..N {
            for j in 0..N - layer {
                p[j] = lerp(t, p[j], p[j + 1]);
            }
        }
        p[0]
    }
}

impl<P, const N: usize> Spline<P> for Bezier<P, { N }>
where
    P: Point,
{
    fn eval(&self, t: NativeFloat) -> P {
        self.eval(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointN;

    type P2 = PointN<f64, 2>;

    fn quadratic() -> QuadraticBezier<P2> {
        QuadraticBezier::new([
            PointN::new([0.2f64, 0.2f64]),
            PointN::new([0.5f64, 0.9f64]),
            PointN::new([0.9f64, 0.1f64]),
        ])
    }

    fn cubic() -> CubicBezier<P2> {
        CubicBezier::new([
            PointN::new([0.1f64, 0.9f64]),
            PointN::new([0.3f64, 0.2f64]),
            PointN::new([0.5f64, 1.6f64]),
            PointN::new([0.8f64, 0.4f64]),
        ])
    }

    #[test]
    fn eval_endpoints() {
        let points = [
            PointN::new([0f64, 1.77f64]),
            PointN::new([1.1f64, -1f64]),
            PointN::new([4.3f64, 3f64]),
            PointN::new([3.2f64, -4f64]),
            PointN::new([7.3f64, 2.7f64]),
            PointN::new([8.9f64, 1.7f64]),
        ];

        let curve: Bezier<P2, 6> = Bezier::new(points);

        // check if start/end points match
        let start = curve.eval(0.0);
        let err_start = start - points[0];
        assert!(err_start.squared_length() < EPSILON);

        let end = curve.eval(1.0);
        let err_end = end - points[points.len() - 1];
        assert!(err_end.squared_length() < EPSILON);
    }

    #[test]
    fn degree_follows_control_point_count() {
        assert_eq!(quadratic().degree(), 2);
        assert_eq!(cubic().degree(), 3);
    }

    /// Check whether the layered generic evaluation is equivalent to
    /// interpolating the two layers of a quadratic curve by hand.
    #[test]
    fn equivalence_quadratic_interpolation() {
        let curve = quadratic();
        let [p0, p1, p2] = curve.control_points();

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let expected = lerp(t, lerp(t, p0, p1), lerp(t, p1, p2));
            let err = curve.eval(t) - expected;
            assert!(err.squared_length() < EPSILON);
        }
    }

    /// Check whether the layered generic evaluation is equivalent to
    /// interpolating the three layers of a cubic curve by hand.
    #[test]
    fn equivalence_cubic_interpolation() {
        let curve = cubic();
        let [p0, p1, p2, p3] = curve.control_points();

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let ab = lerp(t, p0, p1);
            let bc = lerp(t, p1, p2);
            let cd = lerp(t, p2, p3);
            let expected = lerp(t, lerp(t, ab, bc), lerp(t, bc, cd));
            let err = curve.eval(t) - expected;
            assert!(err.squared_length() < EPSILON);
        }
    }

    /// Flattening the quadratic with two segments samples the curve at
    /// t = 0.5, which is the midpoint of the midpoints of the control
    /// polygon's legs.
    #[test]
    fn quadratic_two_segment_sample() {
        let mid = quadratic()
            .polyline(2)
            .nth(1)
            .unwrap();
        assert!((mid.axis(0) - 0.525).abs() < EPSILON);
        assert!((mid.axis(1) - 0.525).abs() < EPSILON);
    }

    /// A single segment degenerates the polyline to the chord between
    /// the curve's endpoints.
    #[test]
    fn cubic_single_segment_is_the_chord() {
        let curve = cubic();
        let mut samples = curve.polyline(1);

        let start = samples.next().unwrap();
        assert!((start - curve.control_points()[0]).squared_length() < EPSILON);

        let end = samples.next().unwrap();
        assert!((end - curve.control_points()[3]).squared_length() < EPSILON);

        assert!(samples.next().is_none());
    }

    /// A quadratic through collinear control points degenerates to that
    /// line, so every sample must lie on it.
    #[test]
    fn collinear_control_points_flatten_to_a_line() {
        let a = PointN::new([0.1f64, 0.8f64]);
        let b = PointN::new([0.4f64, 0.5f64]);
        let c = PointN::new([0.7f64, 0.2f64]);
        let curve = QuadraticBezier::new([a, b, c]);

        let (dx, dy) = (c.axis(0) - a.axis(0), c.axis(1) - a.axis(1));
        for p in curve.polyline(50) {
            let cross = dx * (p.axis(1) - a.axis(1)) - dy * (p.axis(0) - a.axis(0));
            assert!(cross.abs() < EPSILON);
        }
    }
}
