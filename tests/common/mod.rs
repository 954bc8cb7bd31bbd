//! Shared fixture: a triangle of a few km on the Earth.

use approx::assert_abs_diff_eq;

use sphtri::SphericalTriangle;

/// Approximate Earth radius, in meters
pub const EARTH_R: f64 = 6_400_000.0;

/// Sides, in meters
pub const SIDE_A: f64 = 10.0e3;
pub const SIDE_B: f64 = 15.0e3;
pub const SIDE_C: f64 = 13.0e3;

/// Angles, in radians
pub const ANGLE_A: f64 = 0.7169006006312598;
pub const ANGLE_B: f64 = 1.400747719572694;
pub const ANGLE_C: f64 = 1.0239458974317932;

pub const TOLERANCE: f64 = 1e-7;

/// `(A, B, C, a, b, c)`, sides in radians
pub type Elements = (f64, f64, f64, f64, f64, f64);

pub fn fixture() -> Elements {
  (
    ANGLE_A,
    ANGLE_B,
    ANGLE_C,
    SIDE_A / EARTH_R,
    SIDE_B / EARTH_R,
    SIDE_C / EARTH_R,
  )
}

pub fn elements(t: &SphericalTriangle) -> Elements {
  let (va, vb, vc) = t.angles();
  let (sa, sb, sc) = t.sides();
  (va, vb, vc, sa, sb, sc)
}

/// Checks all six elements, printing both triangles on failure.
pub fn assert_elements(t: &SphericalTriangle, expected: Elements, tol: f64) {
  let actual = elements(t);
  let pairs = [
    (actual.0, expected.0),
    (actual.1, expected.1),
    (actual.2, expected.2),
    (actual.3, expected.3),
    (actual.4, expected.4),
    (actual.5, expected.5),
  ];
  for (a, e) in pairs {
    if !((a - e).abs() <= tol) {
      panic!(
        "Element mismatch (tol={:.0e})\n Actual: {:?}\n Expected: {:?}\n{}",
        tol, actual, expected, t
      );
    }
  }
  assert_abs_diff_eq!(t.dist_a(), actual.3 * t.radius());
}
