//! Three sides (SSS).

use crate::{common::math::cos_angle_from_sides, triangle::SphericalTriangle};

/// Solves the triangle from its three sides, computing the angles with the
/// spherical law of cosines:
/// `A = acos( (cos(a) - cos(b)cos(c)) / (sin(b)sin(c)) )`, and cyclically for `B` and `C`.
///
/// # params
/// * `side1`: side `a`, in the unit of `r` (angular units if `r = 1`)
/// * `side2`: side `b`, in the unit of `r`
/// * `side3`: side `c`, in the unit of `r`
/// * `r`: radius of the sphere
///
/// # Output
/// The sides of the returned triangle are in angular units (i.e. divided by `r`).
/// If the sides violate the spherical triangle inequality, or are not in `]0, \pi[`,
/// one or several angles are `NaN`.
pub fn sss(side1: f64, side2: f64, side3: f64, r: f64) -> SphericalTriangle {
  let s1 = side1 / r;
  let s2 = side2 / r;
  let s3 = side3 / r;

  let angle_a = cos_angle_from_sides(s1, s2, s3).acos();
  let angle_b = cos_angle_from_sides(s2, s3, s1).acos();
  let angle_c = cos_angle_from_sides(s3, s1, s2).acos();

  SphericalTriangle::new((angle_a, angle_b, angle_c), (s1, s2, s3), r)
}
