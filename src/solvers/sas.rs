//! Two sides and the included angle (SAS).

use crate::triangle::SphericalTriangle;

use super::sss::sss;

/// Tells which elements are provided to [`sas`], in the order `(side1, vertex, side2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SasCase {
  /// Sides `b` and `c`, and the included angle `A`
  BAc,
  /// Sides `c` and `a`, and the included angle `B`
  CBa,
  /// Sides `a` and `b`, and the included angle `C`
  ACb,
}

impl SasCase {
  pub const ALL: [Self; 3] = [Self::BAc, Self::CBa, Self::ACb];
}

/// Solves the triangle from two sides and the angle between them.
/// The third side is computed with the spherical law of cosines
/// `s = acos( cos(s1)cos(s2) + sin(s1)sin(s2)cos(v) )`, the result being then
/// provided to [SSS](super::sss::sss).
///
/// # params
/// * `side1`: first side, in the unit of `r` (`b` for [`SasCase::BAc`], ...)
/// * `vertex`: the angle between `side1` and `side2`, in radians
/// * `side2`: second side, in the unit of `r` (`c` for [`SasCase::BAc`], ...)
/// * `r`: radius of the sphere
/// * `case`: which elements `side1`, `vertex` and `side2` are
pub fn sas(side1: f64, vertex: f64, side2: f64, r: f64, case: SasCase) -> SphericalTriangle {
  let s1 = side1 / r;
  let s2 = side2 / r;
  let s3 = (s1.cos() * s2.cos() + s1.sin() * s2.sin() * vertex.cos()).acos();
  let side3 = s3 * r;
  match case {
    SasCase::BAc => sss(side3, side1, side2, r),
    SasCase::CBa => sss(side2, side3, side1, r),
    SasCase::ACb => sss(side1, side2, side3, r),
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use super::*;
  use crate::{common::math::HALF_PI, solvers::fixture::*};

  #[test]
  fn test_sas_bac() {
    assert_fixture(&sas(SIDE_B, ANGLE_A, SIDE_C, EARTH_R, SasCase::BAc));
  }

  #[test]
  fn test_sas_cba() {
    assert_fixture(&sas(SIDE_C, ANGLE_B, SIDE_A, EARTH_R, SasCase::CBa));
  }

  #[test]
  fn test_sas_acb() {
    assert_fixture(&sas(SIDE_A, ANGLE_C, SIDE_B, EARTH_R, SasCase::ACb));
  }

  #[test]
  fn test_sas_right_angle() {
    // Two quarter great circles at right angle: third side is a quarter too
    let t = sas(HALF_PI, HALF_PI, HALF_PI, 1.0, SasCase::ACb);
    assert_abs_diff_eq!(t.side_c(), HALF_PI, epsilon = 1e-15);
    assert_abs_diff_eq!(t.angle_c(), HALF_PI, epsilon = 1e-15);
  }
}
