//! Two angles and their two opposite sides (ASAS): the canonical solver,
//! also used by [SSA](super::ssa) and [AAS](super::aas) once they have derived
//! their missing element.

use crate::{
  common::math::{acot2, Customf64},
  triangle::SphericalTriangle,
};

/// Tells which (side, opposite angle) pairs are provided to [`asas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsasCase {
  /// `(side1, side2) = (a, b)` and `(vertex1, vertex2) = (A, B)`
  AbAB,
  /// `(side1, side2) = (b, c)` and `(vertex1, vertex2) = (B, C)`
  BcBC,
  /// `(side1, side2) = (c, a)` and `(vertex1, vertex2) = (C, A)`
  CaCA,
}

impl AsasCase {
  pub const ALL: [Self; 3] = [Self::AbAB, Self::BcBC, Self::CaCA];
}

/// Solves the triangle from two sides and their two opposite angles,
/// computing the third side and the third angle with Napier's analogies:
/// ```text
/// s3 = 2 * atan2( tan((s1+s2)/2) * cos((v1+v2)/2),  cos((v1-v2)/2) )
/// v3 = 2 * acot2( tan((v1+v2)/2) * cos((s1+s2)/2),  cos((s1-s2)/2) )
/// ```
///
/// # params
/// * `side1`, `side2`: the two sides, in the unit of `r` (angular units if `r = 1`)
/// * `vertex1`: the angle opposite to `side1`, in radians
/// * `vertex2`: the angle opposite to `side2`, in radians
/// * `r`: radius of the sphere
/// * `case`: which elements `side1`, `side2`, `vertex1` and `vertex2` are
///
/// Inconsistent inputs lead to `NaN` elements, no check is performed.
pub fn asas(
  side1: f64,
  side2: f64,
  vertex1: f64,
  vertex2: f64,
  r: f64,
  case: AsasCase,
) -> SphericalTriangle {
  let s1 = side1 / r;
  let s2 = side2 / r;
  let (v1, v2) = (vertex1, vertex2);

  let s3 = ((s1 + s2).half().tan() * (v1 + v2).half().cos())
    .atan2((v1 - v2).half().cos())
    .twice();
  let v3 = acot2(
    (v1 + v2).half().tan() * (s1 + s2).half().cos(),
    (s1 - s2).half().cos(),
  )
  .twice();

  match case {
    AsasCase::AbAB => SphericalTriangle::new((v1, v2, v3), (s1, s2, s3), r),
    AsasCase::BcBC => SphericalTriangle::new((v3, v1, v2), (s3, s1, s2), r),
    AsasCase::CaCA => SphericalTriangle::new((v2, v3, v1), (s2, s3, s1), r),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::solvers::fixture::*;

  #[test]
  fn test_asas_ab() {
    let t = asas(SIDE_A, SIDE_B, ANGLE_A, ANGLE_B, EARTH_R, AsasCase::AbAB);
    assert_fixture(&t);
  }

  #[test]
  fn test_asas_bc() {
    let t = asas(SIDE_B, SIDE_C, ANGLE_B, ANGLE_C, EARTH_R, AsasCase::BcBC);
    assert_fixture(&t);
  }

  #[test]
  fn test_asas_ca() {
    let t = asas(SIDE_C, SIDE_A, ANGLE_C, ANGLE_A, EARTH_R, AsasCase::CaCA);
    assert_fixture(&t);
  }

  #[test]
  fn test_asas_nan_propagates() {
    let t = asas(f64::NAN, 0.2, 0.5, 0.6, 1.0, AsasCase::AbAB);
    assert!(t.side_a().is_nan());
    assert!(t.side_c().is_nan());
    assert!(t.angle_c().is_nan());
    assert_eq!(t.angle_a(), 0.5);
  }
}
