//! Three angles (AAA).

use log::warn;

use crate::{
  common::{
    error::{Element, SphTriError},
    math::cos_side_from_angles,
  },
  triangle::SphericalTriangle,
};

/// Value substituted to a side the polar law of cosines cannot provide
/// (argument of `acos` outside of `[-1, 1]`), typically for (nearly) flat triangles.
pub const DEGENERATE_SIDE: f64 = 1.0e-15;

/// Returns, for each side `(a, b, c)`, the argument of `acos` given by the polar law of cosines.
fn cos_sides(v1: f64, v2: f64, v3: f64) -> [(Element, f64); 3] {
  [
    (Element::SideA, cos_side_from_angles(v1, v2, v3)),
    (Element::SideB, cos_side_from_angles(v2, v3, v1)),
    (Element::SideC, cos_side_from_angles(v3, v1, v2)),
  ]
}

/// Solves the triangle from its three angles, computing the sides with the
/// polar (dual) law of cosines:
/// `a = acos( (cos(A) + cos(B)cos(C)) / (sin(B)sin(C)) )`, and cyclically for `b` and `c`.
///
/// # params
/// * `vertex1`: angle `A`, in radians
/// * `vertex2`: angle `B`, in radians
/// * `vertex3`: angle `C`, in radians
/// * `r`: radius of the sphere (only stored in the result, to derive distances)
///
/// # Degenerate triangles
/// A computed side which is `NaN` is replaced by [`DEGENERATE_SIDE`] (`1e-15`).
/// Only the computed sides are tested, not the inputs.
/// This also hides genuinely impossible inputs: use [`aaa_strict`] to get an error instead.
pub fn aaa(vertex1: f64, vertex2: f64, vertex3: f64, r: f64) -> SphericalTriangle {
  let [a, b, c] = cos_sides(vertex1, vertex2, vertex3).map(|(side, arg)| {
    let s = arg.acos();
    if s.is_nan() {
      warn!(
        "AAA: side {} undefined (acos argument: {}), replaced by {:e}",
        side, arg, DEGENERATE_SIDE
      );
      DEGENERATE_SIDE
    } else {
      s
    }
  });
  SphericalTriangle::new((vertex1, vertex2, vertex3), (a, b, c), r)
}

/// Same as [`aaa`], but returns [`SphTriError::DegenerateSide`] instead of substituting
/// [`DEGENERATE_SIDE`] to the first side which cannot be computed.
pub fn aaa_strict(
  vertex1: f64,
  vertex2: f64,
  vertex3: f64,
  r: f64,
) -> Result<SphericalTriangle, SphTriError> {
  let mut sides = [0.0; 3];
  for (s, (side, arg)) in sides
    .iter_mut()
    .zip(cos_sides(vertex1, vertex2, vertex3))
  {
    *s = arg.acos();
    if s.is_nan() {
      return Err(SphTriError::DegenerateSide { side, arg });
    }
  }
  let [a, b, c] = sides;
  Ok(SphericalTriangle::new(
    (vertex1, vertex2, vertex3),
    (a, b, c),
    r,
  ))
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use super::*;
  use crate::{
    common::math::{HALF_PI, PI},
    solvers::fixture::*,
  };

  #[test]
  fn test_aaa() {
    let t = aaa(ANGLE_A, ANGLE_B, ANGLE_C, EARTH_R);
    assert_fixture(&t);
    assert_eq!(t.radius(), EARTH_R);
  }

  #[test]
  fn test_aaa_strict() {
    let t = aaa_strict(ANGLE_A, ANGLE_B, ANGLE_C, EARTH_R).unwrap();
    assert_eq!(t, aaa(ANGLE_A, ANGLE_B, ANGLE_C, EARTH_R));
  }

  #[test]
  fn test_aaa_octant() {
    let t = aaa(HALF_PI, HALF_PI, HALF_PI, 1.0);
    assert_abs_diff_eq!(t.side_a(), HALF_PI, epsilon = 1e-15);
    assert_abs_diff_eq!(t.side_b(), HALF_PI, epsilon = 1e-15);
    assert_abs_diff_eq!(t.side_c(), HALF_PI, epsilon = 1e-15);
  }

  #[test]
  fn test_aaa_fallback() {
    // Angles summing to less than pi: no spherical triangle, every argument >> 1
    let t = aaa(0.1, 0.1, 0.1, 1.0);
    assert_eq!(t.sides(), (DEGENERATE_SIDE, DEGENERATE_SIDE, DEGENERATE_SIDE));
    assert_eq!(t.angles(), (0.1, 0.1, 0.1));
    assert!(!t.has_nan());

    match aaa_strict(0.1, 0.1, 0.1, 1.0) {
      Err(SphTriError::DegenerateSide { side, arg }) => {
        assert_eq!(side, Element::SideA);
        assert!(arg > 1.0);
      }
      other => panic!("Unexpected result: {:?}", other),
    }
  }

  #[test]
  fn test_aaa_flat() {
    // Angles summing to exactly pi: arguments are +-1 up to rounding errors,
    // each side is either ~0/~pi or the fallback value, never NaN.
    for (v1, v2, v3) in [
      (PI / 3.0, PI / 3.0, PI / 3.0),
      (HALF_PI, 0.25 * PI, 0.25 * PI),
      (0.5, 1.0, PI - 1.5),
    ] {
      let t = aaa(v1, v2, v3, 1.0);
      assert!(!t.has_nan());
      for (s, arg) in [t.side_a(), t.side_b(), t.side_c()]
        .into_iter()
        .zip(cos_sides(v1, v2, v3).map(|(_, arg)| arg))
      {
        if !(-1.0..=1.0).contains(&arg) {
          assert_eq!(s, DEGENERATE_SIDE);
        } else {
          assert_eq!(s, arg.acos());
        }
      }
    }
  }

  #[test]
  fn test_aaa_nan_input() {
    // NaN inputs also end up in the fallback, only the outputs are tested
    let t = aaa(f64::NAN, 1.0, 1.0, 1.0);
    assert_eq!(t.sides(), (DEGENERATE_SIDE, DEGENERATE_SIDE, DEGENERATE_SIDE));
    assert!(t.angle_a().is_nan());
  }
}
