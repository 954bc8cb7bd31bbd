//! Two sides and a non-included angle (SSA).

use crate::{common::math::PI, triangle::SphericalTriangle};

use super::asas::{asas, AsasCase};

/// Tells which elements are provided to [`ssa`], in the order `(side1, side2, vertex1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SsaCase {
  /// Sides `a` and `b`, and the angle `A` (opposite to `a`)
  AbA,
  /// Sides `b` and `c`, and the angle `B` (opposite to `b`)
  BcB,
  /// Sides `c` and `a`, and the angle `C` (opposite to `c`)
  CaC,
}

impl SsaCase {
  pub const ALL: [Self; 3] = [Self::AbA, Self::BcB, Self::CaC];

  fn asas_case(self) -> AsasCase {
    match self {
      Self::AbA => AsasCase::AbAB,
      Self::BcB => AsasCase::BcBC,
      Self::CaC => AsasCase::CaCA,
    }
  }
}

/// Angle opposite to `side2`, from the spherical law of sines (principal value of `asin`).
fn opposite_vertex(side1: f64, side2: f64, vertex1: f64, r: f64) -> f64 {
  (vertex1.sin() * (side2 / r).sin() / (side1 / r).sin()).asin()
}

/// Solves the triangle from two sides and the angle opposite to the first one.
/// The angle opposite to the second side is derived from the spherical law of sines
/// `v2 = asin( sin(v1)sin(s2) / sin(s1) )`, then the triangle is solved by
/// [ASAS](super::asas::asas).
///
/// # Ambiguity
/// The law of sines admits two solutions, `v2` and `\pi - v2`: only the principal
/// value of `asin` (in `[-\pi/2, \pi/2]`) is used here.
/// See [`ssa_alternate`] for the other one.
///
/// # params
/// * `side1`: first side, in the unit of `r` (`a` for [`SsaCase::AbA`], ...)
/// * `side2`: second side, in the unit of `r` (`b` for [`SsaCase::AbA`], ...)
/// * `vertex1`: the angle opposite to `side1`, in radians
/// * `r`: radius of the sphere
/// * `case`: which elements `side1`, `side2` and `vertex1` are
pub fn ssa(side1: f64, side2: f64, vertex1: f64, r: f64, case: SsaCase) -> SphericalTriangle {
  let vertex2 = opposite_vertex(side1, side2, vertex1, r);
  asas(side1, side2, vertex1, vertex2, r, case.asas_case())
}

/// Same as [`ssa`], but using the supplementary solution `\pi - v2` of the law of sines.
/// No check is made that this second solution is a valid triangle: inspect the result.
pub fn ssa_alternate(
  side1: f64,
  side2: f64,
  vertex1: f64,
  r: f64,
  case: SsaCase,
) -> SphericalTriangle {
  let vertex2 = PI - opposite_vertex(side1, side2, vertex1, r);
  asas(side1, side2, vertex1, vertex2, r, case.asas_case())
}
