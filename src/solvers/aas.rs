//! Two angles and a non-included side (AAS).

use crate::{common::math::PI, triangle::SphericalTriangle};

use super::asas::{asas, AsasCase};

/// Tells which elements are provided to [`aas`], in the order `(vertex1, vertex2, side1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AasCase {
  /// Angles `A` and `B`, and the side `a` (opposite to `A`)
  ABa,
  /// Angles `B` and `C`, and the side `b` (opposite to `B`)
  BCb,
  /// Angles `C` and `A`, and the side `c` (opposite to `C`)
  CAc,
}

impl AasCase {
  pub const ALL: [Self; 3] = [Self::ABa, Self::BCb, Self::CAc];

  fn asas_case(self) -> AsasCase {
    match self {
      Self::ABa => AsasCase::AbAB,
      Self::BCb => AsasCase::BcBC,
      Self::CAc => AsasCase::CaCA,
    }
  }
}

/// Side opposite to `vertex2` (in angular units), from the spherical law of sines
/// (principal value of `asin`).
fn opposite_side(vertex1: f64, vertex2: f64, side1: f64, r: f64) -> f64 {
  ((side1 / r).sin() * vertex2.sin() / vertex1.sin()).asin()
}

/// Solves the triangle from two angles and the side opposite to the first one.
/// The side opposite to the second angle is derived from the spherical law of sines
/// `s2 = asin( sin(s1)sin(v2) / sin(v1) )`, then the triangle is solved by
/// [ASAS](super::asas::asas).
///
/// # Ambiguity
/// As for [SSA](super::ssa::ssa), only the principal value of `asin` is used.
/// See [`aas_alternate`] for the supplementary solution `\pi - s2`.
///
/// # params
/// * `vertex1`: first angle, in radians (`A` for [`AasCase::ABa`], ...)
/// * `vertex2`: second angle, in radians (`B` for [`AasCase::ABa`], ...)
/// * `side1`: the side opposite to `vertex1`, in the unit of `r`
/// * `r`: radius of the sphere
/// * `case`: which elements `vertex1`, `vertex2` and `side1` are
pub fn aas(vertex1: f64, vertex2: f64, side1: f64, r: f64, case: AasCase) -> SphericalTriangle {
  let side2 = opposite_side(vertex1, vertex2, side1, r) * r;
  asas(side1, side2, vertex1, vertex2, r, case.asas_case())
}

/// Same as [`aas`], but using the supplementary solution `\pi - s2` of the law of sines.
/// No check is made that this second solution is a valid triangle: inspect the result.
pub fn aas_alternate(
  vertex1: f64,
  vertex2: f64,
  side1: f64,
  r: f64,
  case: AasCase,
) -> SphericalTriangle {
  let side2 = (PI - opposite_side(vertex1, vertex2, side1, r)) * r;
  asas(side1, side2, vertex1, vertex2, r, case.asas_case())
}
