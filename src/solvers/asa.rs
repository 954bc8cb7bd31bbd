//! Two angles and the included side (ASA).

use crate::{common::error::SphTriError, triangle::SphericalTriangle};

use super::aaa::{aaa, aaa_strict};

/// Tells which elements are provided to [`asa`], in the order `(vertex1, side, vertex2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsaCase {
  /// Angles `A` and `B`, and the included side `c`
  AcB,
  /// Angles `B` and `C`, and the included side `a`
  BaC,
  /// Angles `C` and `A`, and the included side `b`
  CbA,
}

impl AsaCase {
  pub const ALL: [Self; 3] = [Self::AcB, Self::BaC, Self::CbA];

  /// Puts `(vertex1, vertex2, vertex3)` in the `(A, B, C)` order.
  fn abc(self, v1: f64, v2: f64, v3: f64) -> (f64, f64, f64) {
    match self {
      Self::AcB => (v1, v2, v3),
      Self::BaC => (v3, v1, v2),
      Self::CbA => (v2, v3, v1),
    }
  }
}

/// Third angle, from the polar law of cosines.
fn third_vertex(vertex1: f64, side: f64, vertex2: f64, r: f64) -> f64 {
  let s = side / r;
  (vertex1.sin() * vertex2.sin() * s.cos() - vertex1.cos() * vertex2.cos()).acos()
}

/// Solves the triangle from two angles and the side between them.
/// The third angle is computed with the polar law of cosines
/// `v3 = acos( sin(v1)sin(v2)cos(s) - cos(v1)cos(v2) )`, the three angles being then
/// provided to [AAA](super::aaa::aaa) (with its degenerate-side fallback).
///
/// # params
/// * `vertex1`: first angle, in radians (`A` for [`AsaCase::AcB`], ...)
/// * `side`: the side between the two angles, in the unit of `r`
/// * `vertex2`: second angle, in radians (`B` for [`AsaCase::AcB`], ...)
/// * `r`: radius of the sphere
/// * `case`: which elements `vertex1`, `side` and `vertex2` are
pub fn asa(vertex1: f64, side: f64, vertex2: f64, r: f64, case: AsaCase) -> SphericalTriangle {
  let vertex3 = third_vertex(vertex1, side, vertex2, r);
  let (v_a, v_b, v_c) = case.abc(vertex1, vertex2, vertex3);
  aaa(v_a, v_b, v_c, r)
}

/// Same as [`asa`], but relying on [`aaa_strict`]: a side which cannot be computed
/// leads to an error instead of the degenerate-side fallback value.
pub fn asa_strict(
  vertex1: f64,
  side: f64,
  vertex2: f64,
  r: f64,
  case: AsaCase,
) -> Result<SphericalTriangle, SphTriError> {
  let vertex3 = third_vertex(vertex1, side, vertex2, r);
  let (v_a, v_b, v_c) = case.abc(vertex1, vertex2, vertex3);
  aaa_strict(v_a, v_b, v_c, r)
}
