//! The sphere the triangles lie on.

use crate::{
  common::{check_radius, error::SphTriError},
  solvers::{
    aaa, aaa_strict, aas, asa, asas, sas, ssa, sss, AasCase, AsaCase, AsasCase, SasCase, SsaCase,
  },
  triangle::SphericalTriangle,
};

/// Sphere of given radius, providing all solvers with the radius set.
///
/// Side lengths given to the solvers are expressed in the unit of the radius,
/// e.g. in meters for `Sphere::from_radius(6.4e6)`, or directly in radians for
/// the unit sphere ([`Sphere::default`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
  /// Radius, > 0
  r: f64,
}

impl Default for Sphere {
  /// The unit sphere
  fn default() -> Self {
    Self::UNIT
  }
}

impl Sphere {
  /// Sphere of radius 1: sides are angles, in radians.
  pub const UNIT: Self = Self { r: 1.0 };

  /// Create a new sphere, checking that the radius is finite and strictly positive.
  pub fn from_radius(r: f64) -> Result<Self, SphTriError> {
    check_radius(r).map(|r| Self { r })
  }

  /// # Panics
  /// * if `r` is not finite or `<= 0`
  pub fn new(r: f64) -> Self {
    assert!(r.is_finite() && r > 0.0);
    Self { r }
  }

  pub fn radius(&self) -> f64 {
    self.r
  }

  /// See [`sss`](crate::solvers::sss::sss).
  pub fn sss(&self, side1: f64, side2: f64, side3: f64) -> SphericalTriangle {
    sss(side1, side2, side3, self.r)
  }

  /// See [`aaa`](crate::solvers::aaa::aaa).
  pub fn aaa(&self, vertex1: f64, vertex2: f64, vertex3: f64) -> SphericalTriangle {
    aaa(vertex1, vertex2, vertex3, self.r)
  }

  /// See [`aaa_strict`](crate::solvers::aaa::aaa_strict).
  pub fn aaa_strict(
    &self,
    vertex1: f64,
    vertex2: f64,
    vertex3: f64,
  ) -> Result<SphericalTriangle, SphTriError> {
    aaa_strict(vertex1, vertex2, vertex3, self.r)
  }

  /// See [`sas`](crate::solvers::sas::sas).
  pub fn sas(&self, side1: f64, vertex: f64, side2: f64, case: SasCase) -> SphericalTriangle {
    sas(side1, vertex, side2, self.r, case)
  }

  /// See [`ssa`](crate::solvers::ssa::ssa).
  pub fn ssa(&self, side1: f64, side2: f64, vertex1: f64, case: SsaCase) -> SphericalTriangle {
    ssa(side1, side2, vertex1, self.r, case)
  }

  /// See [`asa`](crate::solvers::asa::asa).
  pub fn asa(&self, vertex1: f64, side: f64, vertex2: f64, case: AsaCase) -> SphericalTriangle {
    asa(vertex1, side, vertex2, self.r, case)
  }

  /// See [`aas`](crate::solvers::aas::aas).
  pub fn aas(&self, vertex1: f64, vertex2: f64, side1: f64, case: AasCase) -> SphericalTriangle {
    aas(vertex1, vertex2, side1, self.r, case)
  }

  /// See [`asas`](crate::solvers::asas::asas).
  pub fn asas(
    &self,
    side1: f64,
    side2: f64,
    vertex1: f64,
    vertex2: f64,
    case: AsasCase,
  ) -> SphericalTriangle {
    asas(side1, side2, vertex1, vertex2, self.r, case)
  }
}
