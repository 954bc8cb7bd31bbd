//! One module per set of known elements.
//!
//! SAS and ASA compute the missing element opposite to the known angle (resp. side)
//! and delegate to SSS (resp. AAA); SSA and AAS compute the second (side, angle) pair
//! and delegate to ASAS.

pub mod aaa;
pub mod aas;
pub mod asa;
pub mod asas;
pub mod sas;
pub mod ssa;
pub mod sss;

pub use self::{
  aaa::{aaa, aaa_strict, DEGENERATE_SIDE},
  aas::{aas, aas_alternate, AasCase},
  asa::{asa, asa_strict, AsaCase},
  asas::{asas, AsasCase},
  sas::{sas, SasCase},
  ssa::{ssa, ssa_alternate, SsaCase},
  sss::sss,
};

/// A triangle of a few km on the Earth, used to check all solvers.
#[cfg(test)]
pub(crate) mod fixture {
  use approx::assert_abs_diff_eq;

  use crate::triangle::SphericalTriangle;

  /// Approximate Earth radius, in meters
  pub const EARTH_R: f64 = 6_400_000.0;

  /// Sides, in meters
  pub const SIDE_A: f64 = 10.0e3;
  pub const SIDE_B: f64 = 15.0e3;
  pub const SIDE_C: f64 = 13.0e3;

  /// Angles, in radians
  pub const ANGLE_A: f64 = 0.7169006006312598; // 41.075378747°
  pub const ANGLE_B: f64 = 1.400747719572694; // 80.256932494°
  pub const ANGLE_C: f64 = 1.0239458974317932; // 58.667778373°

  pub const TOLERANCE: f64 = 1e-7;

  pub fn assert_fixture(t: &SphericalTriangle) {
    assert_abs_diff_eq!(t.angle_a(), ANGLE_A, epsilon = TOLERANCE);
    assert_abs_diff_eq!(t.angle_b(), ANGLE_B, epsilon = TOLERANCE);
    assert_abs_diff_eq!(t.angle_c(), ANGLE_C, epsilon = TOLERANCE);
    assert_abs_diff_eq!(t.side_a(), SIDE_A / EARTH_R, epsilon = TOLERANCE);
    assert_abs_diff_eq!(t.side_b(), SIDE_B / EARTH_R, epsilon = TOLERANCE);
    assert_abs_diff_eq!(t.side_c(), SIDE_C / EARTH_R, epsilon = TOLERANCE);
  }
}
