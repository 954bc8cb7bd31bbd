//! The spherical triangle record returned by every solver.

use std::fmt;

use log::info;

use crate::common::{
  error::{Element, SphTriError},
  math::PI,
};

/// A solved spherical triangle.
///
/// * angles `A`, `B`, `C` in radians
/// * sides `a`, `b`, `c` in angular units (radians, as seen from the centre of the sphere)
/// * `R` the radius of the sphere, `1` for the unit sphere
///
/// Side `a` is opposite to vertex `A`, `b` opposite to `B` and `c` opposite to `C`.
/// Linear distances (`a * R`, ...) are derived on demand.
///
/// Invalid geometries are not rejected: the impossible elements are simply `NaN`
/// (see [`SphericalTriangle::check`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalTriangle {
  /// Vertex angle `A`, in radians
  angle_a: f64,
  /// Vertex angle `B`, in radians
  angle_b: f64,
  /// Vertex angle `C`, in radians
  angle_c: f64,
  /// Side `a`, in radians
  side_a: f64,
  /// Side `b`, in radians
  side_b: f64,
  /// Side `c`, in radians
  side_c: f64,
  /// Radius of the sphere
  r: f64,
}

impl SphericalTriangle {
  /// # params
  /// * `(angle_a, angle_b, angle_c)`: vertex angles, in radians
  /// * `(side_a, side_b, side_c)`: sides, in radians
  /// * `r`: radius of the sphere
  pub(crate) fn new(
    (angle_a, angle_b, angle_c): (f64, f64, f64),
    (side_a, side_b, side_c): (f64, f64, f64),
    r: f64,
  ) -> Self {
    Self {
      angle_a,
      angle_b,
      angle_c,
      side_a,
      side_b,
      side_c,
      r,
    }
  }

  pub fn angle_a(&self) -> f64 {
    self.angle_a
  }
  pub fn angle_b(&self) -> f64 {
    self.angle_b
  }
  pub fn angle_c(&self) -> f64 {
    self.angle_c
  }

  pub fn side_a(&self) -> f64 {
    self.side_a
  }
  pub fn side_b(&self) -> f64 {
    self.side_b
  }
  pub fn side_c(&self) -> f64 {
    self.side_c
  }

  /// Radius of the sphere the triangle lies on.
  pub fn radius(&self) -> f64 {
    self.r
  }

  /// Length of side `a` on the sphere, i.e. `a * R`.
  pub fn dist_a(&self) -> f64 {
    self.side_a * self.r
  }
  /// Length of side `b` on the sphere, i.e. `b * R`.
  pub fn dist_b(&self) -> f64 {
    self.side_b * self.r
  }
  /// Length of side `c` on the sphere, i.e. `c * R`.
  pub fn dist_c(&self) -> f64 {
    self.side_c * self.r
  }

  /// Returns `(A, B, C)`, in radians.
  pub fn angles(&self) -> (f64, f64, f64) {
    (self.angle_a, self.angle_b, self.angle_c)
  }

  /// Returns `(a, b, c)`, in radians.
  pub fn sides(&self) -> (f64, f64, f64) {
    (self.side_a, self.side_b, self.side_c)
  }

  /// Returns `(a * R, b * R, c * R)`.
  pub fn dists(&self) -> (f64, f64, f64) {
    (self.dist_a(), self.dist_b(), self.dist_c())
  }

  fn elements(&self) -> [(Element, f64); 6] {
    [
      (Element::AngleA, self.angle_a),
      (Element::AngleB, self.angle_b),
      (Element::AngleC, self.angle_c),
      (Element::SideA, self.side_a),
      (Element::SideB, self.side_b),
      (Element::SideC, self.side_c),
    ]
  }

  /// Returns `true` if at least one angle or side is `NaN`.
  pub fn has_nan(&self) -> bool {
    self.elements().iter().any(|(_, v)| v.is_nan())
  }

  /// Returns `true` if all angles and sides are finite numbers.
  pub fn is_finite(&self) -> bool {
    self.elements().iter().all(|(_, v)| v.is_finite())
  }

  /// Returns the triangle unchanged if all its elements are finite, else an error
  /// naming the first faulty element (in the order `A, B, C, a, b, c`).
  pub fn check(self) -> Result<Self, SphTriError> {
    match self.elements().iter().find(|(_, v)| !v.is_finite()) {
      Some(&(element, value)) => Err(SphTriError::DomainViolation { element, value }),
      None => Ok(self),
    }
  }

  /// Spherical excess `E = A + B + C - \pi`, in radians.
  pub fn spherical_excess(&self) -> f64 {
    self.angle_a + self.angle_b + self.angle_c - PI
  }

  /// Surface area of the triangle (Girard's theorem): `E * R^2`.
  pub fn area(&self) -> f64 {
    self.spherical_excess() * self.r * self.r
  }

  /// Perimeter of the triangle on the sphere: `(a + b + c) * R`.
  pub fn perimeter(&self) -> f64 {
    (self.side_a + self.side_b + self.side_c) * self.r
  }

  /// Logs the three lines of the report (see the `Display` implementation).
  pub fn describe(&self) {
    for line in self.to_string().lines() {
      info!("{}", line);
    }
  }
}

/// Three lines, one per (angle, side, distance) triple:
/// angle in degrees with 9 decimals, side in radians with 9 decimals,
/// distance with 3 decimals (right-aligned on 12 characters).
impl fmt::Display for SphericalTriangle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let rows = [
      ('A', 'a', self.angle_a, self.side_a, self.dist_a()),
      ('B', 'b', self.angle_b, self.side_b, self.dist_b()),
      ('C', 'c', self.angle_c, self.side_c, self.dist_c()),
    ];
    for (i, (v_name, s_name, v, s, d)) in rows.into_iter().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(
        f,
        "{}: {:.9}°   {}: {:.9}   dist: {:12.3}",
        v_name,
        v.to_degrees(),
        s_name,
        s,
        d
      )?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use super::*;
  use crate::common::math::HALF_PI;

  fn octant() -> SphericalTriangle {
    SphericalTriangle::new((HALF_PI, HALF_PI, HALF_PI), (HALF_PI, HALF_PI, HALF_PI), 2.0)
  }

  #[test]
  fn test_dists() {
    let t = octant();
    assert_eq!(t.dist_a(), PI);
    assert_eq!(t.dists(), (PI, PI, PI));
    assert_eq!(t.perimeter(), 3.0 * PI);
  }

  #[test]
  fn test_octant_area() {
    // An octant covers 1/8 of the sphere: 4 pi R^2 / 8
    let t = octant();
    assert_abs_diff_eq!(t.spherical_excess(), HALF_PI, epsilon = 1e-15);
    assert_abs_diff_eq!(t.area(), 0.5 * PI * 4.0, epsilon = 1e-14);
  }

  #[test]
  fn test_check() {
    let t = octant();
    assert!(t.is_finite());
    assert!(!t.has_nan());
    assert_eq!(t.check(), Ok(t));

    let t = SphericalTriangle::new((0.5, f64::NAN, 0.5), (0.1, 0.1, f64::NAN), 1.0);
    assert!(t.has_nan());
    assert!(!t.is_finite());
    match t.check() {
      Err(SphTriError::DomainViolation { element, value }) => {
        assert_eq!(element, Element::AngleB);
        assert!(value.is_nan());
      }
      other => panic!("Unexpected result: {:?}", other),
    }
  }

  #[test]
  fn test_display() {
    let t = SphericalTriangle::new((HALF_PI, 0.25 * PI, PI), (1.0, 0.5, 0.25), 1000.0);
    let expected = "A: 90.000000000°   a: 1.000000000   dist:     1000.000\n\
                    B: 45.000000000°   b: 0.500000000   dist:      500.000\n\
                    C: 180.000000000°   c: 0.250000000   dist:      250.000";
    assert_eq!(t.to_string(), expected);
  }
}
