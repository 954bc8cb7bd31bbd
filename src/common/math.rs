pub const HALF_PI: f64 = 0.5 * std::f64::consts::PI;
pub const PI: f64 = std::f64::consts::PI;
pub const TWICE_PI: f64 = 2.0 * std::f64::consts::PI;

pub trait Customf64 {
  fn pow2(self) -> f64;
  fn twice(self) -> f64;
  fn half(self) -> f64;
}

impl Customf64 for f64 {
  /// Returns x^2
  fn pow2(self) -> f64 {
    self * self
  }
  /// Returns 2 * x
  fn twice(self) -> f64 {
    2.0 * self
  }
  /// Returns x / 2
  fn half(self) -> f64 {
    0.5 * self
  }
}

/// Returns the cotangent of `x` (in radians), i.e. `cos(x) / sin(x)`.
pub fn cot(x: f64) -> f64 {
  let (s, c) = x.sin_cos();
  c / s
}

/// Inverse cotangent, returning a value in `]-\pi/2, \pi/2]`.
/// `acot(0) = \pi/2` (`1/0` is `+inf` and `atan(+inf) = \pi/2`).
pub fn acot(x: f64) -> f64 {
  x.recip().atan()
}

/// Two-argument inverse cotangent: the angle whose cotangent is `x / y`,
/// with the quadrant given by the signs of `x` (cosine-like) and `y` (sine-like).
/// It is simply `atan2(y, x)`, the roles of the two arguments being swapped
/// with respect to `atan2`.
pub fn acot2(x: f64, y: f64) -> f64 {
  y.atan2(x)
}

/// Spherical law of cosines (sides): returns the cosine of the angle opposite to side `s1`
/// from the three sides `s1`, `s2`, `s3` (in radians).
/// The result lies in `[-1, 1]` only if the three sides form a valid spherical triangle.
pub fn cos_angle_from_sides(s1: f64, s2: f64, s3: f64) -> f64 {
  (s1.cos() - s2.cos() * s3.cos()) / (s2.sin() * s3.sin())
}

/// Polar (dual) law of cosines: returns the cosine of the side opposite to angle `v1`
/// from the three vertex angles `v1`, `v2`, `v3` (in radians).
/// The result lies in `[-1, 1]` only if the three angles form a valid spherical triangle.
pub fn cos_side_from_angles(v1: f64, v2: f64, v3: f64) -> f64 {
  (v1.cos() + v2.cos() * v3.cos()) / (v2.sin() * v3.sin())
}
