pub mod error;
pub mod math;

use self::error::SphTriError;

/// Checks that the given sphere radius is strictly positive and finite.
pub fn check_radius(r: f64) -> Result<f64, SphTriError> {
  if r.is_finite() && r > 0.0 {
    Ok(r)
  } else {
    Err(SphTriError::UnexpectedRadius { r })
  }
}
