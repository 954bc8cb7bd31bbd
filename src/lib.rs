//! Solve spherical triangles from three of their elements (sides and/or vertex angles).
//!
//! Conventions:
//! * vertex angles `A`, `B`, `C` are in radians
//! * sides `a`, `b`, `c` are given in the unit of the radius `R` of the sphere,
//!   and returned in angular units (radians as seen from the centre of the sphere)
//! * side `a` is opposite to `A`, `b` to `B` and `c` to `C`
//!
//! Solvers never fail: an impossible triangle leads to `NaN` elements,
//! use [`SphericalTriangle::check`] or [`Problem::try_solve`] to get an error instead.
//!
//! ```rust
//! use sphtri::{Sphere, SasCase};
//!
//! let earth = Sphere::from_radius(6_400_000.0).unwrap();
//! // Sides b = 15 km and c = 13 km, with an angle A of ~41° between them
//! let t = earth.sas(15.0e3, 0.7169006006312598, 13.0e3, SasCase::BAc);
//! assert!((t.dist_a() - 10.0e3).abs() < 1e-3);
//! println!("{}", t);
//! ```

pub mod common;
pub mod problem;
pub mod solvers;
pub mod sphere;
pub mod triangle;

pub use self::{
  common::error::{Element, SphTriError},
  problem::{solve_all, try_solve_all, Problem},
  solvers::{
    aaa, aaa_strict, aas, aas_alternate, asa, asa_strict, asas, sas, ssa, ssa_alternate, sss,
    AasCase, AsaCase, AsasCase, SasCase, SsaCase, DEGENERATE_SIDE,
  },
  sphere::Sphere,
  triangle::SphericalTriangle,
};
