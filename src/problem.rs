//! Solving problems given as data, one by one or in batch.
//!
//! A [`Problem`] gathers the known elements of a triangle and the case they correspond to.
//! The batch solvers keep the input order; with the `rayon` feature they may be multi-threaded.

#[cfg(feature = "rayon")]
use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};

use log::{debug, trace};

use crate::{
  common::error::SphTriError,
  solvers::{aaa_strict, asa_strict, AasCase, AsaCase, AsasCase, SasCase, SsaCase},
  sphere::Sphere,
  triangle::SphericalTriangle,
};

/// Known elements of a triangle.
/// Sides are in the unit of the radius of the [`Sphere`] used to solve the problem,
/// angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Problem {
  /// Three sides `(a, b, c)`
  Sss { side1: f64, side2: f64, side3: f64 },
  /// Three angles `(A, B, C)`
  Aaa {
    vertex1: f64,
    vertex2: f64,
    vertex3: f64,
  },
  /// Two sides and the included angle
  Sas {
    side1: f64,
    vertex: f64,
    side2: f64,
    case: SasCase,
  },
  /// Two sides and the angle opposite to the first one
  Ssa {
    side1: f64,
    side2: f64,
    vertex1: f64,
    case: SsaCase,
  },
  /// Two angles and the included side
  Asa {
    vertex1: f64,
    side: f64,
    vertex2: f64,
    case: AsaCase,
  },
  /// Two angles and the side opposite to the first one
  Aas {
    vertex1: f64,
    vertex2: f64,
    side1: f64,
    case: AasCase,
  },
  /// Two sides and their two opposite angles
  Asas {
    side1: f64,
    side2: f64,
    vertex1: f64,
    vertex2: f64,
    case: AsasCase,
  },
}

impl Problem {
  /// Short name of the set of known elements.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Sss { .. } => "SSS",
      Self::Aaa { .. } => "AAA",
      Self::Sas { .. } => "SAS",
      Self::Ssa { .. } => "SSA",
      Self::Asa { .. } => "ASA",
      Self::Aas { .. } => "AAS",
      Self::Asas { .. } => "ASAS",
    }
  }

  /// Solves the problem on the given sphere.
  /// Never fails: impossible elements are `NaN` and the AAA degenerate fallback applies.
  pub fn solve(&self, sphere: &Sphere) -> SphericalTriangle {
    trace!("Solving {:?} on sphere of radius {}", self, sphere.radius());
    match *self {
      Self::Sss {
        side1,
        side2,
        side3,
      } => sphere.sss(side1, side2, side3),
      Self::Aaa {
        vertex1,
        vertex2,
        vertex3,
      } => sphere.aaa(vertex1, vertex2, vertex3),
      Self::Sas {
        side1,
        vertex,
        side2,
        case,
      } => sphere.sas(side1, vertex, side2, case),
      Self::Ssa {
        side1,
        side2,
        vertex1,
        case,
      } => sphere.ssa(side1, side2, vertex1, case),
      Self::Asa {
        vertex1,
        side,
        vertex2,
        case,
      } => sphere.asa(vertex1, side, vertex2, case),
      Self::Aas {
        vertex1,
        vertex2,
        side1,
        case,
      } => sphere.aas(vertex1, vertex2, side1, case),
      Self::Asas {
        side1,
        side2,
        vertex1,
        vertex2,
        case,
      } => sphere.asas(side1, side2, vertex1, vertex2, case),
    }
  }

  /// Solves the problem on the given sphere, returning an error instead of `NaN` elements
  /// or of the AAA degenerate-side fallback value.
  pub fn try_solve(&self, sphere: &Sphere) -> Result<SphericalTriangle, SphTriError> {
    let r = sphere.radius();
    match *self {
      Self::Aaa {
        vertex1,
        vertex2,
        vertex3,
      } => aaa_strict(vertex1, vertex2, vertex3, r),
      Self::Asa {
        vertex1,
        side,
        vertex2,
        case,
      } => asa_strict(vertex1, side, vertex2, r, case),
      _ => Ok(self.solve(sphere)),
    }
    .and_then(SphericalTriangle::check)
    .map_err(|e| {
      debug!("{} problem {:?} has no solution: {}", self.kind(), self, e);
      e
    })
  }
}

/// Number of threads to be used by the batch solvers.
/// * `n_threads`: with rayon feature, none returns the maximum of threads available, else returns 1.
fn resolve_n_threads(n_threads: Option<u16>) -> u16 {
  #[cfg(feature = "rayon")]
  let n_threads = n_threads.unwrap_or_else(|| num_cpus::get() as u16);
  #[cfg(not(feature = "rayon"))]
  let n_threads = n_threads.unwrap_or(1);
  n_threads
}

#[cfg(feature = "rayon")]
pub fn get_thread_pool(n_threads: u16) -> Result<ThreadPool, SphTriError> {
  ThreadPoolBuilder::new()
    .num_threads((n_threads as usize).min(num_cpus::get()))
    .build()
    .map_err(|e| SphTriError::ThreadPool { msg: e.to_string() })
}

/// Solves all the given problems on the same sphere, see [`Problem::solve`].
/// # params
/// * `problems`: the problems to be solved
/// * `sphere`: the sphere all triangles lie on
/// * `n_threads`: with rayon feature, none returns the maximum of threads available, else returns 1.
///
/// # Output
/// The triangles, in the same order as the input problems.
pub fn solve_all(
  problems: &[Problem],
  sphere: &Sphere,
  n_threads: Option<u16>,
) -> Result<Vec<SphericalTriangle>, SphTriError> {
  let n_threads = resolve_n_threads(n_threads);
  debug!(
    "Solving {} problems using {} thread(s)",
    problems.len(),
    n_threads
  );
  if n_threads <= 1 {
    Ok(problems.iter().map(|p| p.solve(sphere)).collect())
  } else {
    #[cfg(not(feature = "rayon"))]
    let triangles = Ok(problems.iter().map(|p| p.solve(sphere)).collect());
    #[cfg(feature = "rayon")]
    let triangles = get_thread_pool(n_threads)
      .map(|pool| pool.install(|| problems.par_iter().map(|p| p.solve(sphere)).collect()));
    triangles
  }
}

/// Same as [`solve_all`], but using [`Problem::try_solve`]: each problem gets its own result.
/// The outer error only reports a thread pool failure.
pub fn try_solve_all(
  problems: &[Problem],
  sphere: &Sphere,
  n_threads: Option<u16>,
) -> Result<Vec<Result<SphericalTriangle, SphTriError>>, SphTriError> {
  let n_threads = resolve_n_threads(n_threads);
  if n_threads <= 1 {
    Ok(problems.iter().map(|p| p.try_solve(sphere)).collect())
  } else {
    #[cfg(not(feature = "rayon"))]
    let results = Ok(problems.iter().map(|p| p.try_solve(sphere)).collect());
    #[cfg(feature = "rayon")]
    let results = get_thread_pool(n_threads).map(|pool| {
      pool.install(|| {
        problems
          .par_iter()
          .map(|p| p.try_solve(sphere))
          .collect()
      })
    });
    results
  }
}
