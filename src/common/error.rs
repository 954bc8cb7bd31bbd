use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SphTriError {
  #[error("Unexpected sphere radius. Expected: finite and > 0. Actual: {r}.")]
  UnexpectedRadius { r: f64 },
  #[error("Domain violation: element {element} is {value} (no such spherical triangle).")]
  DomainViolation { element: Element, value: f64 },
  #[error("Degenerate triangle: side {side} undefined, law of cosines argument {arg} not in [-1, 1].")]
  DegenerateSide { side: Element, arg: f64 },
  #[error("Error initializing the thread pool: {msg}")]
  ThreadPool { msg: String },
}

/// The six elements of a spherical triangle.
/// Side `a` is opposite to vertex angle `A`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
  /// Vertex angle `A`
  AngleA,
  /// Vertex angle `B`
  AngleB,
  /// Vertex angle `C`
  AngleC,
  /// Side `a`
  SideA,
  /// Side `b`
  SideB,
  /// Side `c`
  SideC,
}

impl std::fmt::Display for Element {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::AngleA => "A",
      Self::AngleB => "B",
      Self::AngleC => "C",
      Self::SideA => "a",
      Self::SideB => "b",
      Self::SideC => "c",
    })
  }
}
