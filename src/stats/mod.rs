//! Statistical routines: synthetic sample generation, least-squares fitting,
//! and distribution functions.
//!
//! Every routine is a pure function over its explicit arguments. The
//! generators seed a local `StdRng` per call, so identical seed and
//! parameters always reproduce the same output and no pseudo-random state is
//! shared across calls.

pub mod dist;
pub mod fit;
pub mod generate;

pub use dist::*;
pub use fit::*;
pub use generate::*;
