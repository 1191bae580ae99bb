//! Terminal plotting fallbacks.

pub mod ascii;

pub use ascii::*;
