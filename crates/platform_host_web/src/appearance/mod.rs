//! Browser appearance adapters.

pub mod color_scheme;
pub mod surface;
