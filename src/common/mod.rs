/// Traits shared by every renderer, and the memoizing [Svg](traits::Svg) wrapper
pub mod traits;

/// Error types returned when a snapshot can't be rendered
pub mod error;

/// Geometry helpers for arcs and fill ratios
pub mod geometry;

/// Static colour tables
pub mod colours;

/// Render configuration
pub mod options;

#[cfg(test)]
pub(crate) mod testing;

pub use error::SvgError;
pub use options::RenderOptions;
pub use traits::{RenderSvg, Svg};
