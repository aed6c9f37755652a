//! Browser-side implementations of the render seams.

pub mod bridge;
pub mod plotly;
pub mod surface;
pub mod theme;
