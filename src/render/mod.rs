//! CPU-side render description
//!
//! Builds colored triangle lists from simulation state. The host owns the
//! actual drawing surface; this module only describes what to draw and how to
//! fit the fixed-resolution surface into the window.

pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use scene::build_scene;
pub use surface::SurfaceFit;
pub use vertex::Vertex;
