//! Geometry re-exports shared across the workspace.

pub use nalgebra::Vector3;

/// Shorthand for building a `Vector3<f64>` position.
pub fn vec3(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}
