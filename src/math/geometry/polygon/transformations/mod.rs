// src/math/geometry/polygon/transformations/mod.rs
pub mod affine;
pub mod transformer;

pub use affine::{AffineMap, AffineTransformable, Degeneracy, TransformSet};
pub use transformer::PolygonTransformer;
