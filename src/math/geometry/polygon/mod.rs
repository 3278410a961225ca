// src/math/geometry/polygon/mod.rs

pub mod collection; // Flache, generationsweise Polygon-Sammlung
pub mod core; // Enthält die Polygon-Struktur selbst
pub mod transformations; // Affine Abbildungen und deren Anwendung auf Polygone

pub use self::collection::PolygonCollection;
pub use self::core::Polygon;
pub use self::transformations::{
    AffineMap, AffineTransformable, Degeneracy, PolygonTransformer, TransformSet,
};
