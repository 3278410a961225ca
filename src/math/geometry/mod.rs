// src/math/geometry/mod.rs

pub mod polygon;

pub use self::polygon::{
    AffineMap, AffineTransformable, Polygon, PolygonCollection, PolygonTransformer, TransformSet,
};
