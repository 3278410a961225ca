pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{IfsError, IfsResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{IfsError, IfsResult},
        geometry::polygon::{
            AffineMap, AffineTransformable, Degeneracy, Polygon, PolygonCollection,
            PolygonTransformer, TransformSet,
        },
        types::*,
    };
}
