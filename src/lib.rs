//! Erzeugung selbstähnlicher Fraktale über iterierte Funktionensysteme (IFS).
//!
//! Ein Start-Polygon wird Runde für Runde mit jeder Abbildung einer
//! `TransformSet` abgebildet; nach `n` Runden liegen `|T|^n` Polygone vor,
//! die der Attraktor-Approximation entsprechen. Rendering gehört nicht dazu.

pub mod ifs;
pub mod math;

pub use ifs::{
    CancellationToken, Diagnostic, EngineSettings, GrowthEstimator, IfsConfig, IfsEngine,
    IfsOutput, PointCloudIfs, PointCloudOutput,
};
pub use math::{
    error::{IfsError, IfsResult},
    geometry::polygon::{
        AffineMap, AffineTransformable, Degeneracy, Polygon, PolygonCollection,
        PolygonTransformer, TransformSet,
    },
    types::{Bounds2D, Point2D, Vector2D},
};
