// src/math/geometry/polygon/collection.rs

use super::core::{Polygon, to_geo_polygon};
use super::transformations::{PolygonTransformer, TransformSet};
use crate::math::{
    error::*,
    types::{Bounds2D, Point2D},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Eine Generation von Polygonen in einem flachen Vertex-Puffer.
///
/// Affine Abbildungen ändern die Vertex-Anzahl nicht, daher haben alle
/// Polygone einer Generation dieselbe Länge (`stride`). Polygon `i` liegt
/// in `vertices[i * stride..(i + 1) * stride]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCollection {
    vertices: Vec<Point2D>,
    stride: usize,
    generation: u32,
}

impl PolygonCollection {
    /// Generation 0: nur das Start-Polygon.
    pub fn from_seed(seed: &Polygon) -> Self {
        Self {
            vertices: seed.vertices().to_vec(),
            stride: seed.len(),
            generation: 0,
        }
    }

    /// Anzahl der Polygone
    pub fn len(&self) -> usize {
        self.vertices.len() / self.stride
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Anzahl der abgeschlossenen Runden, die zu dieser Sammlung geführt haben.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn vertices_per_polygon(&self) -> usize {
        self.stride
    }

    /// Gesamtzahl der Vertices über alle Polygone
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn polygon(&self, index: usize) -> Option<&[Point2D]> {
        let start = index.checked_mul(self.stride)?;
        self.vertices.get(start..start.checked_add(self.stride)?)
    }

    pub fn iter(&self) -> std::slice::ChunksExact<'_, Point2D> {
        self.vertices.chunks_exact(self.stride)
    }

    /// Der rohe Vertex-Puffer, Polygon für Polygon.
    pub fn as_flat(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn to_polygons(&self) -> Vec<Polygon> {
        self.iter()
            .map(|vertices| Polygon::from_nonempty(vertices.to_vec()))
            .collect()
    }

    pub fn to_multi_polygon(&self) -> geo::MultiPolygon<f64> {
        geo::MultiPolygon::new(self.iter().map(to_geo_polygon).collect())
    }

    /// Bounding Box über alle Vertices aller Polygone.
    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.vertices.iter().copied())
    }

    /// Berechnet die nächste Generation: äußere Schleife über die Polygone,
    /// innere über die Abbildungen in ihrer Reihenfolge.
    ///
    /// Der Zielpuffer wird vorab mit `try_reserve_exact` angelegt; schlägt das
    /// fehl, gibt es keine Teilergebnisse.
    pub fn expand(&self, transforms: &TransformSet) -> IfsResult<Self> {
        let generation = self.generation.saturating_add(1);
        let overflow = IfsError::ResourceExhaustion {
            generation,
            requested: usize::MAX,
        };
        let block = self
            .stride
            .checked_mul(transforms.len())
            .ok_or_else(|| overflow.clone())?;
        let requested = self.len().checked_mul(block).ok_or(overflow)?;

        let mut next: Vec<Point2D> = Vec::new();
        next.try_reserve_exact(requested)
            .map_err(|_| IfsError::ResourceExhaustion {
                generation,
                requested,
            })?;
        next.resize(requested, Point2D::origin());

        let maps = transforms.prepared();

        #[cfg(feature = "parallel")]
        {
            next.par_chunks_exact_mut(block)
                .zip(self.vertices.par_chunks_exact(self.stride))
                .for_each(|(out, parent)| PolygonTransformer::expand_into(parent, &maps, out));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (out, parent) in next.chunks_exact_mut(block).zip(self.iter()) {
                PolygonTransformer::expand_into(parent, &maps, out);
            }
        }

        Ok(Self {
            vertices: next,
            stride: self.stride,
            generation,
        })
    }
}

impl<'a> IntoIterator for &'a PolygonCollection {
    type Item = &'a [Point2D];
    type IntoIter = std::slice::ChunksExact<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
