// src/math/geometry/polygon/core.rs

use crate::math::{
    error::*,
    types::{Bounds2D, Point2D},
};
use serde::{Deserialize, Serialize};

/// Polygon-Struktur, die eine Sequenz von 2D-Punkten (Vertices) darstellt.
///
/// Das Polygon gilt immer als geschlossen: der letzte Vertex ist implizit mit
/// dem ersten verbunden, ohne dass der erste Punkt am Ende dupliziert wird.
/// Nach der Erstellung wird ein Polygon nicht mehr verändert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2D>", into = "Vec<Point2D>")]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Erstellt ein neues Polygon. Mindestens ein Vertex ist erforderlich.
    pub fn new(vertices: Vec<Point2D>) -> IfsResult<Self> {
        if vertices.is_empty() {
            return Err(IfsError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }
        Ok(Self { vertices })
    }

    /// Für Vertex-Listen, die aus einem gültigen Polygon abgeleitet wurden.
    pub(crate) fn from_nonempty(vertices: Vec<Point2D>) -> Self {
        debug_assert!(!vertices.is_empty());
        Self { vertices }
    }

    /// Erstellt ein Polygon aus rohen Koordinatenpaaren.
    pub fn from_coords(coords: &[[f64; 2]]) -> IfsResult<Self> {
        Self::new(coords.iter().map(|&[x, y]| Point2D::new(x, y)).collect())
    }

    /// Gibt einen Slice der Vertices zurück.
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Anzahl der Vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Immer `false`, ein Polygon hat mindestens einen Vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Berechnet die Bounding Box des Polygons.
    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.vertices.iter().copied())
    }

    /// Konvertiert in ein `geo::Polygon` ohne Löcher.
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        to_geo_polygon(&self.vertices)
    }
}

impl TryFrom<Vec<Point2D>> for Polygon {
    type Error = IfsError;

    fn try_from(vertices: Vec<Point2D>) -> IfsResult<Self> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point2D> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

/// Baut ein `geo::Polygon` aus einem Vertex-Slice; `geo` schließt den Ring selbst.
pub(crate) fn to_geo_polygon(vertices: &[Point2D]) -> geo::Polygon<f64> {
    let exterior: geo::LineString<f64> = vertices
        .iter()
        .map(|p| geo::Coord { x: p.x, y: p.y })
        .collect();
    geo::Polygon::new(exterior, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_polygon_rejected() {
        let result = Polygon::new(Vec::new());
        assert_eq!(
            result,
            Err(IfsError::InsufficientPoints {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_single_vertex_is_valid() {
        let polygon = Polygon::from_coords(&[[0.5, 0.5]]).unwrap();
        assert_eq!(polygon.len(), 1);
        assert!(!polygon.is_empty());
    }

    #[test]
    fn test_vertex_order_preserved() {
        let coords = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let polygon = Polygon::from_coords(&coords).unwrap();
        for (vertex, [x, y]) in polygon.vertices().iter().zip(coords) {
            assert_eq!(*vertex, Point2D::new(x, y));
        }
    }

    #[test]
    fn test_polygon_bounds() {
        let polygon = Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.5, 2.0]]).unwrap();
        let bounds = polygon.bounds().unwrap();
        assert_eq!(bounds.min, Point2D::new(0.0, 0.0));
        assert_eq!(bounds.max, Point2D::new(1.0, 2.0));
    }

    #[test]
    fn test_to_geo_closes_ring() {
        let polygon = Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap();
        let geo_polygon = polygon.to_geo();
        // 3 vertices + closing coordinate
        assert_eq!(geo_polygon.exterior().0.len(), 4);
        assert!(geo_polygon.interiors().is_empty());
    }

    #[test]
    fn test_serde_rejects_empty_polygon() {
        let parsed: Result<Polygon, _> = serde_json::from_str("[]");
        assert!(parsed.is_err());

        let parsed: Polygon = serde_json::from_str("[[0.0, 1.0], [2.0, 3.0]]").unwrap();
        assert_eq!(parsed.vertices()[1], Point2D::new(2.0, 3.0));
    }
}
