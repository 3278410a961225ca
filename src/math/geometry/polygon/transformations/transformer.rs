// src/math/geometry/polygon/transformations/transformer.rs
use super::affine::{AffineTransformable, PreparedMap, TransformSet};
use crate::math::{geometry::polygon::Polygon, types::Point2D};

/// Wendet alle Abbildungen einer `TransformSet` auf ein Polygon an.
pub struct PolygonTransformer;

impl PolygonTransformer {
    /// Ein Kind-Polygon pro Abbildung, in der Reihenfolge der Abbildungen.
    /// Die Kinder teilen keine Daten mit dem Eltern-Polygon.
    pub fn transform_all(polygon: &Polygon, transforms: &TransformSet) -> Vec<Polygon> {
        transforms
            .iter()
            .map(|map| polygon.transform(map))
            .collect()
    }

    /// Schreibt alle Kinder eines Polygons hintereinander in `out`.
    ///
    /// `out` muss genau `parent.len() * maps.len()` Plätze haben.
    pub(crate) fn expand_into(parent: &[Point2D], maps: &[PreparedMap], out: &mut [Point2D]) {
        debug_assert_eq!(out.len(), parent.len() * maps.len());
        for (map, child) in maps.iter().zip(out.chunks_exact_mut(parent.len())) {
            for (slot, &vertex) in child.iter_mut().zip(parent) {
                *slot = map.apply(vertex);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::transformations::affine::AffineMap;
    use approx::assert_abs_diff_eq;

    fn unit_square() -> Polygon {
        Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap()
    }

    #[test]
    fn test_one_child_per_map_in_order() {
        let transforms = TransformSet::new(vec![
            AffineMap::with_shift(0.5, 0.0, 0.0, 0.0),
            AffineMap::with_shift(0.5, 0.0, 0.5, 0.0),
            AffineMap::with_shift(0.5, 0.0, 0.0, 0.5),
        ])
        .unwrap();

        let children = PolygonTransformer::transform_all(&unit_square(), &transforms);
        assert_eq!(children.len(), 3);
        for child in &children {
            assert_eq!(child.len(), 4);
        }
        // First vertex of each child is the shift of its map
        assert_eq!(children[0].vertices()[0], Point2D::new(0.0, 0.0));
        assert_eq!(children[1].vertices()[0], Point2D::new(0.5, 0.0));
        assert_eq!(children[2].vertices()[0], Point2D::new(0.0, 0.5));
        // Vertex order inside a child follows the parent
        assert_eq!(children[1].vertices()[2], Point2D::new(1.0, 0.5));
    }

    #[test]
    fn test_expand_into_matches_transform_all() {
        let square = unit_square();
        let transforms = TransformSet::new(vec![
            AffineMap::with_shift(0.5, 0.3, 0.1, 0.0),
            AffineMap::with_shift(0.25, -1.2, 0.0, 0.7),
        ])
        .unwrap();

        let expected = PolygonTransformer::transform_all(&square, &transforms);
        let mut out = vec![Point2D::origin(); square.len() * transforms.len()];
        PolygonTransformer::expand_into(square.vertices(), &transforms.prepared(), &mut out);

        let flat: Vec<Point2D> = expected
            .iter()
            .flat_map(|p| p.vertices().iter().copied())
            .collect();
        for (a, b) in out.iter().zip(&flat) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        }
    }
}
