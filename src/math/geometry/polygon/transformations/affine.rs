// src/math/geometry/polygon/transformations/affine.rs
use super::super::Polygon;
use crate::math::{error::*, types::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ähnlichkeitsabbildung für IFS: erst Rotation, dann Skalierung, dann Verschiebung.
///
/// `apply(p) = scale · R(rotation) · p + shift` mit
/// `R(θ) = [[cos θ, -sin θ], [sin θ, cos θ]]`.
///
/// Für echte Fraktale sollte `scale < 1` gelten (Kontraktion). Das wird hier
/// nicht erzwungen; nicht-positive oder nicht-endliche Werte meldet der
/// Engine-Lauf nur als Diagnose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineMap {
    pub scale: f64,
    /// Rotationswinkel in Radiant
    pub rotation: f64,
    pub shift: Vector2D,
}

impl AffineMap {
    pub fn new(scale: f64, rotation: f64, shift: Vector2D) -> Self {
        Self {
            scale,
            rotation,
            shift,
        }
    }

    /// Identitäts-Abbildung
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, Vector2D::zeros())
    }

    /// Kurzform mit Verschiebung als Koordinatenpaar
    pub fn with_shift(scale: f64, rotation: f64, shift_x: f64, shift_y: f64) -> Self {
        Self::new(scale, rotation, Vector2D::new(shift_x, shift_y))
    }

    /// Der lineare Anteil `scale · R(rotation)` als 2x2-Matrix.
    pub fn linear_part(&self) -> Matrix2<f64> {
        let (sin_a, cos_a) = self.rotation.sin_cos();
        Matrix2::new(cos_a, -sin_a, sin_a, cos_a) * self.scale
    }

    /// Transformiert einen Punkt
    pub fn apply(&self, point: Point2D) -> Point2D {
        PreparedMap::from(self).apply(point)
    }

    /// Prüft ob die Abbildung eine echte Kontraktion ist (`0 < scale < 1`).
    pub fn is_contraction(&self) -> bool {
        self.scale > 0.0 && self.scale < 1.0
    }

    /// Erster Parameter, der die Kontraktionsannahme verletzt, falls vorhanden.
    ///
    /// Geprüft wird in der Reihenfolge Skalierung, Rotation, Verschiebung.
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        if !self.scale.is_finite() {
            Some(Degeneracy::NonFiniteScale)
        } else if self.scale <= 0.0 {
            Some(Degeneracy::NonPositiveScale)
        } else if !self.rotation.is_finite() {
            Some(Degeneracy::NonFiniteRotation)
        } else if !self.shift.iter().all(|c| c.is_finite()) {
            Some(Degeneracy::NonFiniteShift)
        } else {
            None
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.degeneracy().is_some()
    }
}

/// Grund, warum eine Abbildung als degeneriert gilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degeneracy {
    /// `scale <= 0`: Punkt- oder Spiegelabbildung statt Kontraktion
    NonPositiveScale,
    NonFiniteScale,
    NonFiniteRotation,
    NonFiniteShift,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Degeneracy::NonPositiveScale => "non-positive scale",
            Degeneracy::NonFiniteScale => "non-finite scale",
            Degeneracy::NonFiniteRotation => "non-finite rotation",
            Degeneracy::NonFiniteShift => "non-finite shift",
        };
        f.write_str(text)
    }
}

impl Default for AffineMap {
    fn default() -> Self {
        Self::identity()
    }
}

/// Vorberechnete Form einer `AffineMap` (Matrix statt Winkel), damit sin/cos
/// pro Runde nur einmal pro Abbildung ausgewertet werden.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PreparedMap {
    linear: Matrix2<f64>,
    shift: Vector2D,
}

impl PreparedMap {
    #[inline]
    pub(crate) fn apply(&self, point: Point2D) -> Point2D {
        Point2D::from(self.linear * point.coords + self.shift)
    }
}

impl From<&AffineMap> for PreparedMap {
    fn from(map: &AffineMap) -> Self {
        Self {
            linear: map.linear_part(),
            shift: map.shift,
        }
    }
}

/// Geordnete, nicht-leere Menge von Abbildungen.
///
/// Die Reihenfolge bestimmt die Reihenfolge der Kind-Polygone, nicht das
/// mathematische Ergebnis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AffineMap>", into = "Vec<AffineMap>")]
pub struct TransformSet {
    maps: Vec<AffineMap>,
}

impl TransformSet {
    pub fn new(maps: Vec<AffineMap>) -> IfsResult<Self> {
        if maps.is_empty() {
            return Err(IfsError::InvalidTransformSet);
        }
        Ok(Self { maps })
    }

    pub fn maps(&self) -> &[AffineMap] {
        &self.maps
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AffineMap> {
        self.maps.iter()
    }

    /// Index, Abbildung und Grund für jede degenerierte Abbildung.
    pub fn degenerate_maps(&self) -> impl Iterator<Item = (usize, &AffineMap, Degeneracy)> {
        self.maps
            .iter()
            .enumerate()
            .filter_map(|(index, map)| map.degeneracy().map(|reason| (index, map, reason)))
    }

    pub(crate) fn prepared(&self) -> Vec<PreparedMap> {
        self.maps.iter().map(PreparedMap::from).collect()
    }
}

impl TryFrom<Vec<AffineMap>> for TransformSet {
    type Error = IfsError;

    fn try_from(maps: Vec<AffineMap>) -> IfsResult<Self> {
        Self::new(maps)
    }
}

impl From<TransformSet> for Vec<AffineMap> {
    fn from(set: TransformSet) -> Self {
        set.maps
    }
}

impl<'a> IntoIterator for &'a TransformSet {
    type Item = &'a AffineMap;
    type IntoIter = std::slice::Iter<'a, AffineMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.maps.iter()
    }
}

/// Trait für affine Transformationen
pub trait AffineTransformable {
    /// Erzeugt eine transformierte Kopie; das Original bleibt unverändert.
    fn transform(&self, map: &AffineMap) -> Self
    where
        Self: Sized;
}

impl AffineTransformable for Polygon {
    fn transform(&self, map: &AffineMap) -> Self {
        let prepared = PreparedMap::from(map);
        let vertices: Vec<Point2D> = self
            .vertices()
            .iter()
            .map(|&vertex| prepared.apply(vertex))
            .collect();
        // Vertex-Anzahl bleibt erhalten, das Polygon ist also nie leer.
        Polygon::from_nonempty(vertices)
    }
}

impl AffineTransformable for Point2D {
    fn transform(&self, map: &AffineMap) -> Self {
        map.apply(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::constants::{EPSILON, LOOSE_EPSILON};
    use approx::assert_abs_diff_eq;
    use rand::Rng;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identity_map_random_points() {
        let identity = AffineMap::identity();
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let p = Point2D::new(rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3));
            let q = identity.apply(p);
            assert_abs_diff_eq!(q.x, p.x, epsilon = EPSILON);
            assert_abs_diff_eq!(q.y, p.y, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_quarter_rotation() {
        let map = AffineMap::with_shift(1.0, FRAC_PI_2, 0.0, 0.0);
        let q = map.apply(Point2D::new(1.0, 0.0));
        assert_abs_diff_eq!(q.x, 0.0, epsilon = LOOSE_EPSILON);
        assert_abs_diff_eq!(q.y, 1.0, epsilon = LOOSE_EPSILON);
    }

    #[test]
    fn test_rotate_then_scale_then_shift() {
        // (1, 0) -> rotate 180° -> (-1, 0) -> scale 0.5 -> (-0.5, 0) -> shift (2, 3)
        let map = AffineMap::with_shift(0.5, PI, 2.0, 3.0);
        let q = map.apply(Point2D::new(1.0, 0.0));
        assert_abs_diff_eq!(q.x, 1.5, epsilon = LOOSE_EPSILON);
        assert_abs_diff_eq!(q.y, 3.0, epsilon = LOOSE_EPSILON);
    }

    #[test]
    fn test_linear_part_matches_rotation_matrix() {
        let map = AffineMap::with_shift(2.0, FRAC_PI_2, 0.0, 0.0);
        let m = map.linear_part();
        assert_abs_diff_eq!(m[(0, 0)], 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(m[(0, 1)], -2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(m[(1, 0)], 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(m[(1, 1)], 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(!AffineMap::with_shift(0.5, 0.0, 0.0, 0.0).is_degenerate());
        assert!(AffineMap::with_shift(0.0, 0.0, 0.0, 0.0).is_degenerate());
        assert!(AffineMap::with_shift(-0.5, 0.0, 0.0, 0.0).is_degenerate());
        assert!(AffineMap::with_shift(f64::NAN, 0.0, 0.0, 0.0).is_degenerate());
        assert!(AffineMap::with_shift(0.5, f64::INFINITY, 0.0, 0.0).is_degenerate());
        assert!(AffineMap::with_shift(0.5, 0.0, f64::NAN, 0.0).is_degenerate());

        let reason = |s, r, x| AffineMap::with_shift(s, r, x, 0.0).degeneracy();
        assert_eq!(reason(0.5, 0.0, 0.0), None);
        assert_eq!(reason(0.0, 0.0, 0.0), Some(Degeneracy::NonPositiveScale));
        assert_eq!(reason(-0.5, 0.0, 0.0), Some(Degeneracy::NonPositiveScale));
        assert_eq!(reason(f64::NAN, 0.0, 0.0), Some(Degeneracy::NonFiniteScale));
        assert_eq!(reason(f64::INFINITY, 0.0, 0.0), Some(Degeneracy::NonFiniteScale));
        assert_eq!(reason(0.5, f64::NAN, 0.0), Some(Degeneracy::NonFiniteRotation));
        assert_eq!(reason(0.5, 0.0, f64::NEG_INFINITY), Some(Degeneracy::NonFiniteShift));
        // Scale is reported before the shift
        assert_eq!(reason(-1.0, 0.0, f64::NAN), Some(Degeneracy::NonPositiveScale));

        assert!(AffineMap::with_shift(0.5, 0.0, 0.0, 0.0).is_contraction());
        assert!(!AffineMap::identity().is_contraction());
    }

    #[test]
    fn test_empty_transform_set_rejected() {
        assert_eq!(
            TransformSet::new(Vec::new()),
            Err(IfsError::InvalidTransformSet)
        );
    }

    #[test]
    fn test_degenerate_maps_indices() {
        let set = TransformSet::new(vec![
            AffineMap::with_shift(0.5, 0.0, 0.0, 0.0),
            AffineMap::with_shift(-0.5, 0.0, 0.0, 0.0),
            AffineMap::with_shift(0.5, 0.0, 1.0, 0.0),
            AffineMap::with_shift(0.0, 0.0, 0.0, 0.0),
        ])
        .unwrap();
        let found: Vec<(usize, Degeneracy)> =
            set.degenerate_maps().map(|(i, _, reason)| (i, reason)).collect();
        assert_eq!(
            found,
            vec![
                (1, Degeneracy::NonPositiveScale),
                (3, Degeneracy::NonPositiveScale)
            ]
        );
    }

    #[test]
    fn test_polygon_transform_keeps_original() {
        let polygon = Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap();
        let moved = polygon.transform(&AffineMap::with_shift(1.0, 0.0, 1.0, 1.0));

        assert_eq!(polygon.vertices()[1], Point2D::new(1.0, 0.0));
        assert_eq!(moved.vertices()[1], Point2D::new(2.0, 1.0));
        assert_eq!(moved.len(), polygon.len());
    }

    #[test]
    fn test_map_serde_shape() {
        let map = AffineMap::with_shift(0.5, 0.25, 1.0, -1.0);
        let json = serde_json::to_string(&map).unwrap();
        let back: AffineMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);

        let parsed: AffineMap =
            serde_json::from_str(r#"{"scale": 0.5, "rotation": 0.0, "shift": [0.25, 0.5]}"#)
                .unwrap();
        assert_eq!(parsed.shift, Vector2D::new(0.25, 0.5));

        let empty: Result<TransformSet, _> = serde_json::from_str("[]");
        assert!(empty.is_err());
    }
}
