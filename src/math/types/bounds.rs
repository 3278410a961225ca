// src/math/types/bounds.rs

use crate::math::types::Point2D;
use serde::{Deserialize, Serialize};

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        nalgebra::center(&self.min, &self.max)
    }

    /// Vergrößert jede Seite um `fraction · |Koordinate|`.
    ///
    /// Entspricht der Regel, nach der ein Plot seine Achsengrenzen um das
    /// Ergebnis legt: eine Koordinate von 0 bekommt keinen Rand.
    pub fn padded(&self, fraction: f64) -> Self {
        Self {
            min: Point2D::new(
                self.min.x - fraction * self.min.x.abs(),
                self.min.y - fraction * self.min.y.abs(),
            ),
            max: Point2D::new(
                self.max.x + fraction * self.max.x.abs(),
                self.max.y + fraction * self.max.y.abs(),
            ),
        }
    }
}
