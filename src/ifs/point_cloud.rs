// src/ifs/point_cloud.rs

use super::{
    diagnostics::Diagnostic,
    engine::{IfsEngine, RunState},
    growth::GrowthEstimator,
};
use crate::math::{
    error::{IfsError, IfsResult},
    geometry::polygon::TransformSet,
    types::{Bounds2D, Point2D},
};
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ergebnis eines Punktwolken-Laufs.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloudOutput {
    pub points: Vec<Point2D>,
    pub generation: u32,
    pub diagnostics: Vec<Diagnostic>,
}

impl PointCloudOutput {
    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.points.iter().copied())
    }
}

/// IFS auf einer losen Punktwolke statt auf Polygonen.
///
/// Die Reihenfolge ist hier umgekehrt: äußere Schleife über die Abbildungen,
/// innere über die Punkte. Block `k` der neuen Wolke ist das Bild der ganzen
/// alten Wolke unter Abbildung `k`.
pub struct PointCloudIfs<'a> {
    engine: &'a IfsEngine,
}

impl<'a> PointCloudIfs<'a> {
    pub fn new(engine: &'a IfsEngine) -> Self {
        Self { engine }
    }

    pub fn run(
        &self,
        points: &[Point2D],
        transforms: &TransformSet,
        iterations: u32,
    ) -> IfsResult<PointCloudOutput> {
        if points.is_empty() {
            return Err(IfsError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }

        let sink = self.engine.preflight(
            transforms,
            GrowthEstimator::estimate_cloud(points.len(), transforms.len(), iterations),
        );

        info!(
            points = points.len(),
            transforms = transforms.len(),
            iterations,
            "Starting point cloud IFS run"
        );

        let maps = transforms.prepared();
        let mut cloud = points.to_vec();
        let mut state = RunState::after(0, iterations);

        while let RunState::Iterating { rounds_done } = state {
            self.engine.check_cancelled(rounds_done)?;
            let generation = rounds_done + 1;

            let block = cloud.len();
            let requested = block
                .checked_mul(maps.len())
                .ok_or(IfsError::ResourceExhaustion {
                    generation,
                    requested: usize::MAX,
                })?;
            let mut next: Vec<Point2D> = Vec::new();
            next.try_reserve_exact(requested)
                .map_err(|_| IfsError::ResourceExhaustion {
                    generation,
                    requested,
                })?;
            next.resize(requested, Point2D::origin());

            #[cfg(feature = "parallel")]
            {
                next.par_chunks_exact_mut(block)
                    .zip(maps.par_iter())
                    .for_each(|(out, map)| {
                        for (slot, &point) in out.iter_mut().zip(&cloud) {
                            *slot = map.apply(point);
                        }
                    });
            }

            #[cfg(not(feature = "parallel"))]
            {
                for (out, map) in next.chunks_exact_mut(block).zip(&maps) {
                    for (slot, &point) in out.iter_mut().zip(&cloud) {
                        *slot = map.apply(point);
                    }
                }
            }

            cloud = next;
            debug!(generation, points = cloud.len(), "Round complete");
            state = RunState::after(generation, iterations);
        }

        info!(points = cloud.len(), "Point cloud IFS run finished");

        Ok(PointCloudOutput {
            points: cloud,
            generation: iterations,
            diagnostics: sink.into_vec(),
        })
    }
}
