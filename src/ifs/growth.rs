// src/ifs/growth.rs

use crate::math::utils::constants::SIZE_WARNING_THRESHOLD;

/// Schätzt die Ausgabegröße eines Laufs, bevor gerechnet wird.
pub struct GrowthEstimator;

impl GrowthEstimator {
    /// `(vertex_count · transform_count) ^ iterations`, sättigend bei `u64::MAX`.
    ///
    /// Obere Schranke für die Vertex-Anzahl nach `iterations` Runden; die
    /// tatsächliche Anzahl ist `vertex_count · transform_count ^ iterations`.
    pub fn estimate(vertex_count: usize, transform_count: usize, iterations: u32) -> u64 {
        let base = (vertex_count as u64).saturating_mul(transform_count as u64);
        base.saturating_pow(iterations)
    }

    /// Exakte Anzahl der Punkte einer Punktwolke nach `iterations` Runden,
    /// sättigend bei `u64::MAX`.
    pub fn estimate_cloud(point_count: usize, transform_count: usize, iterations: u32) -> u64 {
        (transform_count as u64)
            .saturating_pow(iterations)
            .saturating_mul(point_count as u64)
    }

    /// Prüft gegen die Standardschwelle von 10.000.000.
    pub fn exceeds_default_threshold(
        vertex_count: usize,
        transform_count: usize,
        iterations: u32,
    ) -> bool {
        Self::estimate(vertex_count, transform_count, iterations) > SIZE_WARNING_THRESHOLD
    }
}
