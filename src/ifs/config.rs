// src/ifs/config.rs

use crate::math::{
    error::{IfsError, IfsResult},
    geometry::polygon::{AffineMap, Polygon, TransformSet},
    utils::constants::SIZE_WARNING_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Einstellungen der Engine selbst, unabhängig vom konkreten Fraktal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Ab dieser geschätzten Vertex-Anzahl gibt es eine `SizeWarning`.
    pub size_warning_threshold: u64,
    /// Ob Abbildungen ohne Kontraktionseigenschaft gemeldet werden.
    pub check_degenerate_maps: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            size_warning_threshold: SIZE_WARNING_THRESHOLD,
            check_degenerate_maps: true,
        }
    }
}

impl EngineSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size_warning_threshold(mut self, threshold: u64) -> Self {
        self.size_warning_threshold = threshold;
        self
    }

    pub fn with_degenerate_map_check(mut self, enabled: bool) -> Self {
        self.check_degenerate_maps = enabled;
        self
    }

    pub fn validate(&self) -> IfsResult<()> {
        if self.size_warning_threshold == 0 {
            return Err(IfsError::InvalidConfiguration {
                message: "Size warning threshold must be greater than 0.".to_string(),
            });
        }
        Ok(())
    }
}

/// Beschreibung eines Laufs, wie sie eine Konfigurations- oder CLI-Schicht liefert.
///
/// Die Felder sind bewusst roh (leere Listen, negative Iterationen möglich);
/// `validate` lehnt solche Eingaben ab, bevor gerechnet wird.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IfsConfig {
    /// Start-Polygon als Koordinatenpaare
    pub seed: Vec<[f64; 2]>,
    pub transforms: Vec<AffineMap>,
    pub iterations: i64,
}

impl IfsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: Vec<[f64; 2]>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_transform(mut self, map: AffineMap) -> Self {
        self.transforms.push(map);
        self
    }

    pub fn with_transforms(mut self, maps: Vec<AffineMap>) -> Self {
        self.transforms = maps;
        self
    }

    pub fn with_iterations(mut self, iterations: i64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn validate(&self) -> IfsResult<()> {
        self.transform_set()?;
        self.iteration_count()?;
        self.seed_polygon()?;
        Ok(())
    }

    pub fn seed_polygon(&self) -> IfsResult<Polygon> {
        Polygon::from_coords(&self.seed)
    }

    pub fn transform_set(&self) -> IfsResult<TransformSet> {
        TransformSet::new(self.transforms.clone())
    }

    /// Iterationen als `u32`; negative Werte sind ein Eingabefehler.
    pub fn iteration_count(&self) -> IfsResult<u32> {
        if self.iterations < 0 {
            return Err(IfsError::InvalidIterationCount {
                iterations: self.iterations,
            });
        }
        u32::try_from(self.iterations).map_err(|_| IfsError::InvalidConfiguration {
            message: format!(
                "Iteration count {} exceeds the supported maximum of {}.",
                self.iterations,
                u32::MAX
            ),
        })
    }
}
