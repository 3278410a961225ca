// src/ifs/engine.rs

use super::{
    cancel::CancellationToken,
    config::{EngineSettings, IfsConfig},
    diagnostics::{Diagnostic, DiagnosticSink},
    growth::GrowthEstimator,
};
use crate::math::{
    error::{IfsError, IfsResult},
    geometry::polygon::{Polygon, PolygonCollection, TransformSet},
};
use tracing::{debug, info};

/// Ergebnis eines Laufs: die letzte Generation plus alle Hinweise.
#[derive(Debug, Clone, PartialEq)]
pub struct IfsOutput {
    pub polygons: PolygonCollection,
    pub diagnostics: Vec<Diagnostic>,
}

impl IfsOutput {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Zustand der Iterationsschleife.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Iterating { rounds_done: u32 },
    Done,
}

impl RunState {
    pub(crate) fn after(rounds_done: u32, iterations: u32) -> Self {
        if rounds_done < iterations {
            RunState::Iterating { rounds_done }
        } else {
            RunState::Done
        }
    }
}

/// Treibt die Iteration: pro Runde wird jede Generation vollständig durch
/// die Vereinigung aller Kind-Polygone ersetzt.
#[derive(Debug, Clone, Default)]
pub struct IfsEngine {
    settings: EngineSettings,
    cancellation: Option<CancellationToken>,
}

impl IfsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: EngineSettings) -> IfsResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            cancellation: None,
        })
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Führt `iterations` Runden aus.
    ///
    /// Ergebnis: `|transforms|^iterations` Polygone mit je `|seed|` Vertices,
    /// sortiert nach Eltern-Polygon und innerhalb davon nach Abbildung.
    pub fn run(
        &self,
        seed: &Polygon,
        transforms: &TransformSet,
        iterations: u32,
    ) -> IfsResult<IfsOutput> {
        let sink = self.preflight(
            transforms,
            GrowthEstimator::estimate(seed.len(), transforms.len(), iterations),
        );

        info!(
            vertices = seed.len(),
            transforms = transforms.len(),
            iterations,
            "Starting IFS run"
        );

        let mut collection = PolygonCollection::from_seed(seed);
        let mut state = RunState::after(0, iterations);

        while let RunState::Iterating { rounds_done } = state {
            self.check_cancelled(rounds_done)?;
            collection = collection.expand(transforms)?;
            debug!(
                generation = collection.generation(),
                polygons = collection.len(),
                "Round complete"
            );
            state = RunState::after(rounds_done + 1, iterations);
        }

        info!(polygons = collection.len(), "IFS run finished");

        Ok(IfsOutput {
            polygons: collection,
            diagnostics: sink.into_vec(),
        })
    }

    /// Validiert eine rohe Konfiguration und startet dann `run`.
    pub fn run_config(&self, config: &IfsConfig) -> IfsResult<IfsOutput> {
        let transforms = config.transform_set()?;
        let iterations = config.iteration_count()?;
        let seed = config.seed_polygon()?;
        self.run(&seed, &transforms, iterations)
    }

    pub(crate) fn preflight(&self, transforms: &TransformSet, estimate: u64) -> DiagnosticSink {
        let mut sink = DiagnosticSink::default();
        if self.settings.check_degenerate_maps {
            sink.check_degenerate_maps(transforms);
        }
        sink.check_size(estimate, self.settings.size_warning_threshold);
        sink
    }

    pub(crate) fn check_cancelled(&self, completed_rounds: u32) -> IfsResult<()> {
        match &self.cancellation {
            Some(token) if token.is_cancelled() => {
                info!(completed_rounds, "IFS run cancelled");
                Err(IfsError::Cancelled { completed_rounds })
            }
            _ => Ok(()),
        }
    }
}
