// src/ifs/diagnostics.rs

use crate::math::geometry::polygon::{AffineMap, Degeneracy, TransformSet};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Hinweise, die einen Lauf nie abbrechen, aber dem Aufrufer mitgeteilt werden.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Eine Abbildung mit nicht-positivem oder nicht-endlichem Parameter.
    /// `reason` benennt den betroffenen Parameter, `map` trägt die Werte.
    DegenerateMap {
        index: usize,
        map: AffineMap,
        reason: Degeneracy,
    },
    /// Die geschätzte Ausgabegröße liegt über der Schwelle.
    SizeWarning {
        estimated_vertices: u64,
        threshold: u64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DegenerateMap { index, map, reason } => {
                let value = match reason {
                    Degeneracy::NonPositiveScale | Degeneracy::NonFiniteScale => {
                        format!("{}", map.scale)
                    }
                    Degeneracy::NonFiniteRotation => format!("{}", map.rotation),
                    Degeneracy::NonFiniteShift => format!("({}, {})", map.shift.x, map.shift.y),
                };
                write!(
                    f,
                    "Map {} has {} {} and breaks the contraction assumption",
                    index, reason, value
                )
            }
            Diagnostic::SizeWarning {
                estimated_vertices,
                threshold,
            } => write!(
                f,
                "Estimated output of {} vertices exceeds the threshold of {}; consider fewer iterations",
                estimated_vertices, threshold
            ),
        }
    }
}

/// Sammelt die Hinweise eines Laufs und protokolliert jeden einzeln.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn check_degenerate_maps(&mut self, transforms: &TransformSet) {
        for (index, map, reason) in transforms.degenerate_maps() {
            self.push(Diagnostic::DegenerateMap {
                index,
                map: *map,
                reason,
            });
        }
    }

    pub(crate) fn check_size(&mut self, estimated_vertices: u64, threshold: u64) {
        if estimated_vertices > threshold {
            self.push(Diagnostic::SizeWarning {
                estimated_vertices,
                threshold,
            });
        }
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
