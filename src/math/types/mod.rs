// src/math/types/mod.rs
pub mod bounds;

pub use bounds::*;

// Re-export häufig verwendete externe Typen
pub use nalgebra::{Matrix2, Point2, Vector2};

// Einheitliche Typen für das gesamte Modul
pub type Point2D = Point2<f64>;
pub type Vector2D = Vector2<f64>;
