// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-12;
    /// Toleranz für Vergleiche nach mehreren verketteten Transformationen
    pub const LOOSE_EPSILON: f64 = 1e-9;
    /// Ab dieser geschätzten Vertex-Anzahl wird eine Größenwarnung ausgegeben.
    pub const SIZE_WARNING_THRESHOLD: u64 = 10_000_000;
    pub const SQRT_3: f64 = 1.7320508075688772;
}
