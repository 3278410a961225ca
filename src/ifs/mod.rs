// src/ifs/mod.rs

pub mod cancel;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod growth;
pub mod point_cloud;

pub use cancel::CancellationToken;
pub use config::{EngineSettings, IfsConfig};
pub use diagnostics::Diagnostic;
pub use engine::{IfsEngine, IfsOutput, RunState};
pub use growth::GrowthEstimator;
pub use point_cloud::{PointCloudIfs, PointCloudOutput};
