pub mod error;
pub mod executable_utils;
pub mod generator;
pub mod model;
pub mod pipeline;
pub mod ranking;
pub mod recommendation;
pub mod report;
pub mod scorers;
pub mod scoring;
pub mod segments;

pub use error::RfmError;
pub use pipeline::{Pipeline, PipelineOutcome};
