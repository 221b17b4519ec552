// ============================================================================
// Domain Models Module
// Configuration, errors and the value objects passed between stages
// ============================================================================

pub mod config;
pub mod error;
pub mod formatted;

pub use config::PipelineConfig;
pub use error::TransformError;
pub use formatted::{Formatted, Swapped};
