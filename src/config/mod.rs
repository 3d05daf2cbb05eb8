pub mod traits;
pub mod clustering;
pub mod evaluation;
pub mod report;
pub mod logging;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use clustering::{ClusteringConfig, NeighborOrder};
pub use evaluation::EvaluationConfig;
pub use report::{ReportConfig, ReportFormat};
pub use logging::{LoggingConfig, LogLevel};
pub use traits::ConfigSection;
