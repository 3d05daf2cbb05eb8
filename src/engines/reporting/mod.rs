pub mod console;
pub mod json;

pub use console::ConsoleReport;
pub use json::JsonReport;

use crate::config::{ReportConfig, ReportFormat};
use crate::engines::analysis::AnalysisReport;
use crate::error::Result;
use std::io::Write;

/// Destination for a finished analysis
pub trait ReportSink {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()>;
}

/// Pick the sink matching the configured format
pub fn sink_for<'w, W: Write + 'w>(config: &ReportConfig, writer: W) -> Box<dyn ReportSink + 'w> {
    match config.format {
        ReportFormat::Text => Box::new(ConsoleReport::new(writer, config.show_members)),
        ReportFormat::Json => Box::new(JsonReport::new(writer, config.show_members)),
    }
}
