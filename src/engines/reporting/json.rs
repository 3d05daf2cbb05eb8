use super::ReportSink;
use crate::engines::analysis::AnalysisReport;
use crate::error::Result;
use std::io::Write;

/// Pretty-printed JSON report
pub struct JsonReport<W: Write> {
    writer: W,
    show_members: bool,
}

impl<W: Write> JsonReport<W> {
    pub fn new(writer: W, show_members: bool) -> Self {
        Self {
            writer,
            show_members,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()> {
        let mut value = serde_json::to_value(report)?;
        if !self.show_members {
            if let Some(map) = value.as_object_mut() {
                map.remove("clusters");
            }
        }
        serde_json::to_writer_pretty(&mut self.writer, &value)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
