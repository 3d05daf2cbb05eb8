use super::ReportSink;
use crate::engines::analysis::AnalysisReport;
use crate::error::Result;
use std::io::Write;

/// Plain-text report in the classic flora analyzer layout
pub struct ConsoleReport<W: Write> {
    writer: W,
    show_members: bool,
}

impl<W: Write> ConsoleReport<W> {
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

fn format_clusters(clusters: &[Vec<String>]) -> String {
    let inner: Vec<String> = clusters
        .iter()
        .map(|members| format!("[{}]", members.join(", ")))
        .collect();
    format!("[{}]", inner.join(", "))
}

/// Plain decimal with at least one fractional digit: `6.0`, `-2.5`, never `1e16`
fn format_factor(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn format_factors(values: &[f64]) -> String {
    let inner: Vec<String> = values.iter().map(|&v| format_factor(v)).collect();
    format!("[{}]", inner.join(", "))
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()> {
        let w = &mut self.writer;

        writeln!(w, "##Start Reading Flora Genomes##")?;
        writeln!(w, "Number of Genome Clusters: {}", report.cluster_count)?;
        if self.show_members {
            writeln!(w, "For the Genomes: {}", format_clusters(&report.clusters))?;
        }
        writeln!(w, "##Reading Flora Genomes Completed##")?;

        writeln!(w, "##Start Evaluating Possible Evolutions##")?;
        writeln!(w, "Number of Possible Evolutions: {}", report.evolutions.total)?;
        writeln!(w, "Number of Certified Evolution: {}", report.evolutions.certified)?;
        writeln!(
            w,
            "Evolution Factor for Each Evolution Pair: {}",
            format_factors(&report.evolutions.results)
        )?;
        writeln!(w, "##Evaluated Possible Evolutions##")?;

        writeln!(w, "##Start Evaluating Possible Adaptations##")?;
        writeln!(w, "Number of Possible Adaptations: {}", report.adaptations.total)?;
        writeln!(w, "Number of Certified Adaptations: {}", report.adaptations.certified)?;
        writeln!(
            w,
            "Adaptation Factor for Each Adaptation Pair: {:?}",
            report.adaptations.results
        )?;
        writeln!(w, "##Evaluated Possible Adaptations##")?;

        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::evaluation::{AdaptationReport, EvolutionReport};

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            cluster_count: 2,
            clusters: vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["X".to_string()],
            ],
            evolutions: EvolutionReport::from_results(vec![6.0, -1.0, 2.5]),
            adaptations: AdaptationReport::from_results(vec![1, -1]),
        }
    }

    #[test]
    fn test_console_layout() {
        let mut sink = ConsoleReport::new(Vec::new(), true);
        sink.write_report(&sample_report()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();

        assert!(out.contains("Number of Genome Clusters: 2\n"));
        assert!(out.contains("For the Genomes: [[A, B], [X]]\n"));
        assert!(out.contains("Number of Possible Evolutions: 3\n"));
        assert!(out.contains("Number of Certified Evolution: 2\n"));
        assert!(out.contains("Evolution Factor for Each Evolution Pair: [6.0, -1.0, 2.5]\n"));
        assert!(out.contains("Number of Certified Adaptations: 1\n"));
        assert!(out.contains("Adaptation Factor for Each Adaptation Pair: [1, -1]\n"));
        assert!(out.ends_with("##Evaluated Possible Adaptations##\n"));
    }

    #[test]
    fn test_large_factors_stay_in_decimal_notation() {
        assert_eq!(format_factor(1e16), "10000000000000000.0");
        assert_eq!(format_factor(-1.0), "-1.0");
        assert_eq!(format_factor(2.5), "2.5");
        assert_eq!(format_factors(&[6.0, -1.0, 1e17]), "[6.0, -1.0, 100000000000000000.0]");
    }

    #[test]
    fn test_hides_members() {
        let mut sink = ConsoleReport::new(Vec::new(), false);
        sink.write_report(&sample_report()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();

        assert!(out.contains("Number of Genome Clusters: 2\n"));
        assert!(!out.contains("For the Genomes"));
    }
}
