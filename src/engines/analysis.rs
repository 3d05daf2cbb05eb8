use crate::config::AppConfig;
use crate::engines::evaluation::{AdaptationReport, EvolutionReport, PairEvaluator};
use crate::engines::graph::{Cluster, GenomeGraph};
use crate::error::Result;
use crate::types::{FloraDocument, QueryPair};
use serde::{Deserialize, Serialize};

/// Everything the reporting side needs from one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub cluster_count: usize,
    /// Member ids per cluster, in cluster order
    pub clusters: Vec<Vec<String>>,
    pub evolutions: EvolutionReport,
    pub adaptations: AdaptationReport,
}

/// Builds the genome graph once and answers both query kinds against it.
pub struct FloraAnalyzer {
    graph: GenomeGraph,
    config: AppConfig,
}

impl FloraAnalyzer {
    pub fn new(graph: GenomeGraph, config: AppConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &GenomeGraph {
        &self.graph
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn clusters(&self) -> Vec<Cluster<'_>> {
        self.graph.clusters(self.config.clustering.neighbor_order)
    }

    pub fn analyze(
        &self,
        evolution_pairs: &[QueryPair],
        adaptation_pairs: &[QueryPair],
    ) -> AnalysisReport {
        let clusters = self.clusters();
        log::info!(
            "Partitioned {} genomes into {} clusters",
            self.graph.len(),
            clusters.len()
        );

        let evaluator = PairEvaluator::new(&clusters, self.config.evaluation.clone());
        let evolutions = evaluator.evaluate_evolutions(evolution_pairs);
        let adaptations = evaluator.evaluate_adaptations(adaptation_pairs);

        AnalysisReport {
            cluster_count: clusters.len(),
            clusters: clusters.iter().map(Cluster::member_ids).collect(),
            evolutions,
            adaptations,
        }
    }
}

/// Build the graph from a parsed document and evaluate its query pairs
pub fn analyze_document(document: FloraDocument, config: AppConfig) -> Result<AnalysisReport> {
    let FloraDocument {
        genomes,
        evolution_pairs,
        adaptation_pairs,
    } = document;

    let analyzer = FloraAnalyzer::new(GenomeGraph::from_records(genomes)?, config);
    Ok(analyzer.analyze(&evolution_pairs, &adaptation_pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenomeRecord;

    #[test]
    fn test_analyze_document() {
        let document = FloraDocument {
            genomes: vec![
                GenomeRecord::new("A", 5).with_link("B", 1),
                GenomeRecord::new("B", 2).with_link("A", 1),
                GenomeRecord::new("X", 10),
            ],
            evolution_pairs: vec![QueryPair::new("A", "X"), QueryPair::new("A", "B")],
            adaptation_pairs: vec![QueryPair::new("A", "B"), QueryPair::new("A", "X")],
        };

        let report = analyze_document(document, AppConfig::default()).unwrap();

        assert_eq!(report.cluster_count, 2);
        assert_eq!(report.clusters, vec![vec!["A", "B"], vec!["X"]]);
        assert_eq!(report.evolutions.results, vec![6.0, -1.0]);
        assert_eq!(report.evolutions.certified, 1);
        assert_eq!(report.adaptations.results, vec![1, -1]);
        assert_eq!(report.adaptations.certified, 1);
    }

    #[test]
    fn test_malformed_genomes_fail_fast() {
        let document = FloraDocument {
            genomes: vec![GenomeRecord::new("A", 1).with_link("B", -2)],
            ..Default::default()
        };
        assert!(analyze_document(document, AppConfig::default()).is_err());
    }
}
