use crate::config::EvaluationConfig;
use crate::engines::graph::Cluster;
use crate::types::QueryPair;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of an evolution pair that could not be evaluated
pub const EVOLUTION_SENTINEL: f64 = -1.0;
/// Result of an adaptation pair that could not be evaluated or has no path
pub const ADAPTATION_SENTINEL: i64 = -1;

/// Per-pair evolution scores in query order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionReport {
    pub total: usize,
    /// Pairs whose score is non-negative
    pub certified: usize,
    pub results: Vec<f64>,
}

impl EvolutionReport {
    pub fn from_results(results: Vec<f64>) -> Self {
        Self {
            total: results.len(),
            certified: results.iter().filter(|&&r| r >= 0.0).count(),
            results,
        }
    }
}

/// Per-pair adaptation costs in query order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptationReport {
    pub total: usize,
    /// Pairs with a reachable shortest path
    pub certified: usize,
    pub results: Vec<i64>,
}

impl AdaptationReport {
    pub fn from_results(results: Vec<i64>) -> Self {
        Self {
            total: results.len(),
            certified: results.iter().filter(|&&r| r != ADAPTATION_SENTINEL).count(),
            results,
        }
    }
}

/// Answers evolution and adaptation queries against a fixed set of clusters.
pub struct PairEvaluator<'c, 'g> {
    clusters: &'c [Cluster<'g>],
    cluster_of: HashMap<&'g str, usize>,
    config: EvaluationConfig,
}

impl<'c, 'g> PairEvaluator<'c, 'g> {
    pub fn new(clusters: &'c [Cluster<'g>], config: EvaluationConfig) -> Self {
        let mut cluster_of = HashMap::new();
        for (i, cluster) in clusters.iter().enumerate() {
            for genome in cluster.members() {
                // First cluster in sequence order wins
                cluster_of.entry(genome.id.as_str()).or_insert(i);
            }
        }
        Self {
            clusters,
            cluster_of,
            config,
        }
    }

    /// Index of the cluster holding `id`
    pub fn locate(&self, id: &str) -> Option<usize> {
        self.cluster_of.get(id).copied()
    }

    /// Average of both clusters' minimum fitness, only across clusters.
    ///
    /// Missing endpoints and same-cluster pairs yield `EVOLUTION_SENTINEL`.
    pub fn evaluate_evolution(&self, pair: &QueryPair) -> f64 {
        let (Some(a), Some(b)) = (self.locate(&pair.first_id), self.locate(&pair.second_id)) else {
            log::debug!("Evolution pair ({}, {}) has no cluster", pair.first_id, pair.second_id);
            return EVOLUTION_SENTINEL;
        };
        if a == b {
            return EVOLUTION_SENTINEL;
        }

        match (
            self.clusters[a].min_fitness_genome(),
            self.clusters[b].min_fitness_genome(),
        ) {
            (Some(min_a), Some(min_b)) => {
                (min_a.evolution_factor as f64 + min_b.evolution_factor as f64) / 2.0
            }
            _ => EVOLUTION_SENTINEL,
        }
    }

    /// Directed shortest-path cost, only within one cluster.
    ///
    /// Missing endpoints, cross-cluster pairs and unreachable targets yield
    /// `ADAPTATION_SENTINEL`.
    pub fn evaluate_adaptation(&self, pair: &QueryPair) -> i64 {
        let (Some(a), Some(b)) = (self.locate(&pair.first_id), self.locate(&pair.second_id)) else {
            log::debug!("Adaptation pair ({}, {}) has no cluster", pair.first_id, pair.second_id);
            return ADAPTATION_SENTINEL;
        };
        if a != b {
            return ADAPTATION_SENTINEL;
        }

        self.clusters[a]
            .shortest_path_cost(&pair.first_id, &pair.second_id)
            .map(|cost| i64::try_from(cost).unwrap_or(i64::MAX))
            .unwrap_or(ADAPTATION_SENTINEL)
    }

    pub fn evaluate_evolutions(&self, pairs: &[QueryPair]) -> EvolutionReport {
        let results: Vec<f64> = if self.config.use_parallel(pairs.len()) {
            pairs.par_iter().map(|p| self.evaluate_evolution(p)).collect()
        } else {
            pairs.iter().map(|p| self.evaluate_evolution(p)).collect()
        };

        let report = EvolutionReport::from_results(results);
        log::info!(
            "Evaluated {} evolution pairs, {} certified",
            report.total,
            report.certified
        );
        report
    }

    pub fn evaluate_adaptations(&self, pairs: &[QueryPair]) -> AdaptationReport {
        let results: Vec<i64> = if self.config.use_parallel(pairs.len()) {
            pairs.par_iter().map(|p| self.evaluate_adaptation(p)).collect()
        } else {
            pairs.iter().map(|p| self.evaluate_adaptation(p)).collect()
        };

        let report = AdaptationReport::from_results(results);
        log::info!(
            "Evaluated {} adaptation pairs, {} certified",
            report.total,
            report.certified
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NeighborOrder;
    use crate::engines::graph::GenomeGraph;
    use crate::types::GenomeRecord;

    fn scenario_graph() -> GenomeGraph {
        GenomeGraph::from_records(vec![
            GenomeRecord::new("A", 5).with_link("B", 1),
            GenomeRecord::new("B", 2).with_link("A", 1),
            GenomeRecord::new("X", 10),
            GenomeRecord::new("N", -30),
        ])
        .unwrap()
    }

    #[test]
    fn test_evolution_across_clusters() {
        let graph = scenario_graph();
        let clusters = graph.clusters(NeighborOrder::Reverse);
        let evaluator = PairEvaluator::new(&clusters, EvaluationConfig::default());

        assert_eq!(evaluator.evaluate_evolution(&QueryPair::new("A", "X")), 6.0);
        assert_eq!(evaluator.evaluate_evolution(&QueryPair::new("X", "N")), -10.0);
    }

    #[test]
    fn test_evolution_same_cluster_is_sentinel() {
        let graph = scenario_graph();
        let clusters = graph.clusters(NeighborOrder::Reverse);
        let evaluator = PairEvaluator::new(&clusters, EvaluationConfig::default());

        assert_eq!(evaluator.evaluate_evolution(&QueryPair::new("A", "B")), EVOLUTION_SENTINEL);
        assert_eq!(evaluator.evaluate_evolution(&QueryPair::new("X", "X")), EVOLUTION_SENTINEL);
    }

    #[test]
    fn test_adaptation_within_cluster() {
        let graph = scenario_graph();
        let clusters = graph.clusters(NeighborOrder::Reverse);
        let evaluator = PairEvaluator::new(&clusters, EvaluationConfig::default());

        assert_eq!(evaluator.evaluate_adaptation(&QueryPair::new("A", "B")), 1);
        assert_eq!(evaluator.evaluate_adaptation(&QueryPair::new("X", "X")), 0);
        assert_eq!(evaluator.evaluate_adaptation(&QueryPair::new("A", "X")), ADAPTATION_SENTINEL);
    }

    #[test]
    fn test_missing_endpoint_is_sentinel() {
        let graph = scenario_graph();
        let clusters = graph.clusters(NeighborOrder::Reverse);
        let evaluator = PairEvaluator::new(&clusters, EvaluationConfig::default());

        assert_eq!(evaluator.evaluate_evolution(&QueryPair::new("A", "nope")), EVOLUTION_SENTINEL);
        assert_eq!(evaluator.evaluate_adaptation(&QueryPair::new("nope", "A")), ADAPTATION_SENTINEL);
    }

    #[test]
    fn test_reports_count_certified() {
        let graph = scenario_graph();
        let clusters = graph.clusters(NeighborOrder::Reverse);
        let evaluator = PairEvaluator::new(&clusters, EvaluationConfig::default());

        let evolutions = evaluator.evaluate_evolutions(&[
            QueryPair::new("A", "X"),
            QueryPair::new("A", "B"),
            QueryPair::new("B", "N"),
        ]);
        assert_eq!(evolutions.total, 3);
        assert_eq!(evolutions.certified, 1);
        assert_eq!(evolutions.results, vec![6.0, -1.0, -14.0]);

        let adaptations = evaluator.evaluate_adaptations(&[
            QueryPair::new("B", "A"),
            QueryPair::new("A", "N"),
        ]);
        assert_eq!(adaptations.total, 2);
        assert_eq!(adaptations.certified, 1);
        assert_eq!(adaptations.results, vec![1, -1]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let graph = scenario_graph();
        let clusters = graph.clusters(NeighborOrder::Reverse);
        let ids = ["A", "B", "X", "N", "missing"];
        let pairs: Vec<QueryPair> = ids
            .iter()
            .flat_map(|a| ids.iter().map(move |b| QueryPair::new(*a, *b)))
            .collect();

        let sequential = PairEvaluator::new(&clusters, EvaluationConfig::default());
        let parallel = PairEvaluator::new(
            &clusters,
            EvaluationConfig {
                parallel: true,
                parallel_threshold: 1,
            },
        );

        assert_eq!(sequential.evaluate_evolutions(&pairs), parallel.evaluate_evolutions(&pairs));
        assert_eq!(sequential.evaluate_adaptations(&pairs), parallel.evaluate_adaptations(&pairs));
    }
}
