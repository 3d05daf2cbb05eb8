use super::cluster::Cluster;
use super::genome::Genome;
use crate::config::NeighborOrder;
use crate::error::{FloraError, Result};
use crate::types::GenomeRecord;
use std::collections::{HashMap, HashSet, VecDeque};

/// Owns every genome of a document, in table (declaration) order.
///
/// The graph is immutable once built. Clusters and the undirected
/// adjacency view borrow from it.
#[derive(Debug, Clone, Default)]
pub struct GenomeGraph {
    genomes: Vec<Genome>,
    index: HashMap<String, usize>,
}

/// Symmetric neighbour lists derived from the directed links.
///
/// Keys include link targets that were never declared as genomes, so that
/// traversal can pass through them. Only used for clustering; shortest paths
/// work on the directed links.
#[derive(Debug, Clone, Default)]
pub struct Adjacency<'g> {
    neighbors: HashMap<&'g str, Vec<&'g str>>,
}

impl<'g> Adjacency<'g> {
    /// Neighbours of `id` in the order the links were registered
    pub fn neighbors(&self, id: &str) -> &[&'g str] {
        self.neighbors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.neighbors.contains_key(id)
    }

    /// Number of node keys, including undeclared link targets
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

impl GenomeGraph {
    /// Build the graph from ingested records, failing fast on an empty or
    /// duplicate id and on negative link weights.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = GenomeRecord>,
    {
        let mut graph = Self::default();
        for record in records {
            let genome = Genome::from_record(record)?;
            if graph.index.contains_key(&genome.id) {
                return Err(FloraError::MalformedInput(format!(
                    "Duplicate genome id '{}'",
                    genome.id
                )));
            }
            graph.index.insert(genome.id.clone(), graph.genomes.len());
            graph.genomes.push(genome);
        }

        let undeclared = graph.undeclared_targets();
        if !undeclared.is_empty() {
            log::debug!(
                "{} link target(s) are not declared as genomes: {:?}",
                undeclared.len(),
                undeclared
            );
        }

        log::debug!(
            "Built genome graph with {} genomes and {} links",
            graph.len(),
            graph.link_count()
        );
        Ok(graph)
    }

    pub fn get(&self, id: &str) -> Option<&Genome> {
        self.index.get(id).map(|&i| &self.genomes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Genomes in table order
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    pub fn link_count(&self) -> usize {
        self.genomes.iter().map(|g| g.links.len()).sum()
    }

    /// Link targets with no genome of their own, sorted
    pub fn undeclared_targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = self
            .genomes
            .iter()
            .flat_map(|g| g.links.iter())
            .map(|l| l.target.as_str())
            .filter(|t| !self.contains(t))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        targets.sort_unstable();
        targets
    }

    /// Register every link A -> B as both A -> B and B -> A
    pub fn adjacency(&self) -> Adjacency<'_> {
        let mut neighbors: HashMap<&str, Vec<&str>> = HashMap::with_capacity(self.genomes.len());
        for genome in &self.genomes {
            neighbors.entry(genome.id.as_str()).or_default();
            for link in &genome.links {
                neighbors
                    .entry(genome.id.as_str())
                    .or_default()
                    .push(link.target.as_str());
                neighbors
                    .entry(link.target.as_str())
                    .or_default()
                    .push(genome.id.as_str());
            }
        }
        Adjacency { neighbors }
    }

    /// Partition the genomes into connected components of the symmetric
    /// adjacency view.
    ///
    /// Clusters come out in the table order of their first member, and each
    /// cluster lists its members in breadth-first discovery order.
    pub fn clusters(&self, order: NeighborOrder) -> Vec<Cluster<'_>> {
        let adjacency = self.adjacency();
        let mut visited: HashSet<&str> = HashSet::with_capacity(adjacency.len());
        let mut clusters = Vec::new();

        for genome in &self.genomes {
            if !visited.insert(genome.id.as_str()) {
                continue;
            }

            let mut members = Vec::new();
            let mut queue = VecDeque::from([genome.id.as_str()]);

            while let Some(current) = queue.pop_front() {
                // Undeclared ids bridge components but never become members
                if let Some(member) = self.get(current) {
                    members.push(member);
                }

                let neighbors = adjacency.neighbors(current);
                for i in 0..neighbors.len() {
                    let next = match order {
                        NeighborOrder::Reverse => neighbors[neighbors.len() - 1 - i],
                        NeighborOrder::Declaration => neighbors[i],
                    };
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }

            log::debug!("Cluster {} has {} members", clusters.len(), members.len());
            clusters.push(Cluster::new(members));
        }

        clusters
    }
}
