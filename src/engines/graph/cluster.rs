use super::genome::Genome;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// One connected component of the genome graph.
///
/// Members are borrowed from the owning `GenomeGraph` and kept in
/// discovery order, which is also the enumeration order used for tie-breaks.
#[derive(Debug, Clone)]
pub struct Cluster<'g> {
    members: Vec<&'g Genome>,
    positions: HashMap<&'g str, usize>,
}

impl<'g> Cluster<'g> {
    pub fn new(members: Vec<&'g Genome>) -> Self {
        let positions = members
            .iter()
            .enumerate()
            .map(|(i, g)| (g.id.as_str(), i))
            .collect();
        Self { members, positions }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&'g Genome> {
        self.positions.get(id).map(|&i| self.members[i])
    }

    pub fn members(&self) -> &[&'g Genome] {
        &self.members
    }

    pub fn member_ids(&self) -> Vec<String> {
        self.members.iter().map(|g| g.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member with the smallest evolution factor; the earliest one wins ties
    pub fn min_fitness_genome(&self) -> Option<&'g Genome> {
        self.members.iter().copied().min_by_key(|g| g.evolution_factor)
    }

    /// Dijkstra over the members' directed links.
    ///
    /// Links leaving the cluster are ignored. Returns `None` when either id
    /// is not a member or `to` cannot be reached from `from`. Being in the
    /// same cluster does not imply a directed path exists.
    pub fn shortest_path_cost(&self, from: &str, to: &str) -> Option<u64> {
        let source = *self.positions.get(from)?;
        let target = *self.positions.get(to)?;

        let mut distance = vec![u64::MAX; self.members.len()];
        let mut settled = vec![false; self.members.len()];
        let mut heap = BinaryHeap::new();

        distance[source] = 0;
        heap.push(Reverse((0u64, source)));

        while let Some(Reverse((cost, node))) = heap.pop() {
            if settled[node] {
                continue;
            }
            settled[node] = true;

            if node == target {
                return Some(cost);
            }

            for link in &self.members[node].links {
                let Some(&next) = self.positions.get(link.target.as_str()) else {
                    continue;
                };
                let next_cost = cost.saturating_add(link.adaptation_factor);
                if next_cost < distance[next] {
                    distance[next] = next_cost;
                    heap.push(Reverse((next_cost, next)));
                }
            }
        }

        None
    }
}
