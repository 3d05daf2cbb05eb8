pub mod genome;
pub mod genome_graph;
pub mod cluster;

pub use genome::{Genome, Link};
pub use genome_graph::{Adjacency, GenomeGraph};
pub use cluster::Cluster;
