pub mod pair_evaluator;

pub use pair_evaluator::{
    AdaptationReport, EvolutionReport, PairEvaluator, ADAPTATION_SENTINEL, EVOLUTION_SENTINEL,
};
