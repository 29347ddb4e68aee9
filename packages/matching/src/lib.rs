// ABOUTME: Case study relevance scoring and ranking for Pitchline
// ABOUTME: Pure, synchronous matching core - interval parsing, weighted scoring, stable ranking

pub mod interval;
pub mod ranker;
pub mod scorer;

pub use interval::{parse_interval, Interval};
pub use ranker::{rank, rank_above};
pub use scorer::{relevance_score, relevance_score_weighted, ScorerWeights};
