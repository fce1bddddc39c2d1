//! # Domino Duplas Engine
//!
//! A four-player, two-team closed-domino match engine with pluggable AI
//! strategies.
//!
//! ## Features
//!
//! - **Game Engine**: dealing, turn order, move legality, batida and lock
//!   scoring for the 24-tile double-six variant
//! - **Strategy Interface**: synchronous per-turn move selection contract
//! - **Rollout Evaluator**: flat Monte-Carlo move ranking, parallelized with
//!   rayon
//! - **Learning Hooks**: heuristic weight vectors for GA tuning and an
//!   in-memory tabular Q-learner
//!
//! ## Usage
//!
//! ```rust
//! use domino_duplas::game::match_game::simulate_match;
//! use domino_duplas::strategy::{BaselineStrategy, RolloutSearchStrategy, Strategy};
//!
//! let mut searcher_1 = RolloutSearchStrategy::new(10);
//! let mut searcher_3 = RolloutSearchStrategy::new(10);
//! let (mut naive_2, mut naive_4) = (BaselineStrategy, BaselineStrategy);
//! let mut strategies: [&mut dyn Strategy; 4] =
//!     [&mut searcher_1, &mut naive_2, &mut searcher_3, &mut naive_4];
//! let summary = simulate_match(&mut strategies, 2).unwrap();
//! println!("{} wins at {:?}", summary.winner, summary.scores);
//! ```

/// Core game logic and rules
pub mod game;

/// Batida classification and lock resolution
pub mod scoring;

/// Move-selection strategies, including the Monte-Carlo rollout evaluator
pub mod strategy;

/// Logging setup helper
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::board::{Board, Side};
pub use game::tile::Tile;
pub use game::deal::{deal_hands, Deal};
pub use game::hand::Hand;
pub use game::history::{MatchSummary, RoundEnding, RoundSummary, TurnEvent, TurnKind};
pub use game::match_game::{simulate_match, simulate_round, DominoMatch, DEFAULT_TARGET};
pub use game::player::{Seat, Team, SEATS};
pub use game::round::{Opening, Round, RoundOutcome};
pub use scoring::batida::BatidaKind;
pub use strategy::{
    BaselineStrategy, HeuristicWeights, RolloutSearchStrategy, Strategy, TabularLearningStrategy,
    TurnView, WeightedHeuristicStrategy,
};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the engine. `NoDoubleDealt` is recoverable by
/// re-dealing; the rest indicate a caller or strategy defect and abort the
/// simulation run. A tied locked round is not an error but a scoreless
/// [`RoundEnding::Travamento`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DominoError {
    #[error("no hand holds a double; the round must be re-dealt")]
    NoDoubleDealt,

    #[error("{0} has no legal move; check legality before requesting one")]
    NoLegalMove(Seat),

    #[error("tile {tile} fits neither open end ({left}, {right})")]
    IllegalMove { tile: Tile, left: u8, right: u8 },

    #[error("strategy for {seat} returned {tile}, which is not in the legal set")]
    InvalidStrategyOutput { seat: Seat, tile: Tile },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DominoError>;
