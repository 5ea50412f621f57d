//! Minimax search with alpha-beta pruning.
//!
//! Values are always taken from the point of view of the player the search
//! was started for (the maximizing player), whoever is to move at a node.
//!
//! A move that earns an extra turn hands the next ply to the *same* player,
//! so a node's role (max or min) follows the actual turn order rather than
//! strictly alternating.
//!
//! Every root move is searched with a full `(-inf, +inf)` window. This makes
//! the reported per-move scores exact and keeps the first-seen tie-break
//! independent of pruning.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::eval::evaluate_board;
use super::stats::SearchStats;
use crate::core::{AiConfig, Board, Player};
use crate::rules::{make_move, valid_moves};

/// Outcome of a root search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Highest-scoring root move; the earliest pit wins ties.
    pub best_move: usize,

    /// Minimax value of `best_move`.
    pub score: f64,

    /// `(pit, value)` for every root move, in pit order.
    pub root_scores: Vec<(usize, f64)>,

    pub stats: SearchStats,
}

/// Depth-limited alpha-beta searcher.
#[derive(Clone, Debug)]
pub struct MinimaxSearch {
    depth: u32,
    pit_weight: f64,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a searcher looking `depth` plies ahead.
    ///
    /// The root move itself is the first ply, so a depth of 0 behaves like 1.
    #[must_use]
    pub fn new(depth: u32, pit_weight: f64) -> Self {
        Self {
            depth,
            pit_weight,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(config.search_depth, config.pit_weight)
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the best move for `player`.
    ///
    /// Returns `None` if `player` has no valid move.
    pub fn search(&mut self, board: &Board, player: Player) -> Option<SearchResult> {
        self.search_moves(board, player, &valid_moves(board, player))
    }

    /// Search only the given root moves, in the order given.
    ///
    /// Pits in `moves` that `player` cannot play are skipped. Returns `None`
    /// if none of them is playable.
    pub fn search_moves(
        &mut self,
        board: &Board,
        player: Player,
        moves: &[usize],
    ) -> Option<SearchResult> {
        let start = Instant::now();
        self.stats.reset();

        let remaining = self.depth.saturating_sub(1);
        let mut best: Option<(usize, f64)> = None;
        let mut root_scores = Vec::new();

        for &pit in moves {
            let Ok(result) = make_move(board, pit, player) else {
                continue;
            };
            self.stats.nodes += 1;

            let next = if result.extra_turn {
                player
            } else {
                player.opponent()
            };
            let score = self.minimax(
                &result.board,
                remaining,
                f64::NEG_INFINITY,
                f64::INFINITY,
                next,
                player,
            );
            root_scores.push((pit, score));

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pit, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        best.map(|(best_move, score)| SearchResult {
            best_move,
            score,
            root_scores,
            stats: self.stats.clone(),
        })
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        to_move: Player,
        maximizing: Player,
    ) -> f64 {
        if depth == 0 {
            return self.leaf(board, maximizing);
        }

        let moves = valid_moves(board, to_move);
        if moves.is_empty() {
            return self.leaf(board, maximizing);
        }

        let is_max = to_move == maximizing;
        let mut best = if is_max {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for pit in moves {
            let Ok(result) = make_move(board, pit, to_move) else {
                continue;
            };
            self.stats.nodes += 1;

            let next = if result.extra_turn {
                to_move
            } else {
                to_move.opponent()
            };
            let score = self.minimax(&result.board, depth - 1, alpha, beta, next, maximizing);

            if is_max {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    fn leaf(&mut self, board: &Board, maximizing: Player) -> f64 {
        self.stats.leaves += 1;
        evaluate_board(board, maximizing, self.pit_weight)
    }
}
