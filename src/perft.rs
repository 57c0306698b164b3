//! Perft: exhaustive legal-move tree counts for validating the generator.
//!
//! Counts are compared against published tables; a mismatch at some depth
//! points at a generation or make/unmake bug reachable within that many plies.

use std::env;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;

use crate::board::{GameState, Move};

/// Environment variable overriding the worker thread count
pub const THREADS_ENV: &str = "CHESS_RULES_PERFT_THREADS";
/// Environment variable overriding the depth cap
pub const MAX_DEPTH_ENV: &str = "CHESS_RULES_PERFT_MAX_DEPTH";

const DEFAULT_MAX_DEPTH: usize = 6;

/// Count leaf nodes of the legal move tree `depth` plies deep.
#[must_use]
pub fn perft(state: &GameState, depth: usize) -> u64 {
    let mut scratch = state.clone();
    perft_in_place(&mut scratch, depth)
}

fn perft_in_place(state: &mut GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        state.make_move(&mv);
        nodes += perft_in_place(state, depth - 1);
        state.unmake_move(&mv);
    }
    nodes
}

/// Node counts per root move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerftReport {
    pub depth: usize,
    /// Root moves in generation order with the nodes below each
    pub divide: Vec<(Move, u64)>,
    pub total: u64,
}

impl PerftReport {
    fn from_divide(depth: usize, divide: Vec<(Move, u64)>) -> Self {
        let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
        PerftReport {
            depth,
            divide,
            total,
        }
    }

    /// Count below the root move `notation` (e.g. "e2e4").
    #[must_use]
    pub fn nodes_for(&self, notation: &str) -> Option<u64> {
        self.divide
            .iter()
            .find(|(mv, _)| mv.to_string() == notation)
            .map(|(_, nodes)| *nodes)
    }
}

impl fmt::Display for PerftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (mv, nodes) in &self.divide {
            writeln!(f, "{mv}: {nodes}")?;
        }
        writeln!(f)?;
        write!(f, "Nodes searched: {}", self.total)
    }
}

/// Perft split by root move. At depth 0 the divide is empty and the total is 1.
#[must_use]
pub fn perft_divide(state: &GameState, depth: usize) -> PerftReport {
    if depth == 0 {
        return PerftReport {
            depth,
            divide: Vec::new(),
            total: 1,
        };
    }

    let mut scratch = state.clone();
    let mut divide = Vec::new();
    for mv in state.legal_moves() {
        scratch.make_move(&mv);
        let nodes = perft_in_place(&mut scratch, depth - 1);
        scratch.unmake_move(&mv);

        #[cfg(feature = "logging")]
        log::debug!("perft divide {mv}: {nodes}");

        divide.push((mv, nodes));
    }
    PerftReport::from_divide(depth, divide)
}

/// [`perft_divide`] with root moves shared out over `threads` workers.
///
/// Each worker clones the position once and pulls root moves from a shared
/// index until none remain. The report keeps generation order.
#[must_use]
pub fn perft_parallel(state: &GameState, depth: usize, threads: usize) -> PerftReport {
    let threads = threads.max(1);
    if depth <= 1 || threads == 1 {
        return perft_divide(state, depth);
    }

    let roots: Vec<Move> = state.legal_moves().into_iter().collect();
    let next = AtomicUsize::new(0);
    let results: Mutex<Vec<(usize, Move, u64)>> = Mutex::new(Vec::with_capacity(roots.len()));

    thread::scope(|scope| {
        for worker_id in 0..threads.min(roots.len()) {
            let (roots, next, results) = (&roots, &next, &results);
            let mut scratch = state.clone();
            thread::Builder::new()
                .name(format!("perft-{worker_id}"))
                .spawn_scoped(scope, move || loop {
                    let idx = next.fetch_add(1, Ordering::Relaxed);
                    let Some(mv) = roots.get(idx) else {
                        break;
                    };
                    scratch.make_move(mv);
                    let nodes = perft_in_place(&mut scratch, depth - 1);
                    scratch.unmake_move(mv);
                    results.lock().push((idx, *mv, nodes));
                })
                .expect("failed to spawn perft worker");
        }
    });

    let mut gathered = results.into_inner();
    gathered.sort_unstable_by_key(|(idx, _, _)| *idx);
    let divide = gathered.into_iter().map(|(_, mv, nodes)| (mv, nodes)).collect();
    PerftReport::from_divide(depth, divide)
}

/// Limits for perft runs requested from outside the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerftConfig {
    /// Deepest tree `run_perft` will walk
    pub max_depth: usize,
    /// Worker threads; 1 runs on the calling thread
    pub threads: usize,
}

impl Default for PerftConfig {
    fn default() -> Self {
        PerftConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            threads: thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl PerftConfig {
    /// Defaults overridden by [`THREADS_ENV`] and [`MAX_DEPTH_ENV`].
    /// Unparseable or zero values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = PerftConfig::default();
        if let Some(threads) = read_env_usize(THREADS_ENV) {
            config.threads = threads;
        }
        if let Some(max_depth) = read_env_usize(MAX_DEPTH_ENV) {
            config.max_depth = max_depth;
        }
        config
    }
}

fn read_env_usize(key: &str) -> Option<usize> {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .filter(|&n| n > 0)
}

/// Error type for rejected perft requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerftError {
    /// Requested depth exceeds the configured cap
    DepthLimit { requested: usize, max: usize },
}

impl fmt::Display for PerftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerftError::DepthLimit { requested, max } => {
                write!(f, "Perft depth {requested} exceeds the limit of {max}")
            }
        }
    }
}

impl std::error::Error for PerftError {}

/// Divide perft under `config`'s limits, in parallel when it allows.
pub fn run_perft(
    state: &GameState,
    depth: usize,
    config: &PerftConfig,
) -> Result<PerftReport, PerftError> {
    if depth > config.max_depth {
        return Err(PerftError::DepthLimit {
            requested: depth,
            max: config.max_depth,
        });
    }
    Ok(perft_parallel(state, depth, config.threads))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_one_node() {
        let state = GameState::new();
        assert_eq!(perft(&state, 0), 1);
        let report = perft_divide(&state, 0);
        assert!(report.divide.is_empty());
        assert_eq!(report.total, 1);
    }

    #[test]
    fn test_divide_sums_to_total() {
        let state = GameState::new();
        let report = perft_divide(&state, 2);
        assert_eq!(report.divide.len(), 20);
        assert_eq!(report.total, 400);
        assert_eq!(report.nodes_for("e2e4"), Some(20));
        assert_eq!(report.nodes_for("e2e5"), None);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let state = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        );
        let sequential = perft_divide(&state, 2);
        let parallel = perft_parallel(&state, 2, 4);
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.total, perft(&state, 2));
        assert_eq!(parallel.divide.len(), 48);
    }

    #[test]
    fn test_perft_leaves_input_untouched() {
        let state = GameState::new();
        let before = state.clone();
        let _ = perft(&state, 3);
        assert_eq!(state, before);
    }

    #[test]
    fn test_run_perft_enforces_depth_limit() {
        let config = PerftConfig {
            max_depth: 2,
            threads: 1,
        };
        let state = GameState::new();
        assert_eq!(
            run_perft(&state, 3, &config),
            Err(PerftError::DepthLimit {
                requested: 3,
                max: 2
            })
        );
        assert_eq!(run_perft(&state, 2, &config).unwrap().total, 400);
    }

    #[test]
    fn test_report_display() {
        let report = perft_divide(&GameState::new(), 1);
        let text = report.to_string();
        assert!(text.contains("e2e4: 1"));
        assert!(text.ends_with("Nodes searched: 20"));
    }

    #[test]
    fn test_default_config() {
        let config = PerftConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.threads >= 1);
    }
}
