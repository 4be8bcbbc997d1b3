use cozy_chess::{Board, Move};

use crate::board::{legal_moves, victim_of, Position};
use crate::clock::Clock;
use crate::eval::Evaluator;

pub mod tt;

use tt::{Bound, Entry, Tt};

/// Effectively-infinite score; also the mate magnitude and the timeout
/// sentinel the search returns to poison an aborted iteration.
pub const MATE_SCORE: i32 = 30_000;
pub const DRAW_SCORE: i32 = 0;

/// Hard cap on iterative-deepening depth.
pub const MAX_DEPTH: i32 = 50;

/// Ordering score for the transposition table's remembered move; above any
/// capture score.
const TT_MOVE_SCORE: i32 = 1_000_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best root move; `None` only when the position has no legal moves.
    pub best: Option<Move>,
    /// Score of the last fully completed iteration, mover's perspective.
    pub score: i32,
    /// Depth of the last fully completed iteration.
    pub depth: i32,
    pub nodes: u64,
}

/// Piece kind rank for MVV-LVA, Pawn=1 .. King=6.
fn kind_rank(piece: cozy_chess::Piece) -> i32 {
    piece as i32 + 1
}

/// Most-valuable-victim / least-valuable-aggressor score; 0 for quiet moves.
pub fn mvv_lva(board: &Board, mv: Move) -> i32 {
    match victim_of(board, mv) {
        Some(victim) => {
            let attacker = board.piece_on(mv.from).map(kind_rank).unwrap_or(0);
            100 * kind_rank(victim) - attacker
        }
        None => 0,
    }
}

/// Iterative-deepening negamax searcher with embedded quiescence, generic
/// over the evaluation it calls at leaves. One instance lives for one agent:
/// the transposition table persists across searches and across games, and
/// stale entries are filtered out by key comparison rather than cleared.
pub struct Searcher<E: Evaluator> {
    eval: E,
    tt: Tt,
    /// Structural hashes of the game so far plus the current search line;
    /// a hit anywhere on it means the position is a repetition.
    path: Vec<u64>,
    root_move: Option<Move>,
    nodes: u64,
}

impl<E: Evaluator + Default> Default for Searcher<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: Evaluator> Searcher<E> {
    pub fn new(eval: E) -> Self {
        Self::with_tt_capacity(eval, tt::DEFAULT_CAPACITY)
    }

    pub fn with_tt_capacity(eval: E, capacity: usize) -> Self {
        Self {
            eval,
            tt: Tt::with_capacity(capacity),
            path: Vec::new(),
            root_move: None,
            nodes: 0,
        }
    }

    pub fn tt(&self) -> &Tt {
        &self.tt
    }

    pub fn tt_mut(&mut self) -> &mut Tt {
        &mut self.tt
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick a move for the side to move before the clock runs out.
    pub fn think(&mut self, pos: &Position, clock: &Clock) -> SearchResult {
        self.think_to_depth(pos, clock, MAX_DEPTH)
    }

    /// Deepen one ply at a time; a depth whose completion overruns the clock
    /// is discarded and the previous iteration's answer stands. The root-move
    /// slot is updated as the root loop improves, so even a partially
    /// searched depth can promote a better move.
    pub fn think_to_depth(&mut self, pos: &Position, clock: &Clock, max_depth: i32) -> SearchResult {
        self.root_move = None;
        self.nodes = 0;
        self.path.clear();
        self.path.extend_from_slice(pos.history());

        let board = pos.board();
        let mut score = 0;
        let mut completed = 0;
        for depth in 1..=max_depth {
            let s = self.search(board, clock, -MATE_SCORE, MATE_SCORE, depth, 0);
            if clock.should_stop() {
                break;
            }
            score = s;
            completed = depth;
            log::debug!(
                "depth {depth} score {score} nodes {} best {}",
                self.nodes,
                self.root_move.map(|m| m.to_string()).unwrap_or_default()
            );
        }

        // The host guarantees a legal move unless the game is over; if depth 1
        // never finished, any legal move beats a null one.
        let best = self
            .root_move
            .or_else(|| legal_moves(board, false).first().copied());
        SearchResult { best, score, depth: completed, nodes: self.nodes }
    }

    /// Negamax with alpha-beta over the (alpha, beta) window. `depth <= 0` switches to
    /// quiescence: captures only, with the static eval as a standing-pat
    /// lower bound. Returns the +30000 sentinel when the clock expires
    /// mid-node, which propagates up and poisons the whole iteration.
    pub fn search(
        &mut self,
        board: &Board,
        clock: &Clock,
        mut alpha: i32,
        beta: i32,
        depth: i32,
        ply: i32,
    ) -> i32 {
        self.nodes += 1;
        let key = board.hash();
        let root = ply == 0;

        // Repetition draws outrank every other terminal condition.
        if !root && self.path.contains(&key) {
            return DRAW_SCORE;
        }

        let quiescing = depth <= 0;
        let mut best = -MATE_SCORE;

        let entry = self.tt.probe(key);
        if !root {
            if let Some(e) = entry {
                if e.depth >= depth {
                    let cut = match e.bound {
                        Bound::Exact => true,
                        Bound::Lower => e.score >= beta,
                        Bound::Upper => e.score <= alpha,
                    };
                    if cut {
                        return e.score;
                    }
                }
            }
        }
        let tt_move = entry.and_then(|e| e.best);

        if quiescing {
            // Stand pat: the mover may decline every capture.
            best = self.eval.evaluate(board);
            if best >= beta {
                return best;
            }
            alpha = alpha.max(best);
        }

        let mut moves = legal_moves(board, quiescing);
        if !quiescing && moves.is_empty() {
            return if !board.checkers().is_empty() {
                // Mate distance from the root keeps mates-in-N ordered.
                -MATE_SCORE + ply
            } else {
                DRAW_SCORE
            };
        }
        let mut scores: Vec<i32> = moves
            .iter()
            .map(|&m| {
                if Some(m) == tt_move {
                    TT_MOVE_SCORE
                } else {
                    mvv_lva(board, m)
                }
            })
            .collect();

        let orig_alpha = alpha;
        let mut best_move: Option<Move> = None;
        for i in 0..moves.len() {
            if clock.should_stop() {
                return MATE_SCORE;
            }

            // Incremental selection sort: pull the best remaining move to the
            // front. Cutoffs usually come early, so most of the list is never
            // ordered at all.
            for j in i + 1..moves.len() {
                if scores[j] > scores[i] {
                    moves.swap(i, j);
                    scores.swap(i, j);
                }
            }

            let m = moves[i];
            let mut child = board.clone();
            child.play(m);
            self.path.push(key);
            let score = -self.search(&child, clock, -beta, -alpha, depth - 1, ply + 1);
            self.path.pop();

            if score > best {
                best = score;
                best_move = Some(m);
                if root {
                    self.root_move = Some(m);
                }
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
        }

        let bound = if best >= beta {
            Bound::Lower
        } else if best > orig_alpha {
            Bound::Exact
        } else {
            Bound::Upper
        };
        self.tt.store(Entry { key, best: best_move, depth, score: best, bound });

        best
    }
}
