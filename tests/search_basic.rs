use std::time::Duration;

use taperbot::board::{legal_moves, Position};
use taperbot::clock::Clock;

fn generous_clock() -> Clock {
    Clock::movetime(Duration::from_secs(3600))
}

#[test]
fn depth_one_startpos_returns_an_opening_move() {
    use taperbot::eval::Tapered;
    use taperbot::search::Searcher;
    let pos = Position::startpos();
    let mut s = Searcher::new(Tapered::new());
    let res = s.think_to_depth(&pos, &generous_clock(), 1);
    let best = res.best.expect("startpos has legal moves");
    let legal = legal_moves(pos.board(), false);
    assert_eq!(legal.len(), 20);
    assert!(legal.contains(&best), "chose illegal move {best}");
    // No captures or threats exist, so the tempo bonus keeps depth 1 positive.
    assert!(res.score > 0, "expected positive startpos score, got {}", res.score);
    assert_eq!(res.depth, 1);
}

#[test]
fn hanging_queen_gets_taken() {
    use taperbot::eval::Tapered;
    use taperbot::search::Searcher;
    let pos = Position::from_fen("k7/8/8/3q4/4P3/8/8/K7 w - - 0 1").expect("valid fen");
    let mut s = Searcher::new(Tapered::new());
    let res = s.think_to_depth(&pos, &generous_clock(), 2);
    let best = res.best.expect("expected a move");
    assert_eq!(best.to_string(), "e4d5", "pawn should take the queen");
    assert!(
        res.score > 600,
        "score should reflect roughly queen-minus-pawn, got {}",
        res.score
    );
}

#[test]
fn hanging_queen_with_material_eval() {
    use taperbot::eval::Material;
    use taperbot::search::Searcher;
    // Same search, different evaluator plugged into the same seam.
    let pos = Position::from_fen("k7/8/8/3q4/4P3/8/8/K7 w - - 0 1").expect("valid fen");
    let mut s = Searcher::new(Material);
    let res = s.think_to_depth(&pos, &generous_clock(), 3);
    assert_eq!(res.best.expect("expected a move").to_string(), "e4d5");
    assert!(res.score > 700, "material swing expected, got {}", res.score);
}

#[test]
fn exhausted_clock_still_yields_a_legal_move() {
    use taperbot::eval::Tapered;
    use taperbot::search::Searcher;
    let pos = Position::startpos();
    let mut s = Searcher::new(Tapered::new());
    // Already over budget: every iteration aborts before recording a root
    // move, so think falls back to the first legal move.
    let clock = Clock::fixed(Duration::from_millis(11), Duration::from_millis(300));
    let res = s.think(&pos, &clock);
    let best = res.best.expect("must still return a legal move");
    assert!(legal_moves(pos.board(), false).contains(&best));
    assert_eq!(res.depth, 0, "no iteration should have completed");
}

#[test]
fn deeper_search_does_not_lose_the_capture() {
    use taperbot::eval::Tapered;
    use taperbot::search::Searcher;
    let pos = Position::from_fen("k7/8/8/3q4/4P3/8/8/K7 w - - 0 1").expect("valid fen");
    let mut s = Searcher::new(Tapered::new());
    let res = s.think_to_depth(&pos, &generous_clock(), 5);
    assert_eq!(res.best.expect("expected a move").to_string(), "e4d5");
    assert_eq!(res.depth, 5);
    assert!(res.nodes > 0);
}
