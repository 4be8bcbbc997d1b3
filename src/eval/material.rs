use cozy_chess::{Board, Color, Piece};

use crate::eval::Evaluator;

const PAWN: i32 = 100;
const KNIGHT: i32 = 320;
const BISHOP: i32 = 330;
const ROOK: i32 = 500;
const QUEEN: i32 = 900;

/// Plain material count. Kept as a cheap baseline evaluator; plugging it into
/// the same searcher gives a weaker but much faster engine.
#[derive(Default)]
pub struct Material;

fn count(board: &Board, color: Color, piece: Piece) -> i32 {
    (board.colors(color) & board.pieces(piece)).len() as i32
}

impl Evaluator for Material {
    fn evaluate(&self, board: &Board) -> i32 {
        let w = Color::White;
        let b = Color::Black;
        let score = (count(board, w, Piece::Pawn) - count(board, b, Piece::Pawn)) * PAWN
            + (count(board, w, Piece::Knight) - count(board, b, Piece::Knight)) * KNIGHT
            + (count(board, w, Piece::Bishop) - count(board, b, Piece::Bishop)) * BISHOP
            + (count(board, w, Piece::Rook) - count(board, b, Piece::Rook)) * ROOK
            + (count(board, w, Piece::Queen) - count(board, b, Piece::Queen)) * QUEEN;
        if board.side_to_move() == Color::White {
            score
        } else {
            -score
        }
    }
}
