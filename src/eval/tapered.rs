use cozy_chess::{
    get_bishop_moves, get_king_moves, get_rook_moves, BitBoard, Board, Color, Piece, Square,
};

use crate::board::file_mask;
use crate::eval::{params, Evaluator};

/// Midgame tempo bonus for the side to move; worth nothing in the endgame.
const TEMPO: i32 = 15;

/// Tapered evaluation: every term carries a midgame and an endgame value,
/// blended by how much material is left on the board.
///
/// Both halves of each term live in one i32 (`(eg << 16) + mg`), so a single
/// addition updates the midgame and endgame accumulators at once; carries
/// between the halves are undone when the final score is unpacked.
pub struct Tapered {
    values: [i32; 138],
}

impl Default for Tapered {
    fn default() -> Self {
        let mut values = [0i32; 138];
        for (v, &(mg, eg)) in values.iter_mut().zip(params::TERMS.iter()) {
            *v = ((eg as i32) << 16) + mg as i32;
        }
        Self { values }
    }
}

impl Tapered {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Attack set for the pieces the mobility and king-attack terms cover:
/// bishops, rooks, queens and the king. Pawns and knights never reach here.
fn pseudo_attacks(piece: Piece, sq: Square, occupied: BitBoard) -> BitBoard {
    match piece {
        Piece::Bishop => get_bishop_moves(sq, occupied),
        Piece::Rook => get_rook_moves(sq, occupied),
        Piece::Queen => get_bishop_moves(sq, occupied) | get_rook_moves(sq, occupied),
        _ => get_king_moves(sq),
    }
}

impl Evaluator for Tapered {
    fn evaluate(&self, board: &Board) -> i32 {
        let v = &self.values;
        let stm = board.side_to_move();
        let occupied = board.occupied();

        let mut score: i32 = TEMPO;
        let mut phase: i32 = 0;

        // Opponent first, side to move second; negating the accumulator at
        // the top of each pass keeps every term added from the perspective of
        // the side being scanned, and leaves the total in the mover's view.
        for side in [!stm, stm] {
            score = -score;
            let own = board.colors(side);
            let own_pawns = own & board.pieces(Piece::Pawn);
            let enemy_king_zone = get_king_moves(board.king(!side));

            for piece in Piece::ALL {
                let p = piece as usize + 1;
                for sq in own & board.pieces(piece) {
                    let file = sq.file();

                    // Open/semi-open file: no friendly pawn on this file other
                    // than the piece itself. For a pawn that doubles as a
                    // doubled-pawn test.
                    if (file_mask(file) & !sq.bitboard() & own_pawns).is_empty() {
                        score += v[126 + p];
                    }

                    // Mobility and king attacks for bishops, rooks, queens and
                    // the king; weaker pieces are not worth the terms.
                    if p > 2 {
                        let mobility = pseudo_attacks(piece, sq, occupied) & !own;
                        score += v[112 + p] * mobility.len() as i32
                            + v[119 + p] * (mobility & enemy_king_zone).len() as i32;
                    }

                    phase += v[p];

                    // Rank/file positional terms are stored divided by 8 and
                    // written from White's side; mirror the rank for Black.
                    let rank = if side == Color::White {
                        sq.rank() as usize
                    } else {
                        7 - sq.rank() as usize
                    };
                    score += (v[p * 8 + rank] + v[56 + p * 8 + file as usize]) << 3;
                }
            }
        }

        // Unpack the halves (low 16 bits midgame with sign extension, high 16
        // endgame with the carry rounded back out) and interpolate by phase:
        // 24 = full board, 0 = pawns and kings only.
        let mg = score as i16 as i32;
        let eg = (score + 0x8000) >> 16;
        (mg * phase + eg * (24 - phase)) / 24
    }
}
