use cozy_chess::{Board as CozyBoard, BitBoard, Color, File, Move, Piece, Rank, Square};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("invalid FEN: {0}")]
    BadFen(String),
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

/// A live game position: the host board plus the structural hashes of every
/// earlier position this game, which is what repetition detection needs.
#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    history: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default(), history: Vec::new() }
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        CozyBoard::from_fen(fen, false)
            .map(|board| Self { board, history: Vec::new() })
            .map_err(|e| PositionError::BadFen(format!("{e:?}")))
    }

    pub fn from_start_and_moves(moves: &[String]) -> Result<Self, PositionError> {
        let mut pos = Self::startpos();
        for m in moves {
            pos.play_uci(m)?;
        }
        Ok(pos)
    }

    pub fn board(&self) -> &CozyBoard {
        &self.board
    }

    /// Structural hashes of every position played earlier this game.
    pub fn history(&self) -> &[u64] {
        &self.history
    }

    pub fn play(&mut self, mv: Move) -> Result<(), PositionError> {
        let hash = self.board.hash();
        self.board
            .try_play(mv)
            .map_err(|_| PositionError::IllegalMove(format!("{mv}")))?;
        self.history.push(hash);
        Ok(())
    }

    pub fn play_uci(&mut self, mv_uci: &str) -> Result<(), PositionError> {
        let mut found = None;
        self.board.generate_moves(|moves| {
            for m in moves {
                if format!("{m}") == mv_uci {
                    found = Some(m);
                    break;
                }
            }
            found.is_some()
        });
        match found {
            Some(m) => self.play(m),
            None => Err(PositionError::IllegalMove(mv_uci.to_string())),
        }
    }

    /// Whether the current position already occurred earlier this game.
    pub fn is_repetition(&self) -> bool {
        self.history.contains(&self.board.hash())
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }
}

/// All legal moves, or just the captures (including en passant) when
/// `captures_only` is set.
pub fn legal_moves(board: &CozyBoard, captures_only: bool) -> Vec<Move> {
    let stm = board.side_to_move();
    let enemy = board.colors(!stm);
    let ep_square = board.en_passant().map(|file| {
        let rank = if stm == Color::White { Rank::Sixth } else { Rank::Third };
        Square::new(file, rank)
    });
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|mut ml| {
        if captures_only {
            let mut targets = enemy;
            if ml.piece == Piece::Pawn {
                if let Some(ep) = ep_square {
                    targets |= ep.bitboard();
                }
            }
            ml.to &= targets;
        }
        for m in ml {
            moves.push(m);
        }
        false
    });
    moves
}

/// The piece kind a move captures, if any. En passant lands on an empty
/// square, so a pawn moving diagonally onto nothing is still a pawn capture.
/// Castling is encoded as king-takes-own-rook, so a friendly piece on the
/// destination means nothing is captured.
pub fn victim_of(board: &CozyBoard, mv: Move) -> Option<Piece> {
    if let Some(victim) = board.piece_on(mv.to) {
        let stm = board.side_to_move();
        if board.colors(stm).has(mv.to) {
            return None;
        }
        return Some(victim);
    }
    if board.piece_on(mv.from) == Some(Piece::Pawn) && mv.from.file() != mv.to.file() {
        return Some(Piece::Pawn);
    }
    None
}

pub fn is_capture(board: &CozyBoard, mv: Move) -> bool {
    victim_of(board, mv).is_some()
}

/// A file mask for open/semi-open file tests.
pub fn file_mask(file: File) -> BitBoard {
    BitBoard(0x0101_0101_0101_0101 << file as usize)
}
