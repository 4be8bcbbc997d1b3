//! Tuned evaluation terms as (midgame, endgame) centipawn-scale pairs.
//!
//! Layout, indexed by piece kind `p` (Pawn=1 .. King=6, 0 unused):
//!   1..=6            game-phase weights (midgame half only)
//!   p * 8 + rank     per-rank positional term, divided by 8
//!   56 + p * 8 + file  per-file positional term, divided by 8
//!   112 + p          mobility weight (bishop/rook/queen/king slots)
//!   119 + p          king-attack weight (bishop/rook/queen/king slots)
//!   126 + p          open/semi-open-file term
//!
//! Material is folded into the rank/file terms rather than kept separately.

pub const TERMS: [(i16, i16); 138] = [
    (0, 0), (0, 0), (1, 0), (1, 0),
    (2, 0), (4, 0), (0, 0), (0, 0),
    (0, 0), (4, 7), (5, 6), (5, 6),
    (7, 8), (10, 21), (26, 34), (0, 0),
    (22, 17), (25, 21), (27, 24), (29, 28),
    (30, 29), (35, 26), (31, 23), (8, 22),
    (26, 21), (28, 21), (28, 22), (28, 23),
    (28, 24), (30, 23), (26, 23), (19, 24),
    (38, 46), (35, 45), (36, 45), (36, 48),
    (39, 49), (43, 49), (43, 50), (44, 50),
    (76, 80), (75, 82), (73, 88), (71, 94),
    (70, 98), (72, 97), (68, 98), (73, 94),
    (-3, 0), (-3, 0), (-5, 0), (-3, 0),
    (2, 4), (13, 3), (11, 2), (6, -6),
    (0, 0), (0, 0), (0, 0), (0, 0),
    (0, 0), (0, 0), (0, 0), (0, 0),
    (4, 15), (6, 14), (7, 12), (9, 10),
    (10, 11), (13, 11), (12, 12), (5, 11),
    (27, 29), (31, 32), (33, 36), (34, 38),
    (34, 38), (34, 36), (33, 33), (30, 29),
    (32, 33), (34, 34), (34, 34), (34, 35),
    (34, 34), (33, 34), (35, 34), (33, 33),
    (36, 57), (36, 57), (38, 57), (39, 57),
    (38, 57), (38, 57), (36, 57), (36, 56),
    (98, 93), (99, 95), (99, 96), (99, 98),
    (98, 100), (99, 100), (101, 98), (100, 98),
    (-2, 0), (5, -2), (-1, 0), (-11, 0),
    (-4, 0), (-8, 0), (3, 0), (1, -6),
    (0, 0), (0, 0), (0, 0), (6, 7),
    (3, 4), (3, 3), (-10, 0), (0, 0),
    (0, 0), (9, -2), (16, 0), (36, -10),
    (23, 18), (-114, 0), (0, 0), (16, 26),
    (5, -4), (1, 4), (31, 13), (3, 21),
    (-30, 0), (0, 0), (0, 0), (0, 0),
    (0, 0), (0, 0),
];
