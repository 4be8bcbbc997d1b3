use cozy_chess::Board;

pub mod material;
pub mod params;
pub mod tapered;

pub use material::Material;
pub use tapered::Tapered;

/// Static evaluation interface. Scores are centipawn-like integers from the
/// perspective of the side to move; the search depends only on this seam.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}
