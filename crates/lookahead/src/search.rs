use engine::{Board, Square};

use crate::types::DepthBin;

/// Depth-first lookahead over a single shared board.
///
/// Each candidate move is simulated by raw grid relocation and undone
/// on the way back out, so the board is byte-identical to its pre-call
/// state after every search. Simulation is geometry-only: castling and
/// en passant are not replayed down the tree.
pub struct DepthSearch {
    pub positions_examined: u64,
}

impl DepthSearch {
    pub fn new() -> Self {
        Self {
            positions_examined: 0,
        }
    }

    /// Explores up to `depth` plies from the current legal moves of the
    /// piece at `square`, binning each visited position's moves by the
    /// depth remaining when it was reached.
    ///
    /// No piece at `square`, or a negative depth, yields no bins.
    pub fn valid_moves_to_depth(
        &mut self,
        board: &mut Board,
        square: Square,
        depth: i32,
    ) -> Vec<DepthBin> {
        self.positions_examined = 0;
        let mut bins = Vec::new();
        self.collect(board, square, depth, &mut bins);
        bins
    }

    fn collect(&mut self, board: &mut Board, square: Square, depth: i32, bins: &mut Vec<DepthBin>) {
        if depth < 0 || board.get(square).is_none() {
            return;
        }
        self.positions_examined += 1;

        let moves = board.valid_moves(square);
        bins.push((depth, moves.clone()));

        for &target in &moves {
            // The guard restores both grid cells when it drops, on every
            // return path out of the recursion.
            let mut sim = board.simulate_move(square, target);
            self.collect(&mut sim, target, depth - 1, bins);
        }
    }
}

impl Default for DepthSearch {
    fn default() -> Self {
        Self::new()
    }
}
