use super::Board;
use crate::types::{PieceKind, Square};

impl Board {
    /// Endpoint check for a candidate move: `to` must be on the board,
    /// different from `from`, and not held by a same-color piece. Says
    /// nothing about the squares in between.
    pub fn board_safe(&self, from: Square, to: Square) -> bool {
        if !to.in_bounds() {
            return false;
        }
        if to == from {
            return false;
        }

        if let (Some(dest), Some(mover)) = (self.piece_at(to), self.piece_at(from)) {
            if dest.color == mover.color {
                return false;
            }
        }

        true
    }

    /// Walks the straight line from `from` to `to` (endpoint included)
    /// and reports whether the run is passable.
    ///
    /// A same-color piece blocks the path unless it is a king or rook,
    /// or `castling` is set. Any other occupant counts against a
    /// single-piece tolerance: one may be seen, but reaching a second
    /// piece, or any square past the first, fails the walk. Castling
    /// legality relies on that tolerance admitting the partner piece at
    /// the endpoint.
    pub fn check_path(&self, from: Square, to: Square, castling: bool) -> bool {
        let delta = (to.rank - from.rank, to.file - from.file);
        let distance = delta.0.abs().max(delta.1.abs());
        if distance == 0 {
            return true;
        }
        let step = (delta.0 / distance, delta.1 / distance);

        let mover_color = self.piece_at(from).map(|p| p.color);
        let mut seen_enemy = false;

        for i in 1..=distance {
            let next = from.offset(step.0 * i, step.1 * i);
            match self.piece_at(next) {
                Some(occupant) => {
                    let friendly_blocker = mover_color == Some(occupant.color)
                        && !matches!(occupant.kind, PieceKind::King | PieceKind::Rook)
                        && !castling;
                    if friendly_blocker {
                        return false;
                    }
                    if seen_enemy {
                        return false;
                    }
                    seen_enemy = true;
                }
                None => {
                    if seen_enemy {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Whether `to` is among the legal destinations currently generated
    /// for the piece at `from`.
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        if self.get(from).is_none() {
            return false;
        }
        self.valid_moves(from).contains(&to)
    }

    /// Strict variant of [`Board::move_piece`]: re-validates the move
    /// instead of trusting the caller, and reports why it was rejected.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<(), String> {
        if self.get(from).is_none() {
            return Err(format!("No piece at ({}, {})", from.rank, from.file));
        }
        if !self.is_valid_move(from, to) {
            return Err(format!(
                "Illegal move ({}, {}) -> ({}, {})",
                from.rank, from.file, to.rank, to.file
            ));
        }
        if !self.move_piece(from, to) {
            return Err("Move was refused".to_string());
        }
        Ok(())
    }
}
