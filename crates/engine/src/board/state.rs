use super::Board;
use crate::notation::{generate_notation, MoveFlags};
use crate::types::{CastleSide, PieceKind, Square};

impl Board {
    /// Executes a semi-trusted move and appends its notation to the
    /// history. The caller is expected to have taken `to` from
    /// [`Board::valid_moves`]; use [`Board::try_move`] to re-validate
    /// instead.
    ///
    /// Returns true if a piece actually moved. An empty source square
    /// and a capture attempt on a king are both refused with no
    /// relocation and no history entry.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        let Some(piece_id) = self.get(from) else {
            return false;
        };
        let other_id = self.get(to);
        let piece = *self.piece(piece_id);
        let other = other_id.map(|id| *self.piece(id));

        let mut en_passanted = false;
        let mut castled = None;
        let mut landing = to;

        // A stale window never survives a non-pawn move.
        if piece.kind != PieceKind::Pawn {
            self.set_en_passant_window(None);
        }

        // A king or rook landing on its same-color counterpart is a
        // castle; the destinations were generated that way.
        let castle_partner = match (piece.kind, other_id, other) {
            (PieceKind::King | PieceKind::Rook, Some(id), Some(o))
                if matches!(o.kind, PieceKind::King | PieceKind::Rook)
                    && o.kind != piece.kind
                    && o.color == piece.color =>
            {
                Some((id, o))
            }
            _ => None,
        };

        if let Some((partner_id, partner)) = castle_partner {
            self.remove(to);
            self.remove(from);

            // Destination files are fixed per side. A rook moving off
            // its corner names the side directly; a moving king names
            // it by travel direction.
            let (king_file, rook_file, side) = if from.file == 7 {
                (5, 6, CastleSide::Kingside)
            } else if from.file == 0 {
                (3, 2, CastleSide::Queenside)
            } else if from.file < to.file {
                (6, 5, CastleSide::Kingside)
            } else {
                (2, 3, CastleSide::Queenside)
            };
            castled = Some(side);

            self.piece_mut(partner_id).has_moved = true;
            self.piece_mut(piece_id).has_moved = true;

            let partner_file = if partner.kind == PieceKind::King {
                king_file
            } else {
                rook_file
            };
            let mover_file = if piece.kind == PieceKind::King {
                king_file
            } else {
                rook_file
            };
            self.set(Square::new(from.rank, partner_file), partner_id);
            self.set(Square::new(from.rank, mover_file), piece_id);
        } else {
            // Kings are never captured; check ends games elsewhere.
            if other.map_or(false, |o| o.kind == PieceKind::King) {
                return false;
            }

            if piece.kind == PieceKind::Pawn {
                if (to.rank - from.rank).abs() == 2 && piece.is_initial_square(from) {
                    // Double step: open the window at the destination.
                    self.set_en_passant_window(Some(to));
                } else {
                    let vector = (to.rank - from.rank, to.file - from.file);
                    if let Some(window) = self.en_passant_window() {
                        // Landing on the window square off one of the
                        // normal capture vectors is the en-passant
                        // capture; the pawn actually comes to rest one
                        // rank past the window.
                        if to == window && !piece.relative_captures().contains(&vector) {
                            self.remove(window);
                            en_passanted = true;
                            landing =
                                Square::new(window.rank + piece.color.forward(), window.file);
                        }
                    }
                    self.set_en_passant_window(None);
                }
            }

            self.remove(from);
            self.set(landing, piece_id);
            self.piece_mut(piece_id).has_moved = true;
        }

        let capture = other.is_some() && castled.is_none();

        // Re-run check detection from wherever the mover ended up.
        let check = self.find_check(landing);
        if let Some(checker) = check {
            let checkmate = if self.find_checkmate(landing) {
                Some(checker)
            } else {
                None
            };
            self.set_check_state(Some(checker), checkmate);
        } else {
            self.set_check_state(None, None);
        }

        let flags = MoveFlags {
            capture,
            en_passant: en_passanted,
            check: self.check().is_some(),
            checkmate: self.checkmate().is_some(),
            castle: castled,
        };
        let notation = generate_notation(piece.kind, piece.notation(), from, landing, flags);
        self.push_history(notation);

        true
    }

    /// If the piece at `square` can reach an opposing king, that piece
    /// is giving check; returns its square.
    fn find_check(&self, square: Square) -> Option<Square> {
        let piece = self.piece_at(square)?;
        for target in self.valid_moves(square) {
            if let Some(occupant) = self.piece_at(target) {
                if occupant.kind == PieceKind::King && occupant.color != piece.color {
                    return Some(square);
                }
            }
        }
        None
    }

    /// Checkmate detection is a stub and always reports false.
    fn find_checkmate(&self, _square: Square) -> bool {
        false
    }
}
