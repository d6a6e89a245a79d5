use super::Board;
use crate::catalog;
use crate::types::{PieceKind, Square};

impl Board {
    /// Legal destinations for the piece at `square`. Empty when the
    /// square holds nothing.
    ///
    /// Generation deliberately ignores whether the resulting position
    /// leaves the mover's own king in check; pinned pieces are not
    /// restricted.
    pub fn valid_moves(&self, square: Square) -> Vec<Square> {
        let Some(id) = self.get(square) else {
            return Vec::new();
        };
        let piece = *self.piece(id);
        let mut moves = Vec::new();

        match piece.kind {
            PieceKind::Pawn => {
                // The en-passant window is offered on plain rank/file
                // adjacency, before any geometry below.
                if let Some(window) = self.en_passant_window() {
                    if window.rank == square.rank && (window.file - square.file).abs() == 1 {
                        moves.push(window);
                    }
                }
            }
            PieceKind::King | PieceKind::Rook => {
                // Castling: an unmoved king targets unmoved rooks on
                // their initial squares and vice versa. The partner's
                // square itself becomes the destination; the executor
                // recognizes the collision as a castle.
                if !piece.has_moved {
                    let partner = if piece.kind == PieceKind::King {
                        PieceKind::Rook
                    } else {
                        PieceKind::King
                    };
                    for &partner_square in catalog::template(partner, piece.color).initial_squares
                    {
                        if let Some(other) = self.piece_at(partner_square) {
                            if !other.has_moved
                                && self.check_path(square, partner_square, true)
                            {
                                moves.push(partner_square);
                            }
                        }
                    }
                }
            }
            _ => {}
        }

        for &(d_rank, d_file) in piece.relative_moves() {
            for displacement in 1..=piece.displacement() {
                let target = square.offset(d_rank * displacement, d_file * displacement);
                if !self.board_safe(square, target) {
                    continue;
                }

                match piece.kind {
                    PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                        if self.check_path(square, target, false) {
                            moves.push(target);
                        }
                    }
                    PieceKind::Pawn => {
                        // No forward capture: the one-step advance needs
                        // an empty square.
                        if self.get(target).is_none() {
                            moves.push(target);
                        }

                        for &(c_rank, c_file) in piece.relative_captures() {
                            let capture_square = square.offset(c_rank, c_file);
                            if self.board_safe(square, capture_square) {
                                if let Some(occupant) = self.piece_at(capture_square) {
                                    if occupant.color != piece.color {
                                        moves.push(capture_square);
                                    }
                                }
                            }
                        }

                        // Double step, only from the initial square and
                        // only through two empty squares.
                        if piece.is_initial_square(square) {
                            let two = square.offset(d_rank * 2, d_file * 2);
                            if self.check_path(square, two, false) && self.get(two).is_none() {
                                moves.push(two);
                            }
                        }
                    }
                    _ => moves.push(target),
                }
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SetupOptions;
    use crate::types::{Color, Piece};

    fn empty_board() -> Board {
        Board::with_options(&SetupOptions {
            no_initial_pieces: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::new();
        assert!(board.valid_moves(Square::new(4, 4)).is_empty());
    }

    #[test]
    fn test_initial_pawn_moves() {
        let board = Board::new();
        let moves = board.valid_moves(Square::new(6, 4));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Square::new(5, 4)));
        assert!(moves.contains(&Square::new(4, 4)));
    }

    #[test]
    fn test_initial_knight_moves() {
        let board = Board::new();
        let moves = board.valid_moves(Square::new(7, 1));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Square::new(5, 0)));
        assert!(moves.contains(&Square::new(5, 2)));
    }

    #[test]
    fn test_initial_sliders_are_boxed_in() {
        let board = Board::new();
        assert!(board.valid_moves(Square::new(7, 0)).is_empty());
        assert!(board.valid_moves(Square::new(7, 2)).is_empty());
        assert!(board.valid_moves(Square::new(7, 3)).is_empty());
    }

    #[test]
    fn test_pawn_blocked_by_own_piece_generates_nothing() {
        let mut board = empty_board();
        board.place(Piece::new(Color::White, PieceKind::Pawn), Square::new(6, 2));
        board.place(Piece::new(Color::White, PieceKind::Knight), Square::new(5, 2));
        board.place(Piece::new(Color::Black, PieceKind::Pawn), Square::new(5, 1));

        // a same-color blocker ahead suppresses the whole pawn template,
        // diagonal captures included
        assert!(board.valid_moves(Square::new(6, 2)).is_empty());
    }

    #[test]
    fn test_pawn_captures_and_blocked_advance() {
        let mut board = empty_board();
        board.place(Piece::new(Color::White, PieceKind::Pawn), Square::new(6, 2));
        board.place(Piece::new(Color::Black, PieceKind::Rook), Square::new(5, 2));
        board.place(Piece::new(Color::Black, PieceKind::Pawn), Square::new(5, 3));

        let moves = board.valid_moves(Square::new(6, 2));
        // forward blocked by the enemy rook, double step blocked behind
        // it, one diagonal capture available
        assert_eq!(moves, vec![Square::new(5, 3)]);
    }

    #[test]
    fn test_slider_moves_respect_path_blocking() {
        let mut board = empty_board();
        board.place(Piece::new(Color::White, PieceKind::Bishop), Square::new(4, 4));
        board.place(Piece::new(Color::White, PieceKind::Pawn), Square::new(2, 2));
        board.place(Piece::new(Color::Black, PieceKind::Pawn), Square::new(6, 6));

        let moves = board.valid_moves(Square::new(4, 4));

        // up-left ray stops before the friendly pawn
        assert!(moves.contains(&Square::new(3, 3)));
        assert!(!moves.contains(&Square::new(2, 2)));
        assert!(!moves.contains(&Square::new(1, 1)));

        // down-right ray ends on the enemy pawn
        assert!(moves.contains(&Square::new(5, 5)));
        assert!(moves.contains(&Square::new(6, 6)));
        assert!(!moves.contains(&Square::new(7, 7)));

        // every generated move survives the path walk it was built from
        for &target in &moves {
            assert!(board.check_path(Square::new(4, 4), target, false));
        }
    }

    #[test]
    fn test_en_passant_window_is_offered_to_file_neighbors() {
        let mut board = Board::new();
        assert!(board.move_piece(Square::new(6, 4), Square::new(4, 4)));
        assert_eq!(board.en_passant_window(), Some(Square::new(4, 4)));

        board.place(Piece::new(Color::Black, PieceKind::Pawn), Square::new(4, 3));
        board.place(Piece::new(Color::Black, PieceKind::Pawn), Square::new(4, 5));
        board.place(Piece::new(Color::Black, PieceKind::Pawn), Square::new(4, 6));

        assert!(board.valid_moves(Square::new(4, 3)).contains(&Square::new(4, 4)));
        assert!(board.valid_moves(Square::new(4, 5)).contains(&Square::new(4, 4)));
        // two files away: no offer
        assert!(!board.valid_moves(Square::new(4, 6)).contains(&Square::new(4, 4)));
    }

    #[test]
    fn test_castling_destinations() {
        let mut board = empty_board();
        board.place(Piece::new(Color::White, PieceKind::King), Square::new(7, 4));
        board.place(Piece::new(Color::White, PieceKind::Rook), Square::new(7, 7));
        board.place(Piece::new(Color::White, PieceKind::Rook), Square::new(7, 0));

        let king_moves = board.valid_moves(Square::new(7, 4));
        assert!(king_moves.contains(&Square::new(7, 7)));
        assert!(king_moves.contains(&Square::new(7, 0)));

        // the rook sees the king's square the same way
        assert!(board.valid_moves(Square::new(7, 7)).contains(&Square::new(7, 4)));
    }

    #[test]
    fn test_castling_requires_unmoved_pieces_and_clear_path() {
        let mut board = Board::new();
        // standard position: bishop and knight sit between king and rook
        assert!(!board
            .valid_moves(Square::new(7, 4))
            .contains(&Square::new(7, 7)));

        let mut board = empty_board();
        board.place(Piece::new(Color::White, PieceKind::King), Square::new(7, 4));
        let rook = board.place(Piece::new(Color::White, PieceKind::Rook), Square::new(7, 7));
        board.piece_mut(rook).has_moved = true;

        assert!(!board
            .valid_moves(Square::new(7, 4))
            .contains(&Square::new(7, 7)));
    }
}
