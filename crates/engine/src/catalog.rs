//! Static per-(kind, color) piece data: glyphs, values, initial squares
//! and relative move templates. Loaded once, immutable for the process.

use crate::types::{Color, PieceKind, Square};

/// The move template and display data shared by every piece of one
/// (kind, color). For every kind except pawns the capture vectors are
/// the move vectors.
#[derive(Debug)]
pub struct PieceTemplate {
    pub notation: &'static str,
    pub glyph: &'static str,
    pub value: i32,
    pub displacement: i8,
    pub initial_squares: &'static [Square],
    pub relative_moves: &'static [(i8, i8)],
    pub relative_captures: &'static [(i8, i8)],
}

const fn sq(rank: i8, file: i8) -> Square {
    Square { rank, file }
}

const ROOK_VECTORS: &[(i8, i8)] = &[(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_VECTORS: &[(i8, i8)] = &[(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROYAL_VECTORS: &[(i8, i8)] = &[
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_VECTORS: &[(i8, i8)] = &[
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

static WHITE_PAWN: PieceTemplate = PieceTemplate {
    notation: "",
    glyph: "\u{2659}",
    value: 1,
    displacement: 1,
    initial_squares: &[
        sq(6, 0),
        sq(6, 1),
        sq(6, 2),
        sq(6, 3),
        sq(6, 4),
        sq(6, 5),
        sq(6, 6),
        sq(6, 7),
    ],
    relative_moves: &[(-1, 0)],
    relative_captures: &[(-1, 1), (-1, -1)],
};

static BLACK_PAWN: PieceTemplate = PieceTemplate {
    notation: "",
    glyph: "\u{265F}",
    value: 1,
    displacement: 1,
    initial_squares: &[
        sq(1, 0),
        sq(1, 1),
        sq(1, 2),
        sq(1, 3),
        sq(1, 4),
        sq(1, 5),
        sq(1, 6),
        sq(1, 7),
    ],
    relative_moves: &[(1, 0)],
    relative_captures: &[(1, 1), (1, -1)],
};

static WHITE_ROOK: PieceTemplate = PieceTemplate {
    notation: "R",
    glyph: "\u{2656}",
    value: 5,
    displacement: 7,
    initial_squares: &[sq(7, 0), sq(7, 7)],
    relative_moves: ROOK_VECTORS,
    relative_captures: ROOK_VECTORS,
};

static BLACK_ROOK: PieceTemplate = PieceTemplate {
    notation: "R",
    glyph: "\u{265C}",
    value: 5,
    displacement: 7,
    initial_squares: &[sq(0, 0), sq(0, 7)],
    relative_moves: ROOK_VECTORS,
    relative_captures: ROOK_VECTORS,
};

static WHITE_KNIGHT: PieceTemplate = PieceTemplate {
    notation: "N",
    glyph: "\u{2658}",
    value: 3,
    displacement: 1,
    initial_squares: &[sq(7, 1), sq(7, 6)],
    relative_moves: KNIGHT_VECTORS,
    relative_captures: KNIGHT_VECTORS,
};

static BLACK_KNIGHT: PieceTemplate = PieceTemplate {
    notation: "N",
    glyph: "\u{265E}",
    value: 3,
    displacement: 1,
    initial_squares: &[sq(0, 1), sq(0, 6)],
    relative_moves: KNIGHT_VECTORS,
    relative_captures: KNIGHT_VECTORS,
};

static WHITE_BISHOP: PieceTemplate = PieceTemplate {
    notation: "B",
    glyph: "\u{2657}",
    value: 3,
    displacement: 7,
    initial_squares: &[sq(7, 2), sq(7, 5)],
    relative_moves: BISHOP_VECTORS,
    relative_captures: BISHOP_VECTORS,
};

static BLACK_BISHOP: PieceTemplate = PieceTemplate {
    notation: "B",
    glyph: "\u{265D}",
    value: 3,
    displacement: 7,
    initial_squares: &[sq(0, 2), sq(0, 5)],
    relative_moves: BISHOP_VECTORS,
    relative_captures: BISHOP_VECTORS,
};

static WHITE_QUEEN: PieceTemplate = PieceTemplate {
    notation: "Q",
    glyph: "\u{2655}",
    value: 9,
    displacement: 7,
    initial_squares: &[sq(7, 3)],
    relative_moves: ROYAL_VECTORS,
    relative_captures: ROYAL_VECTORS,
};

static BLACK_QUEEN: PieceTemplate = PieceTemplate {
    notation: "Q",
    glyph: "\u{265B}",
    value: 9,
    displacement: 7,
    initial_squares: &[sq(0, 3)],
    relative_moves: ROYAL_VECTORS,
    relative_captures: ROYAL_VECTORS,
};

static WHITE_KING: PieceTemplate = PieceTemplate {
    notation: "K",
    glyph: "\u{2654}",
    value: 0,
    displacement: 1,
    initial_squares: &[sq(7, 4)],
    relative_moves: ROYAL_VECTORS,
    relative_captures: ROYAL_VECTORS,
};

static BLACK_KING: PieceTemplate = PieceTemplate {
    notation: "K",
    glyph: "\u{265A}",
    value: 0,
    displacement: 1,
    initial_squares: &[sq(0, 4)],
    relative_moves: ROYAL_VECTORS,
    relative_captures: ROYAL_VECTORS,
};

/// Template lookup for a (kind, color) pair.
pub fn template(kind: PieceKind, color: Color) -> &'static PieceTemplate {
    match (kind, color) {
        (PieceKind::Pawn, Color::White) => &WHITE_PAWN,
        (PieceKind::Pawn, Color::Black) => &BLACK_PAWN,
        (PieceKind::Rook, Color::White) => &WHITE_ROOK,
        (PieceKind::Rook, Color::Black) => &BLACK_ROOK,
        (PieceKind::Knight, Color::White) => &WHITE_KNIGHT,
        (PieceKind::Knight, Color::Black) => &BLACK_KNIGHT,
        (PieceKind::Bishop, Color::White) => &WHITE_BISHOP,
        (PieceKind::Bishop, Color::Black) => &BLACK_BISHOP,
        (PieceKind::Queen, Color::White) => &WHITE_QUEEN,
        (PieceKind::Queen, Color::Black) => &BLACK_QUEEN,
        (PieceKind::King, Color::White) => &WHITE_KING,
        (PieceKind::King, Color::Black) => &BLACK_KING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_vectors_are_rank_mirrored() {
        let white = template(PieceKind::Pawn, Color::White);
        let black = template(PieceKind::Pawn, Color::Black);

        assert_eq!(white.relative_moves, &[(-1, 0)]);
        assert_eq!(black.relative_moves, &[(1, 0)]);
        assert_eq!(white.relative_captures, &[(-1, 1), (-1, -1)]);
        assert_eq!(black.relative_captures, &[(1, 1), (1, -1)]);
    }

    #[test]
    fn test_captures_match_moves_for_non_pawns() {
        for kind in PieceKind::ALL {
            if kind == PieceKind::Pawn {
                continue;
            }
            for color in [Color::White, Color::Black] {
                let t = template(kind, color);
                assert_eq!(
                    t.relative_moves, t.relative_captures,
                    "{:?} should capture along its move vectors",
                    kind
                );
            }
        }
    }

    #[test]
    fn test_displacement_and_values() {
        for color in [Color::White, Color::Black] {
            assert_eq!(template(PieceKind::Rook, color).displacement, 7);
            assert_eq!(template(PieceKind::Bishop, color).displacement, 7);
            assert_eq!(template(PieceKind::Queen, color).displacement, 7);
            assert_eq!(template(PieceKind::Knight, color).displacement, 1);
            assert_eq!(template(PieceKind::King, color).displacement, 1);
            assert_eq!(template(PieceKind::Pawn, color).displacement, 1);

            assert_eq!(template(PieceKind::Pawn, color).value, 1);
            assert_eq!(template(PieceKind::Knight, color).value, 3);
            assert_eq!(template(PieceKind::Bishop, color).value, 3);
            assert_eq!(template(PieceKind::Rook, color).value, 5);
            assert_eq!(template(PieceKind::Queen, color).value, 9);
            assert_eq!(template(PieceKind::King, color).value, 0);
        }
    }

    #[test]
    fn test_initial_squares() {
        let white_pawns = template(PieceKind::Pawn, Color::White).initial_squares;
        assert_eq!(white_pawns.len(), 8);
        assert!(white_pawns.iter().all(|s| s.rank == 6));

        let black_pawns = template(PieceKind::Pawn, Color::Black).initial_squares;
        assert!(black_pawns.iter().all(|s| s.rank == 1));

        assert_eq!(
            template(PieceKind::King, Color::White).initial_squares,
            &[Square::new(7, 4)]
        );
        assert_eq!(
            template(PieceKind::Rook, Color::Black).initial_squares,
            &[Square::new(0, 0), Square::new(0, 7)]
        );
    }

    #[test]
    fn test_glyphs_differ_by_color() {
        for kind in PieceKind::ALL {
            let white = template(kind, Color::White);
            let black = template(kind, Color::Black);
            assert_ne!(white.glyph, black.glyph);
            assert_eq!(white.notation, black.notation);
        }
        assert_eq!(template(PieceKind::King, Color::White).glyph, "\u{2654}");
        assert_eq!(template(PieceKind::Pawn, Color::Black).glyph, "\u{265F}");
    }
}
